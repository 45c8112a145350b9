use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

const JWT_EXPIRATION_DURATION_IN_HOURS: i64 = 12;

/// Who a token was issued to. A user token never opens admin routes and the
/// other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    User,
    Admin,
}

impl Audience {
    fn as_str(&self) -> &'static str {
        match self {
            Audience::User => "user",
            Audience::Admin => "admin",
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Claims {
    aud: String,
    sub: String,
    exp: i64,
}

pub fn create_jwt(
    secret: &[u8],
    audience: Audience,
    email: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        aud: audience.as_str().to_string(),
        sub: email,
        exp: (Utc::now() + Duration::hours(JWT_EXPIRATION_DURATION_IN_HOURS)).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(token)
}

pub fn get_email_from_token(
    secret: &[u8],
    audience: Audience,
    token: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_audience(&[audience.as_str()]);
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?;
    Ok(data.claims.sub)
}
