use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::repository::models::{AdminUser, User};
use crate::service::admin::service::Service as AdminService;
use crate::service::user::error::UserError;
use crate::service::user::service::{CreateUserParams, Service as UserService};

use super::{bcrypt, error::AuthError, jwt, jwt::Audience};

#[derive(Clone)]
pub struct Service {
    user_service: UserService,
    admin_service: AdminService,
    jwt_secret: String,
    bcrypt_cost: u32,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterParams {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 8))]
    pub confirm_password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterResult {
    pub id: i64,
}

#[derive(serde::Deserialize, Validate, ToSchema)]
pub struct LoginParams {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    User,
    Admin,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResult {
    pub token: String,
    pub account_type: AccountType,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ChangePasswordParams {
    pub old_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
    #[validate(length(min = 8))]
    pub confirm_password: String,
}

fn unexpected<E>(message: &str, e: E) -> AuthError
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::error!("{} due to err: {}", message, e);
    AuthError::Unexpected {
        message: message.to_string(),
        source: Box::new(e) as Box<dyn std::error::Error + Send + Sync>,
    }
}

impl Service {
    pub fn new(
        user_service: UserService,
        admin_service: AdminService,
        jwt_secret: String,
        bcrypt_cost: u32,
    ) -> Self {
        Service {
            user_service,
            admin_service,
            jwt_secret,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, params: RegisterParams) -> Result<RegisterResult, AuthError> {
        if params.password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.user_service.get_user_by_email(&params.email).await.is_ok()
            || self
                .admin_service
                .get_admin_by_email(&params.email)
                .await
                .is_some()
        {
            return Err(AuthError::EmailAlreadyTaken);
        }
        let encrypted_password = bcrypt::encrypt_password(&params.password, self.bcrypt_cost)
            .map_err(|e| unexpected("cannot encrypt password", e))?;

        let user = self
            .user_service
            .create_user(CreateUserParams {
                name: params.name,
                email: params.email,
                encrypted_password,
            })
            .await
            .map_err(|e| match e {
                UserError::EmailTaken => AuthError::EmailAlreadyTaken,
                other => unexpected("cannot create user", other),
            })?;
        Ok(RegisterResult { id: user.id })
    }

    /// An admin whose email and password both match wins; anything else is
    /// tried as a user login.
    pub async fn login(&self, params: LoginParams) -> Result<LoginResult, AuthError> {
        if let Some(admin) = self.admin_service.get_admin_by_email(&params.email).await {
            if self.verify(&params.password, &admin.password)? {
                let token = self.issue_token(Audience::Admin, admin.email)?;
                return Ok(LoginResult {
                    token,
                    account_type: AccountType::Admin,
                });
            }
        }

        let user = self
            .user_service
            .get_user_by_email(&params.email)
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;
        self.check_password(&params.password, &user.password)?;
        if user.is_banned {
            return Err(AuthError::Banned);
        }
        let token = self.issue_token(Audience::User, user.email)?;
        Ok(LoginResult {
            token,
            account_type: AccountType::User,
        })
    }

    pub async fn get_user_from_token(&self, token: &str) -> Result<User, AuthError> {
        let email = jwt::get_email_from_token(self.jwt_secret.as_bytes(), Audience::User, token)
            .map_err(|_| AuthError::InvalidToken)?;
        let user = self
            .user_service
            .get_user_by_email(&email)
            .await
            .map_err(|_| AuthError::InvalidToken)?;
        if user.is_banned {
            return Err(AuthError::Banned);
        }
        Ok(user)
    }

    pub async fn get_admin_from_token(&self, token: &str) -> Result<AdminUser, AuthError> {
        let email = jwt::get_email_from_token(self.jwt_secret.as_bytes(), Audience::Admin, token)
            .map_err(|_| AuthError::InvalidToken)?;
        self.admin_service
            .get_admin_by_email(&email)
            .await
            .ok_or(AuthError::InvalidToken)
    }

    pub async fn change_password(
        &self,
        user: &User,
        params: ChangePasswordParams,
    ) -> Result<(), AuthError> {
        if params.new_password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !self.verify(&params.old_password, &user.password)? {
            return Err(AuthError::WrongPassword);
        }
        let encrypted_password = bcrypt::encrypt_password(&params.new_password, self.bcrypt_cost)
            .map_err(|e| unexpected("cannot encrypt password", e))?;
        self.user_service
            .set_password(user.id, encrypted_password)
            .await
            .map_err(|e| unexpected("cannot update password", e))?;
        tracing::info!(user_id = user.id, "password changed");
        Ok(())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify_password(password, hash)
            .map_err(|e| unexpected("cannot verify the password", e))
    }

    fn check_password(&self, password: &str, hash: &str) -> Result<(), AuthError> {
        if !self.verify(password, hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(())
    }

    fn issue_token(&self, audience: Audience, email: String) -> Result<String, AuthError> {
        jwt::create_jwt(self.jwt_secret.as_bytes(), audience, email)
            .map_err(|e| unexpected("cannot generate token", e))
    }
}
