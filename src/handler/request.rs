use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::response;

/// Read a JSON body and run its validation rules. On failure the returned
/// response is ready to send back.
pub async fn parse_body<T>(req: Request) -> Result<T, Response>
where
    T: DeserializeOwned + Validate,
{
    let body = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
        Err(_) => {
            return Err(
                response::error(StatusCode::BAD_REQUEST, "invalid request body").into_response(),
            );
        }
        Ok(b) => b,
    };
    let params: T = match serde_json::from_slice(&body) {
        Err(e) => {
            let mut s = e.to_string();
            if s.contains(" at") {
                let parts: Vec<&str> = s.split(" at").collect();
                s = parts[0].to_string();
            }
            return Err(response::error(StatusCode::BAD_REQUEST, &s).into_response());
        }
        Ok(p) => p,
    };

    if let Err(e) = params.validate() {
        if let Some((field, _)) = e.into_errors().into_iter().next() {
            return Err(response::error(
                StatusCode::BAD_REQUEST,
                &format!("{} is not valid", field),
            )
            .into_response());
        }
        return Err(response::error(StatusCode::BAD_REQUEST, "invalid payload").into_response());
    }
    Ok(params)
}
