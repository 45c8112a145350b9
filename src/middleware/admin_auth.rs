use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{handler::response, SharedState};

use super::jwt_auth::bearer_token;

/// Lets through tokens issued to an admin that still exists.
pub async fn admin_auth_middleware(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = match bearer_token(&req) {
        Some(token) => token.to_string(),
        None => {
            return Ok(response::error(StatusCode::UNAUTHORIZED, "invalid token").into_response());
        }
    };

    let admin = {
        let state = state.read().await;
        state.auth_service.get_admin_from_token(&token).await
    };

    let admin = match admin {
        Err(e) => return Ok(e.into_response()),
        Ok(a) => a,
    };

    req.extensions_mut().insert(admin);

    Ok(next.run(req).await)
}
