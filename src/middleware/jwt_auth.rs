use axum::{
    extract::{Request, State},
    http::{self, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{handler::response, SharedState};

pub(crate) fn bearer_token(req: &Request) -> Option<&str> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())?;
    let mut parts = auth_header.split(' ');
    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) if !token.is_empty() => Some(token),
        _ => None,
    }
}

pub async fn auth_middleware(
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

    let user = {
        let state = state.read().await;
        state.auth_service.get_user_from_token(&token).await
    };

    let user = match user {
        Err(e) => return Ok(e.into_response()),
        Ok(u) => u,
    };

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
