use axum::{
    extract::{Request, State},
    response::IntoResponse,
};

use crate::{
    service::auth::service::{LoginParams, RegisterParams},
    SharedState,
};

use super::{request::parse_body, response};

#[utoipa::path(
        post,
        path = "/api/v1/auth/register",
        responses(
            (status = OK, description = "", body = RegisterResult),
            (status = BAD_REQUEST, description = "invalid payload"),
            (status = UNPROCESSABLE_ENTITY, description = "email already exist"),
            (status = INTERNAL_SERVER_ERROR, description = "something went wrong in server"),
        ),
        request_body = RegisterParams
)]
pub async fn register(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: RegisterParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.auth_service.register(params).await;

    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        post,
        path = "/api/v1/auth/login",
        responses(
            (status = OK, description = "", body = LoginResult),
            (status = UNAUTHORIZED, description = "invalid credentials"),
            (status = FORBIDDEN, description = "account banned"),
        ),
        request_body = LoginParams
)]
pub async fn login(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: LoginParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.auth_service.login(params).await;

    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}
