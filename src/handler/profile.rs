use axum::{
    extract::{Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    repository::models::User,
    service::{auth::service::ChangePasswordParams, user::service::UpdateNameParams},
    SharedState,
};

use super::{request::parse_body, response};

#[utoipa::path(
        get,
        path = "/api/v1/profile",
        responses(
            (status = OK, description = "", body = User),
            (status = UNAUTHORIZED, description = "invalid token"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn profile(Extension(user): Extension<User>) -> impl IntoResponse {
    response::success(user, "").into_response()
}

#[utoipa::path(
        put,
        path = "/api/v1/profile/name",
        responses(
            (status = OK, description = "", body = User),
            (status = BAD_REQUEST, description = "name is not valid"),
        ),
        request_body = UpdateNameParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn update_name(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: UpdateNameParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.user_service.update_name(user.id, params.name).await;
    match res {
        Ok(res) => response::success(res, "name updated").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        put,
        path = "/api/v1/profile/password",
        responses(
            (status = OK, description = ""),
            (status = BAD_REQUEST, description = "current password is wrong"),
        ),
        request_body = ChangePasswordParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn change_password(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: ChangePasswordParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.auth_service.change_password(&user, params).await;
    match res {
        Ok(_) => response::success((), "password changed").into_response(),
        Err(err) => err.into_response(),
    }
}
