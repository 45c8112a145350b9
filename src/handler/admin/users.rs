use axum::{
    extract::{Path, Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    handler::{request::parse_body, response},
    repository::models::AdminUser,
    service::{
        admin::service::{authorize, Capability},
        user::service::UpdateUserParams,
    },
    SharedState,
};

#[utoipa::path(
        get,
        path = "/api/v1/admin/users",
        responses(
            (status = OK, description = "", body = [User]),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn users_list(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ViewUsers) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.user_service.list_users().await;
    response::success(res, "").into_response()
}

pub async fn user_detail(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ViewUsers) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.user_service.get_user_by_id(id).await;
    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        put,
        path = "/api/v1/admin/users/{id}",
        params(("id" = i64, Path, description = "user id")),
        responses(
            (status = OK, description = "", body = User),
            (status = NOT_FOUND, description = "user not found"),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        request_body = UpdateUserParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn update_user(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageUsers) {
        return err.into_response();
    }
    let params: UpdateUserParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.user_service.update_user(id, params).await;
    match res {
        Ok(res) => response::success(res, "user updated").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn reset_usage(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageUsers) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.usage_service.reset_usage(id).await;
    match res {
        Ok(res) => response::success(res, "usage reset").into_response(),
        Err(err) => err.into_response(),
    }
}
