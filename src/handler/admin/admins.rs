use axum::{
    extract::{Path, Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    handler::{request::parse_body, response},
    repository::models::AdminUser,
    service::admin::service::{authorize, Capability, CreateAdminParams, UpdateAdminParams},
    SharedState,
};

pub async fn admins_list(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageAdmins) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.admin_service.list_admins().await;
    response::success(res, "").into_response()
}

#[utoipa::path(
        post,
        path = "/api/v1/admin/admins",
        responses(
            (status = OK, description = "", body = AdminUser),
            (status = UNPROCESSABLE_ENTITY, description = "email already exist"),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        request_body = CreateAdminParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn create_admin(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageAdmins) {
        return err.into_response();
    }
    let params: CreateAdminParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.admin_service.create_admin(params).await;
    match res {
        Ok(res) => response::success(res, "admin created").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_admin(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageAdmins) {
        return err.into_response();
    }
    let params: UpdateAdminParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.admin_service.update_admin(id, params).await;
    match res {
        Ok(res) => response::success(res, "admin updated").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_admin(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageAdmins) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.admin_service.delete_admin(id).await;
    match res {
        Ok(res) => response::success(res, "admin deleted").into_response(),
        Err(err) => err.into_response(),
    }
}
