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
        plan::service::{MovePlanParams, PlanParams},
    },
    SharedState,
};

pub async fn plans_list(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManagePlans) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.plan_service.get_plans_list().await;
    response::success(res, "").into_response()
}

#[utoipa::path(
        post,
        path = "/api/v1/admin/plans",
        responses(
            (status = OK, description = "", body = Plan),
            (status = CONFLICT, description = "plan name already exists"),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        request_body = PlanParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn create_plan(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManagePlans) {
        return err.into_response();
    }
    let params: PlanParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.plan_service.create_plan(params).await;
    match res {
        Ok(res) => response::success(res, "plan created").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_plan(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManagePlans) {
        return err.into_response();
    }
    let params: PlanParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.plan_service.update_plan(id, params).await;
    match res {
        Ok(res) => response::success(res, "plan updated").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        delete,
        path = "/api/v1/admin/plans/{id}",
        params(("id" = i64, Path, description = "plan id")),
        responses(
            (status = OK, description = "users on the plan moved to Free", body = Plan),
            (status = NOT_FOUND, description = "plan not found"),
            (status = UNPROCESSABLE_ENTITY, description = "the Free plan cannot be deleted"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn delete_plan(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManagePlans) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.plan_service.delete_plan(id).await;
    match res {
        Ok(res) => response::success(res, "plan deleted").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        post,
        path = "/api/v1/admin/plans/{id}/move",
        params(("id" = i64, Path, description = "plan id")),
        responses(
            (status = OK, description = "the catalog in its new order", body = [Plan]),
            (status = NOT_FOUND, description = "plan not found"),
        ),
        request_body = MovePlanParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn move_plan(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManagePlans) {
        return err.into_response();
    }
    let params: MovePlanParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.plan_service.move_plan(id, params.direction).await;
    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}
