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
        gateway::service::GatewayParams,
    },
    SharedState,
};

pub async fn create_gateway(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageGateways) {
        return err.into_response();
    }
    let params: GatewayParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.gateway_service.create_gateway(params).await;
    match res {
        Ok(res) => response::success(res, "gateway created").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update_gateway(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageGateways) {
        return err.into_response();
    }
    let params: GatewayParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.gateway_service.update_gateway(id, params).await;
    match res {
        Ok(res) => response::success(res, "gateway updated").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_gateway(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageGateways) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.gateway_service.delete_gateway(id).await;
    match res {
        Ok(res) => response::success(res, "gateway deleted").into_response(),
        Err(err) => err.into_response(),
    }
}
