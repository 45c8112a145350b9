use axum::{extract::State, response::IntoResponse};

use crate::SharedState;

use super::response;

#[utoipa::path(
        get,
        path = "/api/v1/gateways",
        responses(
            (status = OK, description = "where payers send money", body = [Gateway]),
        )
)]
pub async fn gateways_list(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.gateway_service.list_gateways().await;
    response::success(res, "").into_response()
}
