use axum::{extract::State, response::IntoResponse};

use crate::SharedState;

use super::response;

#[utoipa::path(
        get,
        path = "/api/v1/settings",
        responses(
            (status = OK, description = "", body = SiteSettings),
        )
)]
pub async fn site_settings(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.settings_service.get_settings().await;
    response::success(res, "").into_response()
}
