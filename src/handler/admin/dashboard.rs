use axum::{extract::State, response::IntoResponse, Extension};

use crate::{
    handler::response,
    repository::models::AdminUser,
    service::admin::service::{authorize, Capability},
    SharedState,
};

#[utoipa::path(
        get,
        path = "/api/v1/admin/dashboard",
        responses(
            (status = OK, description = "", body = DashboardStats),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn dashboard(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ViewDashboard) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.dashboard_service.get_stats().await;
    response::success(res, "").into_response()
}
