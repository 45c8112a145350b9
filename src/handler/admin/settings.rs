use axum::{
    extract::{Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    handler::{request::parse_body, response},
    repository::models::AdminUser,
    service::{
        admin::service::{authorize, Capability},
        settings::service::UpdateSettingsParams,
    },
    SharedState,
};

#[utoipa::path(
        put,
        path = "/api/v1/admin/settings",
        responses(
            (status = OK, description = "", body = SiteSettings),
            (status = BAD_REQUEST, description = "invalid glow settings"),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        request_body = UpdateSettingsParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn update_settings(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ManageSettings) {
        return err.into_response();
    }
    let params: UpdateSettingsParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.settings_service.update_settings(params.into()).await;
    match res {
        Ok(res) => response::success(res, "settings updated").into_response(),
        Err(err) => err.into_response(),
    }
}
