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
        payment::service::DecidePaymentParams,
    },
    SharedState,
};

#[utoipa::path(
        get,
        path = "/api/v1/admin/payments",
        responses(
            (status = OK, description = "newest first", body = [Payment]),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn payments_list(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::ViewPayments) {
        return err.into_response();
    }
    let state = state.read().await;
    let res = state.payment_service.list_payments().await;
    response::success(res, "").into_response()
}

#[utoipa::path(
        post,
        path = "/api/v1/admin/payments/{id}/decision",
        params(("id" = i64, Path, description = "payment id")),
        responses(
            (status = OK, description = "", body = Payment),
            (status = NOT_FOUND, description = "payment not found"),
            (status = CONFLICT, description = "payment already decided"),
            (status = FORBIDDEN, description = "missing permission"),
        ),
        request_body = DecidePaymentParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn decide_payment(
    State(state): State<SharedState>,
    Extension(admin): Extension<AdminUser>,
    Path(id): Path<i64>,
    req: Request,
) -> impl IntoResponse {
    if let Err(err) = authorize(&admin, Capability::DecidePayments) {
        return err.into_response();
    }
    let params: DecidePaymentParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state
        .payment_service
        .decide_payment(id, params.status)
        .await;
    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}
