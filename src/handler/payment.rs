use axum::{
    extract::{Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    repository::models::User, service::payment::service::PlanPaymentParams, SharedState,
};

use super::{request::parse_body, response};

#[utoipa::path(
        post,
        path = "/api/v1/payments",
        responses(
            (status = OK, description = "payment is pending review", body = Payment),
            (status = BAD_REQUEST, description = "invalid plan or payment method"),
        ),
        request_body = PlanPaymentParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn submit_payment(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: PlanPaymentParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state
        .payment_service
        .request_plan_payment(&user, params)
        .await;
    match res {
        Ok(res) => response::success(res, "payment submitted, waiting for approval").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        get,
        path = "/api/v1/payments",
        responses(
            (status = OK, description = "the user's payments, newest first", body = [Payment]),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn payments_list(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.payment_service.list_user_payments(user.id).await;
    response::success(res, "").into_response()
}
