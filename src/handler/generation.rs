use axum::{
    extract::{Request, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    repository::models::User,
    service::generation::service::{
        GenerateImageParams, GenerateThumbnailParams, SwitchImagesParams,
    },
    SharedState,
};

use super::{request::parse_body, response};

#[utoipa::path(
        get,
        path = "/api/v1/generations",
        responses(
            (status = OK, description = "newest first", body = [Generation]),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn generations_list(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.usage_service.list_generations(user.id).await;
    response::success(res, "").into_response()
}

#[utoipa::path(
        post,
        path = "/api/v1/generations/image",
        responses(
            (status = OK, description = "", body = Generation),
            (status = BAD_REQUEST, description = "invalid payload"),
            (status = TOO_MANY_REQUESTS, description = "daily limit reached"),
            (status = BAD_GATEWAY, description = "image api failed"),
        ),
        request_body = GenerateImageParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn generate_image(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: GenerateImageParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.generation_service.generate_image(user.id, params).await;
    match res {
        Ok(res) => response::success(res, "image generated").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        post,
        path = "/api/v1/generations/thumbnail",
        responses(
            (status = OK, description = "", body = Generation),
            (status = BAD_REQUEST, description = "invalid payload"),
            (status = TOO_MANY_REQUESTS, description = "daily limit reached"),
            (status = BAD_GATEWAY, description = "image api failed"),
        ),
        request_body = GenerateThumbnailParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn generate_thumbnail(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: GenerateThumbnailParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state
        .generation_service
        .generate_thumbnail(user.id, params)
        .await;
    match res {
        Ok(res) => response::success(res, "thumbnail generated").into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
        post,
        path = "/api/v1/generations/switch",
        responses(
            (status = OK, description = "", body = Generation),
            (status = BAD_REQUEST, description = "invalid payload"),
            (status = TOO_MANY_REQUESTS, description = "daily limit reached"),
            (status = BAD_GATEWAY, description = "image api failed"),
        ),
        request_body = SwitchImagesParams,
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn switch_images(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
    req: Request,
) -> impl IntoResponse {
    let params: SwitchImagesParams = match parse_body(req).await {
        Err(res) => return res,
        Ok(p) => p,
    };

    let state = state.read().await;
    let res = state.generation_service.switch_images(user.id, params).await;
    match res {
        Ok(res) => response::success(res, "images switched").into_response(),
        Err(err) => err.into_response(),
    }
}
