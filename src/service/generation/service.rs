use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

use crate::client::image_api::{ImageApiClient, InlineImage};
use crate::repository::models::{Generation, GenerationType};
use crate::service::usage::service::{NewGeneration, Service as UsageService};

use super::error::GenerationError;
use super::prompt::{self, AspectRatio, ImageQuality, Style, SwitchMode, THUMBNAIL_STYLE};

#[derive(Clone)]
pub struct Service {
    usage_service: UsageService,
    image_api: ImageApiClient,
}

/// An uploaded picture: MIME type plus base64 bytes.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: String,
}

impl ImageInput {
    fn into_inline(self, field: &str) -> Result<InlineImage, GenerationError> {
        let invalid = || GenerationError::InvalidImage {
            field: field.to_string(),
        };
        if !self.mime_type.starts_with("image/") || self.data.is_empty() {
            return Err(invalid());
        }
        STANDARD.decode(self.data.as_bytes()).map_err(|_| invalid())?;
        Ok(InlineImage {
            mime_type: self.mime_type,
            data: self.data,
        })
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateImageParams {
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub quality: ImageQuality,
    pub reference_image: Option<ImageInput>,
}

fn thumbnail_ratio() -> AspectRatio {
    AspectRatio::Landscape
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateThumbnailParams {
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(default = "thumbnail_ratio")]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub quality: ImageQuality,
    pub reference_image: Option<ImageInput>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SwitchImagesParams {
    pub base_image: ImageInput,
    pub user_image: ImageInput,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub mode: SwitchMode,
    #[serde(default)]
    pub quality: ImageQuality,
}

impl Service {
    pub fn new(usage_service: UsageService, image_api: ImageApiClient) -> Self {
        Service {
            usage_service,
            image_api,
        }
    }

    pub async fn generate_image(
        &self,
        user_id: i64,
        params: GenerateImageParams,
    ) -> Result<Generation, GenerationError> {
        let reference = params
            .reference_image
            .map(|img| img.into_inline("reference_image"))
            .transpose()?;
        self.render(
            user_id,
            GenerationType::Image,
            params.prompt,
            params.style.as_str(),
            params.aspect_ratio,
            params.quality,
            reference,
        )
        .await
    }

    pub async fn generate_thumbnail(
        &self,
        user_id: i64,
        params: GenerateThumbnailParams,
    ) -> Result<Generation, GenerationError> {
        let reference = params
            .reference_image
            .map(|img| img.into_inline("reference_image"))
            .transpose()?;
        self.render(
            user_id,
            GenerationType::Thumbnail,
            params.prompt,
            THUMBNAIL_STYLE,
            params.aspect_ratio,
            params.quality,
            reference,
        )
        .await
    }

    pub async fn switch_images(
        &self,
        user_id: i64,
        params: SwitchImagesParams,
    ) -> Result<Generation, GenerationError> {
        let images = [
            params.base_image.into_inline("base_image")?,
            params.user_image.into_inline("user_image")?,
        ];
        self.usage_service
            .check_quota(user_id, GenerationType::Switch)
            .await?;

        let full_prompt = prompt::switch_prompt(params.mode, &params.prompt, params.quality);
        let image_url = self
            .image_api
            .edit_image(&images, &full_prompt)
            .await
            .map_err(|e| {
                error!("cannot switch images due to err: {}", e);
                GenerationError::Upstream { source: e }
            })?;

        let generation = self
            .usage_service
            .add_generation(
                user_id,
                NewGeneration {
                    kind: GenerationType::Switch,
                    prompt: prompt::switch_record_prompt(params.mode, &params.prompt),
                    image_url,
                },
            )
            .await?;
        Ok(generation)
    }

    #[allow(clippy::too_many_arguments)]
    async fn render(
        &self,
        user_id: i64,
        kind: GenerationType,
        user_prompt: String,
        style: &str,
        aspect_ratio: AspectRatio,
        quality: ImageQuality,
        reference: Option<InlineImage>,
    ) -> Result<Generation, GenerationError> {
        self.usage_service.check_quota(user_id, kind).await?;

        let res = match &reference {
            None => {
                let full_prompt = prompt::text_prompt(&user_prompt, style, quality);
                self.image_api
                    .generate_image(&full_prompt, aspect_ratio.as_str())
                    .await
            }
            Some(image) => {
                let full_prompt =
                    prompt::reference_prompt(&user_prompt, style, aspect_ratio, quality);
                self.image_api
                    .edit_image(std::slice::from_ref(image), &full_prompt)
                    .await
            }
        };
        let image_url = res.map_err(|e| {
            error!("cannot generate {} due to err: {}", kind, e);
            GenerationError::Upstream { source: e }
        })?;

        let generation = self
            .usage_service
            .add_generation(
                user_id,
                NewGeneration {
                    kind,
                    prompt: user_prompt,
                    image_url,
                },
            )
            .await?;
        Ok(generation)
    }
}
