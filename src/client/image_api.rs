use std::time::Duration;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

use crate::config::ImageApiConfig;

pub const PREDICT_URI: &str = "/v1beta/models/{model}:predict";
pub const GENERATE_CONTENT_URI: &str = "/v1beta/models/{model}:generateContent";
const API_KEY_HEADER: &str = "x-goog-api-key";
/// The predict endpoint is asked for jpeg and the content endpoint answers
/// with png; returned URIs always carry these types.
const PREDICT_MIME_TYPE: &str = "image/jpeg";
const EDIT_MIME_TYPE: &str = "image/png";

#[derive(Debug, Snafu)]
pub enum ImageApiError {
    #[snafu(display("image api request failed: {source}"))]
    Request { source: reqwest::Error },
    #[snafu(display("image api responded with status {status}: {body}"))]
    Status { status: u16, body: String },
    #[snafu(display("image api returned no image"))]
    EmptyResponse,
}

/// Base64 image payload sent inline with a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters<'a>,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters<'a> {
    sample_count: u8,
    aspect_ratio: &'a str,
    output_mime_type: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Image {
        #[serde(rename = "inlineData")]
        inline_data: &'a InlineImage,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<ResponseImage>,
}

#[derive(Deserialize)]
struct ResponseImage {
    data: String,
}

/// Client for the generative-language image endpoints. Every successful call
/// yields a `data:` URI ready to embed.
#[derive(Clone)]
pub struct ImageApiClient {
    http: reqwest::Client,
    url: String,
    key: String,
    imagen_model: String,
    edit_model: String,
}

impl ImageApiClient {
    pub fn new(cfg: &ImageApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(ImageApiClient {
            http,
            url: cfg.url.trim_end_matches('/').to_string(),
            key: cfg.key.clone(),
            imagen_model: cfg.imagen_model.clone(),
            edit_model: cfg.edit_model.clone(),
        })
    }

    fn endpoint(&self, template: &str, model: &str) -> String {
        format!("{}{}", self.url, template.replace("{model}", model))
    }

    /// Text-only generation through the imagen `predict` endpoint.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<String, ImageApiError> {
        let body = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio,
                output_mime_type: PREDICT_MIME_TYPE,
            },
        };
        let res = self
            .http
            .post(self.endpoint(PREDICT_URI, &self.imagen_model))
            .header(API_KEY_HEADER, &self.key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ImageApiError::Request { source })?;
        let res = check_status(res).await?;
        let res: PredictResponse = res
            .json()
            .await
            .map_err(|source| ImageApiError::Request { source })?;

        res.predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .map(|data| data_uri(PREDICT_MIME_TYPE, &data))
            .ok_or(ImageApiError::EmptyResponse)
    }

    /// Image-conditioned generation through `generateContent`. Images are sent
    /// in order, followed by the instruction text.
    pub async fn edit_image(
        &self,
        images: &[InlineImage],
        prompt: &str,
    ) -> Result<String, ImageApiError> {
        let mut parts: Vec<RequestPart<'_>> = images
            .iter()
            .map(|inline_data| RequestPart::Image { inline_data })
            .collect();
        parts.push(RequestPart::Text { text: prompt });
        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE"],
            },
        };
        let res = self
            .http
            .post(self.endpoint(GENERATE_CONTENT_URI, &self.edit_model))
            .header(API_KEY_HEADER, &self.key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ImageApiError::Request { source })?;
        let res = check_status(res).await?;
        let res: GenerateContentResponse = res
            .json()
            .await
            .map_err(|source| ImageApiError::Request { source })?;

        res.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.inline_data)
            .map(|img| data_uri(EDIT_MIME_TYPE, &img.data))
            .ok_or(ImageApiError::EmptyResponse)
    }
}

fn data_uri(mime_type: &str, data: &str) -> String {
    format!("data:{};base64,{}", mime_type, data)
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, ImageApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ImageApiError::Status {
        status: status.as_u16(),
        body,
    })
}
