use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const THUMBNAIL_STYLE: &str = "Vibrant and eye-catching";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Style {
    #[default]
    Realistic,
    Anime,
    Fantasy,
    Sketch,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Realistic => "Realistic",
            Style::Anime => "Anime",
            Style::Fantasy => "Fantasy",
            Style::Sketch => "Sketch",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Classic,
    #[serde(rename = "3:4")]
    ClassicPortrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Classic => "4:3",
            AspectRatio::ClassicPortrait => "3:4",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ImageQuality {
    #[default]
    Standard,
    #[serde(rename = "720p")]
    Hd,
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageQuality {
    fn suffix(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "",
            ImageQuality::Hd => ", HD quality, 720p",
            ImageQuality::FullHd => ", Full HD, 1080p, high quality",
            ImageQuality::TwoK => ", 2K resolution, highly detailed",
            ImageQuality::FourK => {
                ", 4K resolution, ultra-high definition, photorealistic, extremely detailed"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwitchMode {
    #[default]
    Face,
    Background,
    Merge,
    Style,
    Thumbnail,
    All,
}

impl SwitchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchMode::Face => "face",
            SwitchMode::Background => "background",
            SwitchMode::Merge => "merge",
            SwitchMode::Style => "style",
            SwitchMode::Thumbnail => "thumbnail",
            SwitchMode::All => "all",
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            SwitchMode::Face => "Perform a face switch. Take the face from the user image and apply it to the character in the base image. Maintain the style and background of the base image.",
            SwitchMode::Background => "Keep the main subject from the base image and replace its background with the background from the user image.",
            SwitchMode::Merge => "Creatively merge the base image and the user image. Blend their styles, subjects, and backgrounds into a cohesive new image.",
            SwitchMode::Style => "Apply the artistic style from the user image to the base image. The content of the base image should remain, but rendered in the new style.",
            SwitchMode::Thumbnail => "Analyze the second image for its thumbnail design elements (e.g., bold colors, high contrast, eye-catching composition). Recreate the first base image, applying the captured thumbnail style to make it a compelling and clickable thumbnail.",
            SwitchMode::All => "Perform a comprehensive 'all switch'. Intelligently merge every aspect of the base image (first) and the user image (second). Combine their subjects, backgrounds, color palettes, textures, and overall artistic concepts into a single, coherent, and novel image.",
        }
    }
}

/// Instruction for the text-only endpoint.
pub fn text_prompt(prompt: &str, style: &str, quality: ImageQuality) -> String {
    format!("{prompt}, {style} style{}", quality.suffix())
}

/// Instruction sent alongside a single reference image.
pub fn reference_prompt(
    prompt: &str,
    style: &str,
    aspect_ratio: AspectRatio,
    quality: ImageQuality,
) -> String {
    format!(
        "Using the provided image as a reference, generate a new image based on the following instructions: \"{prompt}\". The final image must have an aspect ratio of {}. The desired style is {style}{}.",
        aspect_ratio.as_str(),
        quality.suffix()
    )
}

/// Instruction sent with the base image (first) and the user image (second).
pub fn switch_prompt(mode: SwitchMode, prompt: &str, quality: ImageQuality) -> String {
    let mut full = String::from("Base image is the first one, user image is the second. ");
    full.push_str(mode.instruction());
    if !prompt.is_empty() {
        full.push_str(" Additional instructions: ");
        full.push_str(prompt);
    }
    full.push_str(quality.suffix());
    full
}

/// What the generation log shows for a switch.
pub fn switch_record_prompt(mode: SwitchMode, prompt: &str) -> String {
    format!("{}: {}", mode.as_str(), prompt)
}
