pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_QUALITY: u8 = 80;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_PREFIX: &str = "images";

pub const R2_ENDPOINT_SUFFIX: &str = "r2.cloudflarestorage.com";

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "webp", "bmp", "tiff", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    WebP,
    Bmp,
    Tiff,
    Gif,
}

impl ImageKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "webp" => Some(ImageKind::WebP),
            "bmp" => Some(ImageKind::Bmp),
            "tiff" => Some(ImageKind::Tiff),
            "gif" => Some(ImageKind::Gif),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::WebP => "image/webp",
            ImageKind::Bmp => "image/bmp",
            ImageKind::Tiff => "image/tiff",
            ImageKind::Gif => "image/gif",
        }
    }
}
