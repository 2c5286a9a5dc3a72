use crate::constants::{ImageKind, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, FALLBACK_CONTENT_TYPE, MAX_QUALITY};
use crate::error::{Result, UploadError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TranscodeOptions {
    pub max_width: u32,
    pub quality: u8,
    pub no_resize: bool,
}

impl TranscodeOptions {
    pub fn new(max_width: u32, quality: u8, no_resize: bool) -> Result<Self> {
        if quality > MAX_QUALITY {
            return Err(UploadError::InvalidQuality(quality));
        }
        Ok(Self {
            max_width,
            quality,
            no_resize,
        })
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
            no_resize: false,
        }
    }
}

/// Body bytes ready for upload, plus the metadata the put operation needs.
#[derive(Debug, Clone)]
pub struct TranscodeResult {
    pub data: Vec<u8>,
    pub content_type: &'static str,
    /// Destination extension including the leading dot (empty if the
    /// source has none and no transcoding happened).
    pub extension: String,
}

/// Prepares the upload body for a single image file.
///
/// With `no_resize` set the raw file bytes pass through unchanged and the
/// content type is guessed from the extension. Otherwise the image is
/// decoded, downscaled to `max_width` when wider, and re-encoded as JPEG
/// at the configured quality; the destination extension becomes `.jpg`
/// regardless of the source format.
pub fn prepare_image(path: &Path, options: &TranscodeOptions) -> Result<TranscodeResult> {
    if options.no_resize {
        return read_raw(path);
    }

    let img = ImageReader::open(path)?.decode()?;
    let img = scale_to_width(img, options.max_width);

    // JPEG has no alpha channel; transparency is dropped, not composited
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    };

    let mut data = Vec::new();
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut data, options.quality))?;

    Ok(TranscodeResult {
        data,
        content_type: "image/jpeg",
        extension: ".jpg".to_string(),
    })
}

/// Downscales proportionally when the image is wider than `max_width`.
/// The height scales by the same ratio, rounded down.
fn scale_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if max_width == 0 || img.width() <= max_width {
        return img;
    }
    let ratio = max_width as f64 / img.width() as f64;
    let new_height = ((img.height() as f64 * ratio) as u32).max(1);
    img.resize_exact(max_width, new_height, image::imageops::FilterType::Lanczos3)
}

fn read_raw(path: &Path) -> Result<TranscodeResult> {
    let data = fs::read(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    Ok(TranscodeResult {
        data,
        content_type: guess_content_type(path),
        extension,
    })
}

/// Static extension-to-MIME lookup with a generic binary fallback.
pub fn guess_content_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageKind::from_extension)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}
