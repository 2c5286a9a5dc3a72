use crate::constants::{DEFAULT_MAX_WIDTH, DEFAULT_PREFIX, DEFAULT_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "r2img",
    about = "Upload local images to Cloudflare R2, with optional resizing",
    long_about = "r2img uploads image files to a Cloudflare R2 bucket over the S3 API and \
                  prints their public URLs. By default images wider than the maximum width \
                  are downscaled and re-encoded as JPEG; pass --no-resize to upload the \
                  original bytes unchanged. The same binary lists and deletes stored objects.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    r2img photo.png\n  \
    r2img --width 1280 --quality 90 photo1.png photo2.jpg\n  \
    r2img --prefix blog/2026-02 --dir ./screenshots\n  \
    r2img --no-resize photo.png\n  \
    r2img --list\n  \
    r2img --delete images/photo.jpg\n\n\
    ENVIRONMENT (all required):\n  \
    R2_ACCOUNT_ID, R2_ACCESS_KEY_ID, R2_SECRET_ACCESS_KEY,\n  \
    R2_BUCKET_NAME, R2_PUBLIC_URL"
)]
pub struct Args {
    #[arg(help = "Image files to upload")]
    pub files: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Also upload all images found directly inside DIR",
        long_help = "Upload every file with a supported image extension found directly \
                     inside DIR (non-recursive), in name order, before the explicit files."
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PREFIX",
        default_value = DEFAULT_PREFIX,
        help = "Destination folder in the bucket"
    )]
    pub prefix: String,

    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_WIDTH,
        help = "Maximum output width in pixels",
        long_help = "Images wider than N pixels are downscaled proportionally to N; \
                     narrower images keep their dimensions."
    )]
    pub width: u32,

    #[arg(
        long,
        value_name = "Q",
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (0-100)"
    )]
    pub quality: u8,

    #[arg(long, help = "Skip transcoding and upload the raw file bytes")]
    pub no_resize: bool,

    #[arg(
        long,
        help = "Print all objects in the bucket, then exit",
        long_help = "Print every object in the bucket with its size. Takes priority over \
                     --delete and upload."
    )]
    pub list: bool,

    #[arg(
        long,
        value_name = "KEY",
        help = "Delete one object by key, then exit",
        long_help = "Delete the object stored under KEY. Deleting a key that does not \
                     exist is not an error. Checked before upload."
    )]
    pub delete: Option<String>,
}
