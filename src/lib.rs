pub mod cli;
pub mod collect;
pub mod config;
pub mod constants;
pub mod error;
pub mod storage;
pub mod transcode;
pub mod upload;

pub use collect::{collect_files, is_image_file};
pub use config::R2Config;
pub use error::{Result, UploadError};
pub use storage::{R2Client, RemoteObject};
pub use transcode::{guess_content_type, prepare_image, TranscodeOptions, TranscodeResult};
pub use upload::{destination_key, format_kb, print_markdown_summary, upload_files, UploadedImage};
