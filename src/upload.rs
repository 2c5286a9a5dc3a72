use crate::config::R2Config;
use crate::error::Result;
use crate::storage::R2Client;
use crate::transcode::{prepare_image, TranscodeOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// One completed upload, kept for the Markdown summary.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub url: String,
    pub size: u64,
}

/// Destination key for a source file: `{prefix}/{stem}{extension}`.
///
/// Two inputs differing only in extension can map to the same `.jpg` key;
/// last write wins, there is no conflict detection.
pub fn destination_key(path: &Path, prefix: &str, extension: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{prefix}/{stem}{extension}")
}

/// Size in kilobytes, rounded to the nearest integer.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.0}", bytes as f64 / 1024.0)
}

/// Uploads the collected files one at a time, in order, printing one
/// report line per file as it completes.
///
/// A file whose bytes cannot be decoded is reported on stderr and skipped;
/// the rest of the batch continues. Storage failures abort the whole run.
pub async fn upload_files(
    client: &R2Client,
    config: &R2Config,
    paths: &[PathBuf],
    prefix: &str,
    options: &TranscodeOptions,
) -> Result<Vec<UploadedImage>> {
    let mut uploaded = Vec::new();

    for path in paths {
        let spinner = create_progress_spinner(&format!("Uploading {}...", path.display()));

        let result = match prepare_image(path, options) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_and_clear();
                eprintln!("❌ Failed to process {:?}: {}", path, e);
                continue;
            }
        };

        let key = destination_key(path, prefix, &result.extension);
        let size = result.data.len() as u64;
        client
            .put_object(&key, result.data, result.content_type)
            .await?;
        spinner.finish_and_clear();

        let url = config.public_object_url(&key);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {} -> {} ({} KB)", file_name, url, format_kb(size));

        uploaded.push(UploadedImage {
            file_name,
            url,
            size,
        });
    }

    Ok(uploaded)
}

/// Prints the `![name](url)` block for every uploaded file, where `name`
/// is the last path segment of the URL.
pub fn print_markdown_summary(uploaded: &[UploadedImage]) {
    if uploaded.is_empty() {
        return;
    }
    println!();
    println!("Markdown:");
    for image in uploaded {
        let name = image.url.rsplit('/').next().unwrap_or(&image.url);
        println!("  ![{}]({})", name, image.url);
    }
}

fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb
}
