use clap::{CommandFactory, Parser};
use r2img::cli::Args;
use r2img::collect::collect_files;
use r2img::config::R2Config;
use r2img::error::Result;
use r2img::storage::R2Client;
use r2img::transcode::TranscodeOptions;
use r2img::upload::{format_kb, print_markdown_summary, upload_files};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Configuration errors abort before any other work, including list/delete.
    let config = R2Config::from_env()?;
    let client = R2Client::new(&config).await;

    if args.list {
        println!("R2 objects:");
        for object in client.list_objects().await? {
            println!("  {}  ({} KB)", object.key, format_kb(object.size));
        }
        return Ok(());
    }

    if let Some(key) = args.delete {
        client.delete_object(&key).await?;
        println!("  Deleted: {}", key);
        return Ok(());
    }

    let paths = collect_files(&args.files, args.dir.as_deref());
    if paths.is_empty() {
        Args::command().print_help()?;
        std::process::exit(1);
    }

    let options = TranscodeOptions::new(args.width, args.quality, args.no_resize)?;
    let uploaded = upload_files(&client, &config, &paths, &args.prefix, &options).await?;
    print_markdown_summary(&uploaded);

    Ok(())
}
