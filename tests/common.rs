use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fake env values so config loading succeeds without touching the network.
pub const FAKE_ENV: &[(&str, &str)] = &[
    ("R2_ACCOUNT_ID", "testaccount"),
    ("R2_ACCESS_KEY_ID", "testkey"),
    ("R2_SECRET_ACCESS_KEY", "testsecret"),
    ("R2_BUCKET_NAME", "testbucket"),
    ("R2_PUBLIC_URL", "https://cdn.example.com"),
];

pub fn create_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path
}

pub fn create_real_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::DynamicImage::new_rgb8(width, height)
        .save(&path)
        .unwrap();
    path
}
