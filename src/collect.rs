use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a file path has a supported image extension (case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Resolves the concrete set of files to upload.
///
/// Eligible images directly inside `dir` come first, sorted by name; the
/// explicit paths follow in input order and are not filtered by extension.
/// A missing explicit path produces a SKIP notice on stderr and is dropped.
/// Duplicates are kept.
pub fn collect_files(files: &[PathBuf], dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = dir {
        if dir.is_dir() {
            for entry in WalkDir::new(dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && is_image_file(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
        }
    }

    for file in files {
        if file.exists() {
            paths.push(file.clone());
        } else {
            eprintln!("  SKIP: {} (not found)", file.display());
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("test.jpg")));
        assert!(is_image_file(Path::new("test.JPEG")));
        assert!(is_image_file(Path::new("test.png")));
        assert!(is_image_file(Path::new("test.webp")));
        assert!(is_image_file(Path::new("test.bmp")));
        assert!(is_image_file(Path::new("test.tiff")));
        assert!(is_image_file(Path::new("test.gif")));

        assert!(!is_image_file(Path::new("test.txt")));
        assert!(!is_image_file(Path::new("test")));
        assert!(!is_image_file(Path::new("test.svg")));
    }

    #[test]
    fn test_directory_entries_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("b.png")).unwrap();
        File::create(temp_dir.path().join("a.jpg")).unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap();
        std::fs::create_dir(temp_dir.path().join("sub.png")).unwrap();

        let paths = collect_files(&[], Some(temp_dir.path()));

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_directory_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        File::create(sub.join("deep.jpg")).unwrap();
        File::create(temp_dir.path().join("top.jpg")).unwrap();

        let paths = collect_files(&[], Some(temp_dir.path()));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("top.jpg"));
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let paths = collect_files(&[], Some(Path::new("/nonexistent/dir")));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_explicit_files_follow_directory_matches() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("zzz.jpg")).unwrap();
        let explicit = temp_dir.path().join("aaa.doc");
        File::create(&explicit).unwrap();

        let paths = collect_files(&[explicit.clone()], Some(temp_dir.path()));

        // explicit files are appended after directory matches, unfiltered
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("zzz.jpg"));
        assert_eq!(paths[1], explicit);
    }

    #[test]
    fn test_missing_explicit_file_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("a.jpg");
        File::create(&present).unwrap();
        let missing = temp_dir.path().join("missing.jpg");

        let paths = collect_files(&[missing, present.clone()], None);
        assert_eq!(paths, vec![present]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.jpg");
        File::create(&file).unwrap();

        let paths = collect_files(&[file.clone(), file.clone()], None);
        assert_eq!(paths.len(), 2);
    }
}
