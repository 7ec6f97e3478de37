//! Directory listing filtered by extension

use super::paths::{normalize_path, path_exists};
use crate::error::{Error, Result};
use crate::models::{DirectoryEntry, DirectoryListing};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whether `name` ends in one of `extensions` (lowercase, no leading dot)
///
/// The extension is whatever follows the last dot; a name whose only dot is
/// the leading one (`.md`) has none. Directories go through the same check.
pub fn has_listed_extension(name: &str, extensions: &[String]) -> bool {
    match Path::new(name).extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|e| *e == ext)
        }
        None => false,
    }
}

/// List the immediate entries of `path` whose extension is in `extensions`
///
/// The listing path and entry paths are built from the normalized request path.
pub async fn cmd_list_directory(path: &str, extensions: &[String]) -> Result<DirectoryListing> {
    let directory = normalize_path(path);
    if !path_exists(&directory).await? {
        return Err(Error::directory_not_found(directory.display()));
    }

    let mut dir = tokio::fs::read_dir(&directory).await.map_err(Error::Read)?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await.map_err(Error::Read)? {
        let name = entry.file_name().to_string_lossy().to_string();
        if !has_listed_extension(&name, extensions) {
            continue;
        }

        let entry_path = entry.path();
        // follows symlinks; a dangling link is not a directory
        let is_dir = tokio::fs::metadata(&entry_path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        // entries of the current directory are reported bare, without `./`
        let shown = if directory == Path::new(".") {
            PathBuf::from(&name)
        } else {
            directory.join(&name)
        };

        files.push(DirectoryEntry {
            path: shown.display().to_string(),
            name,
            is_dir,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(path = %directory.display(), count = files.len(), "Listed directory");

    Ok(DirectoryListing {
        path: directory.display().to_string(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_extensions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_has_listed_extension() {
        let exts = default_extensions();
        assert!(has_listed_extension("notes.md", &exts));
        assert!(has_listed_extension("REPORT.PDF", &exts));
        assert!(has_listed_extension("archive.tar.Txt", &exts));
        assert!(!has_listed_extension("image.png", &exts));
        assert!(!has_listed_extension("README", &exts));
        assert!(!has_listed_extension(".md", &exts));
        assert!(!has_listed_extension("trailing.", &exts));
        assert!(has_listed_extension(".hidden.txt", &exts));
    }

    #[tokio::test]
    async fn test_list_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.MD"), "b").unwrap();
        fs::write(tmp.path().join("c.pdf"), "c").unwrap();
        fs::write(tmp.path().join("d.rs"), "d").unwrap();
        fs::write(tmp.path().join("e"), "e").unwrap();

        let path = tmp.path().display().to_string();
        let listing = cmd_list_directory(&path, &default_extensions())
            .await
            .unwrap();

        let names: Vec<_> = listing.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.MD", "c.pdf"]);
        assert_eq!(listing.path, path);
        assert!(listing.files.iter().all(|f| !f.is_dir));
        assert_eq!(
            listing.files[0].path,
            tmp.path().join("a.txt").display().to_string()
        );
    }

    #[tokio::test]
    async fn test_directories_filtered_by_suffix() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("notes.md")).unwrap();
        fs::create_dir(tmp.path().join("plain")).unwrap();

        let listing = cmd_list_directory(&tmp.path().display().to_string(), &default_extensions())
            .await
            .unwrap();

        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "notes.md");
        assert!(listing.files[0].is_dir);
    }

    #[tokio::test]
    async fn test_list_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), "n").unwrap();

        let listing = cmd_list_directory(&tmp.path().display().to_string(), &default_extensions())
            .await
            .unwrap();
        assert!(listing.files.is_empty());
    }

    #[tokio::test]
    async fn test_list_custom_extensions() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.rst"), "b").unwrap();

        let listing = cmd_list_directory(&tmp.path().display().to_string(), &["rst".to_string()])
            .await
            .unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "b.rst");
    }

    #[tokio::test]
    async fn test_list_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nonexistent").display().to_string();

        let result = cmd_list_directory(&missing, &default_extensions()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_on_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        let result = cmd_list_directory(&file.display().to_string(), &default_extensions()).await;
        assert!(matches!(result, Err(Error::Read(_))));
    }

    #[tokio::test]
    async fn test_list_normalizes_request_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        let base = tmp.path().display().to_string();

        for raw in [format!("{}/", base), format!("{}//", base), format!("{}/./", base)] {
            let listing = cmd_list_directory(&raw, &default_extensions())
                .await
                .unwrap();
            assert_eq!(listing.path, base);
            assert_eq!(
                listing.files[0].path,
                tmp.path().join("a.txt").display().to_string()
            );
        }
    }

    #[tokio::test]
    async fn test_list_empty_path_is_current_dir() {
        let listing = cmd_list_directory("", &default_extensions()).await.unwrap();
        assert_eq!(listing.path, ".");
        assert!(listing.files.iter().all(|f| f.path.starts_with(&f.name)));
    }

    #[tokio::test]
    async fn test_list_under_regular_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        let result =
            cmd_list_directory(&file.join("sub").display().to_string(), &default_extensions())
                .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
