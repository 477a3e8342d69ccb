//! Project directory layout.
//!
//! Every generated module lives under `base_path/project_name`, with one
//! subfolder per [`ArtifactKind`]. Materializing is idempotent: directories
//! that already exist are left alone.

// Internal imports (std, crate)
use std::io;
use std::path::{Path, PathBuf};

use crate::{error::Result, templates::ArtifactKind};

// External imports (alphabetized)
use tokio::fs;

/// Ensure `base_path/project_name` and its artifact subfolders exist.
///
/// Returns the project root. Failures propagate as I/O errors; directories
/// created before the failure are left in place.
pub async fn materialize(base_path: impl AsRef<Path>, project_name: &str) -> Result<PathBuf> {
    let project_root = base_path.as_ref().join(project_name);

    if ensure_dir(&project_root).await? {
        log::info!("Created project folder: {}", project_root.display());
    }

    for kind in ArtifactKind::all() {
        let dir = project_root.join(kind.subfolder());
        if ensure_dir(&dir).await? {
            log::info!("Created {} folder at: {}", kind, dir.display());
        }
    }

    Ok(project_root)
}

/// Create `path` (and parents) unless it already is a directory.
/// Returns whether anything was created.
async fn ensure_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(false),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        )
        .into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).await.map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Failed to create directory {}: {}", path.display(), e),
                )
            })?;
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> io::Result<BTreeSet<String>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }

    #[tokio::test]
    async fn test_materialize_creates_layout() -> Result<()> {
        let dir = tempdir()?;
        let root = materialize(dir.path(), "demo").await?;

        assert_eq!(root, dir.path().join("demo"));
        assert_eq!(
            entries(&root)?,
            ["controller", "model", "repository", "service"]
                .into_iter()
                .map(String::from)
                .collect::<BTreeSet<_>>()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_materialize_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let first = materialize(dir.path(), "demo").await?;
        std::fs::write(first.join("model").join("Keep.java"), "keep")?;
        let before = entries(&first)?;

        let second = materialize(dir.path(), "demo").await?;
        assert_eq!(first, second);
        assert_eq!(entries(&second)?, before);
        assert_eq!(
            std::fs::read_to_string(second.join("model").join("Keep.java"))?,
            "keep"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_materialize_creates_missing_base_path() -> Result<()> {
        let dir = tempdir()?;
        let base = dir.path().join("nested").join("base");
        let root = materialize(&base, "demo").await?;
        assert!(root.join("controller").is_dir());
        Ok(())
    }

    #[tokio::test]
    async fn test_materialize_fails_when_path_is_a_file() -> Result<()> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("demo"), "not a directory")?;

        let err = materialize(dir.path(), "demo").await.unwrap_err();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }
}
