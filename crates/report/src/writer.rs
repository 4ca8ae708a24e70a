//! Writing the finished document

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ReportResult;

/// Write `contents` to `path` in one step.
///
/// The data goes to a sibling temp file first and is renamed over `path`
/// afterwards, so readers only ever see a complete document.
pub async fn write_atomic(path: &Path, contents: &str) -> ReportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    debug!("Writing {} bytes to {}", contents.len(), tmp.display());

    if let Err(e) = tokio::fs::write(&tmp, contents).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    info!("Wrote {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("viewer.html");

        write_atomic(&path, "first").await.unwrap();
        write_atomic(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_failure_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the rename fail
        let path = dir.path().join("viewer.html");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(write_atomic(&path, "doc").await.is_err());
        assert!(!temp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("out/viewer.html")),
            PathBuf::from("out/.viewer.html.tmp")
        );
    }
}
