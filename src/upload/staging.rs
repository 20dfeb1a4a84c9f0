// file: src/upload/staging.rs
// description: Scoped upload source that stages non-ASCII filenames under an encoded link
// reference: https://docs.rs/tempfile

use crate::error::{FileSearchError, Result};
use crate::upload::sanitizer::FilenameSanitizer;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Path handed to the uploader.
///
/// The staged variant owns a private temporary directory holding a link (or
/// copy) named with the encoded filename. Dropping it removes both.
#[derive(Debug)]
pub enum UploadSource {
    Original {
        path: PathBuf,
        file_name: String,
    },
    Staged(StagedUpload),
}

#[derive(Debug)]
pub struct StagedUpload {
    dir: TempDir,
    path: PathBuf,
    file_name: String,
}

impl UploadSource {
    pub fn prepare(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                FileSearchError::Validation(format!(
                    "File name is missing or not valid UTF-8: {}",
                    path.display()
                ))
            })?;

        if !FilenameSanitizer::needs_encoding(file_name) {
            return Ok(Self::Original {
                path: path.to_path_buf(),
                file_name: file_name.to_string(),
            });
        }

        let encoded = FilenameSanitizer::encode(file_name);
        StagedUpload::create(path, encoded).map(Self::Staged)
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Original { path, .. } => path,
            Self::Staged(staged) => &staged.path,
        }
    }

    /// ASCII-only name sent in upload headers.
    pub fn file_name(&self) -> &str {
        match self {
            Self::Original { file_name, .. } => file_name,
            Self::Staged(staged) => &staged.file_name,
        }
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, Self::Staged(_))
    }

    /// Removes any staged artifact now, reporting cleanup failures.
    pub fn close(self) -> Result<()> {
        match self {
            Self::Original { .. } => Ok(()),
            Self::Staged(staged) => staged.close(),
        }
    }
}

impl StagedUpload {
    fn create(original: &Path, file_name: String) -> Result<Self> {
        let original = fs::canonicalize(original).map_err(|e| {
            FileSearchError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                original.display(),
                e
            ))
        })?;

        let dir = tempfile::Builder::new()
            .prefix("file-search-upload-")
            .tempdir()?;
        let path = dir.path().join(&file_name);

        link_or_copy(&original, &path)?;
        debug!(
            "Staged {} as {}",
            original.display(),
            path.display()
        );

        Ok(Self {
            dir,
            path,
            file_name,
        })
    }

    pub fn close(self) -> Result<()> {
        let dir = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!("Removed staging directory {}", dir.display());
        Ok(())
    }
}

fn link_or_copy(original: &Path, staged: &Path) -> Result<()> {
    if let Err(e) = fs::hard_link(original, staged) {
        debug!("Hard link failed ({}), trying fallback", e);

        if symlink(original, staged).is_ok() {
            return Ok(());
        }

        warn!(
            "Could not link {}, copying it for upload",
            original.display()
        );
        fs::copy(original, staged)?;
    }
    Ok(())
}

#[cfg(unix)]
fn symlink(original: &Path, staged: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, staged)
}

#[cfg(windows)]
fn symlink(original: &Path, staged: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, staged)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_original: &Path, _staged: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_path_used_directly() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();

        let source = UploadSource::prepare(&file).unwrap();
        assert!(!source.is_staged());
        assert_eq!(source.path(), file.as_path());
        assert_eq!(source.file_name(), "notes.txt");
    }

    #[test]
    fn test_non_ascii_path_is_staged() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("cafe\u{0301}.txt");
        fs::write(&file, "bonjour").unwrap();

        let source = UploadSource::prepare(&file).unwrap();
        assert!(source.is_staged());
        assert_eq!(source.file_name(), "caf%C3%A9.txt");
        assert_eq!(
            source.path().file_name().and_then(|n| n.to_str()),
            Some("caf%C3%A9.txt")
        );
        assert_eq!(fs::read_to_string(source.path()).unwrap(), "bonjour");
    }

    #[test]
    fn test_staged_artifact_removed_on_drop() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("\u{d55c}\u{ae00}.md");
        fs::write(&file, "# doc").unwrap();

        let staged_path = {
            let source = UploadSource::prepare(&file).unwrap();
            let path = source.path().to_path_buf();
            assert!(path.exists());
            path
        };

        assert!(!staged_path.exists());
        assert!(!staged_path.parent().unwrap().exists());
        assert!(file.exists());
    }

    #[test]
    fn test_staged_artifact_removed_on_close() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("r\u{00e9}sum\u{00e9}.pdf");
        fs::write(&file, "pdf").unwrap();

        let source = UploadSource::prepare(&file).unwrap();
        let staged_path = source.path().to_path_buf();
        source.close().unwrap();

        assert!(!staged_path.exists());
        assert_eq!(fs::read_to_string(&file).unwrap(), "pdf");
    }

    #[test]
    fn test_missing_file_fails_to_stage() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("absent-\u{00e9}.txt");
        assert!(UploadSource::prepare(&file).is_err());
    }
}
