// file: src/utils/validation.rs
// description: local precondition checks run before any remote call
// reference: input validation patterns

use crate::error::{FileSearchError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_upload_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FileSearchError::Validation(format!(
                "File not found: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(FileSearchError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_not_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(FileSearchError::Validation(format!(
                "{} must not be empty",
                field
            )));
        }
        Ok(())
    }

    /// Display name to use for an upload: the explicit one, else the file name.
    pub fn resolve_display_name(path: &Path, display_name: Option<&str>) -> String {
        match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_upload_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("guide.pdf");
        fs::write(&file_path, "pdf").unwrap();

        assert!(Validator::validate_upload_path(&file_path).is_ok());
        assert!(Validator::validate_upload_path(&temp.path().join("absent.pdf")).is_err());
        assert!(Validator::validate_upload_path(temp.path()).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(Validator::validate_not_empty("question", "what?").is_ok());
        let err = Validator::validate_not_empty("question", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: question must not be empty");
    }

    #[test]
    fn test_resolve_display_name() {
        let path = Path::new("docs/caf\u{00e9}.txt");
        assert_eq!(Validator::resolve_display_name(path, None), "caf\u{00e9}.txt");
        assert_eq!(Validator::resolve_display_name(path, Some("")), "caf\u{00e9}.txt");
        assert_eq!(
            Validator::resolve_display_name(path, Some("Menu")),
            "Menu"
        );
    }
}
