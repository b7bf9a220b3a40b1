// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{AnalysisError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalysisError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(AnalysisError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(AnalysisError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// A reading is usable when it parses as a finite number
    pub fn parse_temperature(cell: &str) -> Option<f64> {
        cell.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("content").is_ok());
        assert!(Validator::validate_content_not_empty("").is_err());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }

    #[test]
    fn test_parse_temperature() {
        assert_eq!(Validator::parse_temperature(" 21.4 "), Some(21.4));
        assert_eq!(Validator::parse_temperature("-3"), Some(-3.0));
        assert_eq!(Validator::parse_temperature("warm"), None);
        assert_eq!(Validator::parse_temperature("NaN"), None);
        assert_eq!(Validator::parse_temperature("inf"), None);
    }
}
