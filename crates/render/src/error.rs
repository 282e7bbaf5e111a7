//! Font loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Font loading result type
pub type FontResult<T> = Result<T, FontError>;

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font data for '{family}': {reason}")]
    Parse { family: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FontError::Parse {
            family: "Broken".to_string(),
            reason: "bad magic".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Failed to parse font data for 'Broken': bad magic"
        );
    }
}
