//! Paint parsing error types

use thiserror::Error;

/// Paint parsing result type
pub type PaintResult<T> = Result<T, PaintError>;

/// Errors raised while parsing a CSS-style paint string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid color component '{component}' in '{color}'")]
    InvalidComponent { color: String, component: String },
}

impl PaintError {
    pub fn invalid_color(color: impl Into<String>) -> Self {
        Self::InvalidColor(color.into())
    }

    pub fn invalid_component(color: impl Into<String>, component: impl Into<String>) -> Self {
        Self::InvalidComponent {
            color: color.into(),
            component: component.into(),
        }
    }
}
