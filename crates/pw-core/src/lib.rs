//! Shared primitives used across Pagewright crates.

pub mod units;

pub use units::Unit;

/// Result alias used across the workspace.
pub type PagewrightResult<T> = Result<T, PagewrightError>;

/// Workspace error carrying a dotted machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct PagewrightError {
    pub code: &'static str,
    pub message: String,
}

impl PagewrightError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PagewrightError;

    #[test]
    fn display_includes_code_and_message() {
        let error = PagewrightError::new("config.parse", "expected table");
        assert_eq!(error.to_string(), "config.parse: expected table");
    }
}
