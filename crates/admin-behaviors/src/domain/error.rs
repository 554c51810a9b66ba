//! Domain Layer - Errors
//!
//! One error type for every behavior and port.

use thiserror::Error;

/// Common result type for page operations
pub type UiResult<T> = Result<T, UiError>;

/// Page-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("attribute `{attribute}` missing on {element}")]
    MissingAttribute { element: String, attribute: String },

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("script error: {0}")]
    Js(String),

    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(UiError::Http { status: 502 }.to_string(), "HTTP 502");
        let err = UiError::MissingAttribute {
            element: "button.show-items".to_string(),
            attribute: "data-url".to_string(),
        };
        assert_eq!(err.to_string(), "attribute `data-url` missing on button.show-items");
    }
}
