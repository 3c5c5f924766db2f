//! Error types for jumplinks-config

use thiserror::Error;

/// Result type alias for jumplinks-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for jumplinks-config
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Field Kind Errors
    // -------------------------------------------------------------------------
    #[error("Field kind '{0}' is not registered with the host")]
    UnknownFieldKind(String),

    // -------------------------------------------------------------------------
    // Attribute Errors
    // -------------------------------------------------------------------------
    #[error("Unknown field attribute: {0}")]
    UnknownAttribute(String),

    #[error("Attribute '{attr}' is not supported on {kind}")]
    UnsupportedAttribute { kind: String, attr: String },

    #[error("Invalid value for attribute '{attr}': {reason}")]
    InvalidAttributeValue { attr: String, reason: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(String),
}

impl Error {
    /// Check if this is a field-kind lookup failure
    ///
    /// Lookup failures indicate a host misconfiguration and are not meant to
    /// be shown to end users.
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::UnknownFieldKind(_))
    }

    /// Check if this error was raised while building a descriptor from metadata
    #[must_use]
    pub fn is_attribute_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownAttribute(_)
                | Error::UnsupportedAttribute { .. }
                | Error::InvalidAttributeValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::UnknownFieldKind("InputfieldColor".into()).is_lookup_error());
        assert!(!Error::UnknownAttribute("size".into()).is_lookup_error());
        assert!(Error::UnknownAttribute("size".into()).is_attribute_error());
        assert!(
            Error::InvalidAttributeValue {
                attr: "columnWidth".into(),
                reason: "expected a number".into(),
            }
            .is_attribute_error()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::UnsupportedAttribute {
            kind: "InputfieldFieldset".into(),
            attr: "options".into(),
        };
        assert_eq!(
            err.to_string(),
            "Attribute 'options' is not supported on InputfieldFieldset"
        );
    }
}
