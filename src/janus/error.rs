//! Error taxonomy for a conversion call
//!
//! Only two conditions abort a conversion: a horizontal background-position
//! length that cannot be mirrored, and a gradient call whose parentheses never
//! close. Everything the engine does not recognise passes through untouched.

use std::fmt;

/// Errors raised while mirroring a stylesheet
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// A non-zero length used as the horizontal background position.
    #[error("Unmirrorable horizontal value '{length}': {declaration}")]
    UnmirrorableBackgroundPosition { length: String, declaration: String },

    /// A gradient function call ran past the end of the input.
    #[error("Unbalanced parentheses in '{function}' starting at byte {offset}")]
    UnbalancedParentheses { function: String, offset: usize },

    /// Options could not be layered or deserialized.
    #[error("Invalid options: {0}")]
    Config(#[from] config::ConfigError),
}

/// A downgraded unmirrorable value, reported instead of failing the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The offending horizontal length, e.g. `5px`
    pub length: String,
    /// The full declaration text the length was found in
    pub declaration: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unmirrorable horizontal value '{}': {}",
            self.length, self.declaration
        )
    }
}

impl From<Diagnostic> for MirrorError {
    fn from(diagnostic: Diagnostic) -> Self {
        MirrorError::UnmirrorableBackgroundPosition {
            length: diagnostic.length,
            declaration: diagnostic.declaration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_matches_error_message() {
        let diagnostic = Diagnostic {
            length: "5px".into(),
            declaration: "background-position: 5px 10px".into(),
        };
        let message = diagnostic.to_string();
        let error: MirrorError = diagnostic.into();
        assert_eq!(error.to_string(), message);
        assert_eq!(
            message,
            "Unmirrorable horizontal value '5px': background-position: 5px 10px"
        );
    }

    #[test]
    fn test_unbalanced_display() {
        let error = MirrorError::UnbalancedParentheses {
            function: "linear-gradient(".into(),
            offset: 4,
        };
        assert!(error.to_string().contains("linear-gradient("));
        assert!(error.to_string().contains("byte 4"));
    }
}
