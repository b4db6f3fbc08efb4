//! Validation diagnostics

use serde::{Deserialize, Serialize};

/// Severity of a validation diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Blocks publishing
    Error,

    /// Advisory only, publishing proceeds
    Warning,
}

/// One diagnostic attached to a specific field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Field the diagnostic applies to (payload field name)
    pub field: String,

    /// Severity
    pub level: ValidationLevel,

    /// Operator-facing message, Japanese
    pub message: String,
}

impl ValidationResult {
    /// Build an error-level diagnostic
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            level: ValidationLevel::Error,
            message: message.into(),
        }
    }

    /// Build a warning-level diagnostic
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            level: ValidationLevel::Warning,
            message: message.into(),
        }
    }
}

/// True when any diagnostic in the slice is error-level
pub fn has_errors(results: &[ValidationResult]) -> bool {
    results.iter().any(|r| r.level == ValidationLevel::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let warnings = vec![ValidationResult::warning("salary", "推奨")];
        assert!(!has_errors(&warnings));

        let mixed = vec![
            ValidationResult::warning("salary", "推奨"),
            ValidationResult::error("title", "必須"),
        ];
        assert!(has_errors(&mixed));
    }
}
