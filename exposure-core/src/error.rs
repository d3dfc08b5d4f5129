//! Structured errors
//!
//! Every failure carries a machine-readable code, a message naming the
//! violated precondition and, where one exists, a suggestion for the caller.

use crate::FractionError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
}

/// Structured error for exposure computations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ExposureError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_type_mismatch(&self) -> bool {
        self.code == codes::TYPE_MISMATCH
    }

    pub fn is_domain_error(&self) -> bool {
        self.code == codes::DOMAIN_ERROR
    }

    pub fn is_configuration_error(&self) -> bool {
        self.code == codes::CONFIGURATION_ERROR
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Use forms like \"f/2.8\", \"1/125 sec\", \"400 ISO\" or \"5/3\"")
    }

    pub fn type_mismatch(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_MISMATCH, format!("Expected {}, got {}", expected, got))
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn configuration(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIGURATION_ERROR, format!("Configuration error: {}", details.into()))
    }
}

impl std::fmt::Display for ExposureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExposureError {}

impl From<FractionError> for ExposureError {
    fn from(err: FractionError) -> Self {
        match err {
            FractionError::Parse(s) => Self::parse_error(format!("invalid fraction '{}'", s)),
            FractionError::ZeroDenominator => Self::domain_error("zero denominator"),
            FractionError::NotFinite(v) => Self::domain_error(format!("{} is not a finite number", v)),
        }
    }
}
