//! Diagnostic model for malformed declarative configuration
//!
//! Diagnostics are non-fatal: an invalid declaration excludes that unit from
//! emission but never halts the rest of the pass. Codes are stable strings so
//! golden-output tests can pin them.

use std::fmt;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported validation failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Stable code, see [`codes`].
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Name of the offending symbol (method or type).
    pub symbol: String,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: String, symbol: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)
    }
}

/// Stable diagnostic codes.
pub mod codes {
    /// Extension method is not public or internal.
    pub const EXTENSION_NOT_ACCESSIBLE: &str = "WIRE0001";
    /// Extension method is not static.
    pub const EXTENSION_NOT_STATIC: &str = "WIRE0002";
    /// Extension method does not take exactly one parameter.
    pub const EXTENSION_PARAMETER_COUNT: &str = "WIRE0003";
    /// Extension method parameter is not the container collection type.
    pub const EXTENSION_PARAMETER_TYPE: &str = "WIRE0004";
}

/// Constructors for the diagnostics the engine reports.
pub mod errors {
    use super::{codes, Diagnostic};

    pub fn extension_not_accessible(method: &str, declaring_type: &str) -> Diagnostic {
        Diagnostic::error(
            codes::EXTENSION_NOT_ACCESSIBLE,
            format!(
                "Registration extension method '{}' on '{}' must be public or internal",
                method, declaring_type
            ),
            method,
        )
    }

    pub fn extension_not_static(method: &str, declaring_type: &str) -> Diagnostic {
        Diagnostic::error(
            codes::EXTENSION_NOT_STATIC,
            format!(
                "Registration extension method '{}' on '{}' must be static",
                method, declaring_type
            ),
            method,
        )
    }

    pub fn extension_parameter_count(method: &str, declaring_type: &str, expected: &str) -> Diagnostic {
        Diagnostic::error(
            codes::EXTENSION_PARAMETER_COUNT,
            format!(
                "Registration extension method '{}' on '{}' must have exactly one parameter of type '{}'",
                method, declaring_type, expected
            ),
            method,
        )
    }

    pub fn extension_parameter_type(method: &str, declaring_type: &str, expected: &str) -> Diagnostic {
        Diagnostic::error(
            codes::EXTENSION_PARAMETER_TYPE,
            format!(
                "Registration extension method '{}' on '{}' must take a parameter of type '{}'",
                method, declaring_type, expected
            ),
            method,
        )
    }
}
