//! Canonical error representation for faults captured at the boundary.

use crate::capture::{panic_message, Fault};

/// Result type alias for faultline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for faultline operations
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// An error value returned by a function run inside the capture boundary
    #[error("{source}")]
    #[diagnostic(code(faultline::raised))]
    Raised {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A panic intercepted by the capture boundary
    #[error("panicked: {message}")]
    #[diagnostic(
        code(faultline::panicked),
        help("the wrapped function panicked; the payload was rendered to text")
    )]
    Panicked { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    #[diagnostic(code(faultline::config))]
    Configuration { message: String },
}

impl Error {
    /// Wrap an arbitrary error value
    #[must_use]
    pub fn raised(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Raised {
            source: source.into(),
        }
    }

    /// Create a captured-panic error
    #[must_use]
    pub fn panicked(message: impl Into<String>) -> Self {
        Error::Panicked {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Borrow the wrapped error as a concrete type
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        match self {
            Error::Raised { source } => source.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Normalize a captured fault into an [`Error`].
///
/// A raised value that already is an [`Error`] passes through unchanged; any
/// other raised error is wrapped with its source kept; a panic becomes
/// [`Error::Panicked`] carrying the rendered payload.
pub fn to_error(fault: Fault) -> Error {
    match fault {
        Fault::Raised(source) => match source.downcast::<Error>() {
            Ok(error) => *error,
            Err(source) => Error::Raised { source },
        },
        Fault::Panic(payload) => Error::Panicked {
            message: panic_message(payload.as_ref()),
        },
    }
}

// Conversion implementations
impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        to_error(fault)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::raised(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{try_catch, try_catch_result};
    use crate::either::Either;
    use std::error::Error as _;

    #[test]
    fn test_to_error_passes_existing_errors_through() {
        let original = Error::configuration("bad mode");
        let normalized = to_error(Fault::Raised(Box::new(original)));

        assert!(
            matches!(normalized, Error::Configuration { ref message } if message == "bad mode")
        );
    }

    #[test]
    fn test_to_error_wraps_foreign_errors() {
        let parse_failure = "x".parse::<i32>().unwrap_err();
        let normalized = to_error(Fault::Raised(Box::new(parse_failure.clone())));

        assert_eq!(normalized.to_string(), parse_failure.to_string());
        assert_eq!(
            normalized.downcast_ref::<std::num::ParseIntError>(),
            Some(&parse_failure)
        );
        assert!(normalized.source().is_some());
    }

    #[test]
    fn test_to_error_renders_panics() {
        let normalized = to_error(Fault::Panic(Box::new("stack exhausted")));

        assert_eq!(normalized.to_string(), "panicked: stack exhausted");
        assert!(normalized.source().is_none());
    }

    #[test]
    fn test_from_fault_round_trip_through_boundary() {
        let result: Either<Error, ()> = try_catch_result(
            || Err(Error::panicked("inner")),
            |fault: Fault| Error::from(fault),
        );
        assert!(
            matches!(result, Either::Left(Error::Panicked { ref message }) if message == "inner")
        );

        let result: Either<Error, u8> =
            try_catch(|| -> u8 { panic!("outer") }, |fault: Fault| Error::from(fault));
        assert!(
            matches!(result, Either::Left(Error::Panicked { ref message }) if message == "outer")
        );
    }

    fn read_port(raw: &str) -> Result<u16> {
        let document: serde_json::Value = serde_json::from_str(raw)?;
        Ok(document["port"].as_u64().map_or(0, |port| port as u16))
    }

    #[test]
    fn test_json_errors_convert_with_question_mark() {
        assert_eq!(read_port(r#"{"port": 8080}"#).unwrap(), 8080);

        let error = read_port("{port").unwrap_err();
        assert!(matches!(error, Error::Raised { .. }));
        assert!(error.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic;

        let code = Error::configuration("x").code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("faultline::config"));
    }
}
