//! Error types for apisites-core operations.
//!
//! A single [`Error`] enum covers every failure the library can report. Only
//! [`Error::MissingDependency`] is produced by the loader itself, and the loader
//! never propagates it: it is logged and handed back inside
//! [`LoadOutcome::Skipped`](crate::LoadOutcome::Skipped).
//!
//! ```rust
//! use apisites_core::Error;
//!
//! let err = Error::UnknownProfile("staging".to_string());
//! assert_eq!(err.category(), "profile");
//! assert!(err.to_string().contains("staging"));
//! ```

use thiserror::Error;

/// The main error type for apisites-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required host hook was not supplied.
    ///
    /// Raised by the loader when no aggregation hook is available. The loader
    /// reports it and completes normally.
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// A site id appeared twice in one registry.
    #[error("Duplicate site id: {0}")]
    DuplicateSite(String),

    /// The requested profile is neither built in nor present on disk.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// A requested site does not exist in the registry.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A URL could not be parsed or is not absolute.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Converting a registry to or from JSON/TOML failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Used as a structured field when errors are logged:
    ///
    /// - `"missing_dependency"` - host hook absent at load time
    /// - `"duplicate_site"` - repeated id within one registry
    /// - `"profile"` - unknown profile name
    /// - `"not_found"` - missing site
    /// - `"invalid_url"` - URL format and validation
    /// - `"config"` - configuration and settings
    /// - `"io"` - file system operations
    /// - `"serialization"` - data format conversion
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MissingDependency(_) => "missing_dependency",
            Self::DuplicateSite(_) => "duplicate_site",
            Self::UnknownProfile(_) => "profile",
            Self::NotFound(_) => "not_found",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let cases = vec![
            (
                Error::MissingDependency("extend_sites".to_string()),
                "Missing dependency: extend_sites",
            ),
            (
                Error::DuplicateSite("ffzy".to_string()),
                "Duplicate site id: ffzy",
            ),
            (
                Error::UnknownProfile("nope".to_string()),
                "Unknown profile: nope",
            ),
            (Error::NotFound("lb".to_string()), "Not found: lb"),
            (
                Error::InvalidUrl("ftp:/x".to_string()),
                "Invalid URL: ftp:/x",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing.toml");
        let error: Error = io_error.into();

        match error {
            Error::Io(ref inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io variant, got {other:?}"),
        }
        assert_eq!(error.category(), "io");
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: Error = parse_err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::MissingDependency(String::new()).category(),
            "missing_dependency"
        );
        assert_eq!(Error::DuplicateSite(String::new()).category(), "duplicate_site");
        assert_eq!(Error::Config(String::new()).category(), "config");
        assert_eq!(Error::NotFound(String::new()).category(), "not_found");
        assert_eq!(Error::InvalidUrl(String::new()).category(), "invalid_url");
    }
}
