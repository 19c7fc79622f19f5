//! Error types for catalog retrieval and AR launch-link handling.

use thiserror::Error;

/// Errors that can occur while serving catalog records or vetting AR links.
///
/// The glyph encoder is deliberately absent here: any string input produces a
/// well-defined fingerprint, so encoding has no error conditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtlasError {
    /// The launch link scheme is not supported. Only https is accepted.
    #[error("Invalid launch link scheme: only https is supported")]
    InvalidScheme,

    /// The launch link host is not a valid DNS name or is an IP address.
    #[error("Launch link host must be a DNS name, not an IP address")]
    HostNotDns,

    /// The launch link host has no registrable domain under the Public Suffix List.
    #[error("Launch link host has no registrable domain: {0}")]
    UnknownSuffix(String),

    /// The launch link points at a host outside the launch allowlist.
    #[error("Launch host not allowed: {0}")]
    HostNotAllowed(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// The catalog file could not be read.
    #[error("Catalog read failed: {0}")]
    CatalogRead(String),

    /// The catalog file contents could not be parsed as site records.
    #[error("Catalog parse failed: {0}")]
    CatalogParse(String),

    /// A record could not be serialized for digesting.
    #[error("Record serialization failed: {0}")]
    RecordSerialize(String),
}

impl From<url::ParseError> for AtlasError {
    fn from(err: url::ParseError) -> Self {
        AtlasError::UrlParseError(err.to_string())
    }
}
