//! Errors returned by the configuration parsers.
use semver::Version;
use thiserror::Error;

use crate::reader::ReadError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error produced while turning YAML input into validated configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Neither the strict nor the lenient decoding pass accepted the document.
    /// Carries the lenient pass failure.
    #[error("could not parse configuration: {0}")]
    Decode(#[source] serde_saphyr::Error),

    /// The document decoded to a configuration with every field unset.
    ///
    /// Multi-document parsing skips such documents; a direct single-document
    /// call reports it to the caller.
    #[error("empty configuration object")]
    EmptyConfig,

    /// The `version` field is not a semantic version.
    #[error("could not parse config file version {version:?}: {source}")]
    VersionParse {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// The `version` field is newer than the newest supported schema.
    #[error("config file version is {version} but the maximum version supported is {maximum}")]
    VersionTooNew { version: String, maximum: Version },

    /// The `version` field is older than the oldest supported schema.
    #[error("config file version is {version} but the minimum version required is {minimum}")]
    VersionTooOld { version: String, minimum: Version },

    /// The document stream could not be split into documents.
    #[error(transparent)]
    StreamRead(#[from] ReadError),

    /// A [`crate::VersionWindow`] was requested with its bounds the wrong way round.
    #[error("minimum config file version {minimum} is greater than the maximum {maximum}")]
    InvertedVersionWindow { minimum: Version, maximum: Version },
}

impl Error {
    /// True for the skippable "empty configuration" signal.
    pub fn is_empty_config(&self) -> bool {
        matches!(self, Error::EmptyConfig)
    }

    /// True when the error comes from the version gate rather than from decoding.
    pub fn is_version_error(&self) -> bool {
        matches!(
            self,
            Error::VersionParse { .. } | Error::VersionTooNew { .. } | Error::VersionTooOld { .. }
        )
    }
}
