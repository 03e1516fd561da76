//! Strict-then-lenient decoding of a single configuration document.
//!
//! The strict pass rejects duplicate keys and any key the schema does not
//! know. When it fails, the document is decoded again from scratch in lenient
//! mode, where unknown keys are dropped and duplicate argument names resolve
//! last-wins. A repeated schema key (two `version:` lines) fails both passes.
//! Configuration written for a newer schema therefore still loads, while a
//! document that is broken in both modes reports the lenient failure.

use std::fmt;

use serde_saphyr::options::DuplicateKeyPolicy;
use tracing::warn;

use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::schema::Configuration;

/// Why the strict pass rejected a document.
#[derive(Debug)]
pub(crate) enum StrictFailure {
    Yaml(serde_saphyr::Error),
    UnknownFields(Vec<String>),
}

impl fmt::Display for StrictFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrictFailure::Yaml(err) => write!(f, "{err}"),
            StrictFailure::UnknownFields(fields) => {
                write!(f, "unknown fields: {}", fields.join(", "))
            }
        }
    }
}

/// Decode `input`, falling back to lenient mode when strict decoding fails.
///
/// An empty document decodes to [`Configuration::default`]; whether that is
/// acceptable is up to the caller.
pub(crate) fn decode(input: &[u8], options: &ParseOptions) -> Result<Configuration> {
    let strict_error = match decode_strict(input, options) {
        Ok(cfg) => return Ok(cfg),
        Err(err) => err,
    };

    let (cfg, ignored) = decode_lenient(input, options).map_err(Error::Decode)?;

    warn!(error = %strict_error, "configuration may contain unknown fields");
    warn!(fields = ?ignored, "any unknown fields will be ignored");

    Ok(cfg)
}

pub(crate) fn decode_strict(
    input: &[u8],
    options: &ParseOptions,
) -> std::result::Result<Configuration, StrictFailure> {
    let (cfg, ignored) = decode_tracking(input, engine_options(options, DuplicateKeyPolicy::Error))
        .map_err(StrictFailure::Yaml)?;
    if !ignored.is_empty() {
        return Err(StrictFailure::UnknownFields(ignored));
    }
    Ok(cfg)
}

/// Returns the decoded configuration along with the paths of ignored keys.
pub(crate) fn decode_lenient(
    input: &[u8],
    options: &ParseOptions,
) -> std::result::Result<(Configuration, Vec<String>), serde_saphyr::Error> {
    decode_tracking(input, engine_options(options, DuplicateKeyPolicy::LastWins))
}

fn decode_tracking(
    input: &[u8],
    options: serde_saphyr::Options,
) -> std::result::Result<(Configuration, Vec<String>), serde_saphyr::Error> {
    let mut ignored = Vec::new();
    let decoded: Option<Configuration> =
        serde_saphyr::with_deserializer_from_slice_with_options(input, options, |de| {
            serde_ignored::deserialize(de, |path| ignored.push(path.to_string()))
        })?;
    Ok((decoded.unwrap_or_default(), ignored))
}

fn engine_options(options: &ParseOptions, duplicate_keys: DuplicateKeyPolicy) -> serde_saphyr::Options {
    serde_saphyr::options! {
        budget: options.budget.clone(),
        duplicate_keys: duplicate_keys,
        with_snippet: options.with_snippet,
    }
}
