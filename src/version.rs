//! Schema version gate for configuration documents.
//!
//! Every configuration document names the version of the file format it was
//! written against. A parser accepts only documents whose version lies in its
//! [`VersionWindow`], both bounds inclusive.

use std::cmp::Ordering;

use semver::{BuildMetadata, Version};

use crate::error::{Error, Result};

/// Oldest configuration file version this crate understands.
pub const MINIMUM_CONFIG_FILE_VERSION: Version = Version::new(0, 1, 0);

/// Newest configuration file version this crate understands.
pub const MAXIMUM_CONFIG_FILE_VERSION: Version = Version::new(0, 1, 0);

/// Closed range of configuration file versions accepted by a parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionWindow {
    minimum: Version,
    maximum: Version,
}

impl VersionWindow {
    /// Create a window accepting `minimum..=maximum`.
    pub fn new(minimum: Version, maximum: Version) -> Result<Self> {
        if precedence(&minimum, &maximum) == Ordering::Greater {
            return Err(Error::InvertedVersionWindow { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Create a window from two version strings.
    pub fn parse(minimum: &str, maximum: &str) -> Result<Self> {
        Self::new(parse_semantic(minimum)?, parse_semantic(maximum)?)
    }

    /// Window that accepts exactly one version.
    pub fn exactly(version: Version) -> Self {
        Self {
            minimum: version.clone(),
            maximum: version,
        }
    }

    pub fn minimum(&self) -> &Version {
        &self.minimum
    }

    pub fn maximum(&self) -> &Version {
        &self.maximum
    }

    /// Parse `raw` and check that it falls inside the window.
    ///
    /// Returns the parsed version on success.
    pub fn check(&self, raw: &str) -> Result<Version> {
        let version = parse_semantic(raw)?;
        if precedence(&version, &self.maximum) == Ordering::Greater {
            return Err(Error::VersionTooNew {
                version: raw.to_owned(),
                maximum: self.maximum.clone(),
            });
        }
        if precedence(&version, &self.minimum) == Ordering::Less {
            return Err(Error::VersionTooOld {
                version: raw.to_owned(),
                minimum: self.minimum.clone(),
            });
        }
        Ok(version)
    }

    /// True if `version` is inside the window.
    pub fn contains(&self, version: &Version) -> bool {
        precedence(version, &self.minimum) != Ordering::Less
            && precedence(version, &self.maximum) != Ordering::Greater
    }
}

impl Default for VersionWindow {
    fn default() -> Self {
        Self {
            minimum: MINIMUM_CONFIG_FILE_VERSION,
            maximum: MAXIMUM_CONFIG_FILE_VERSION,
        }
    }
}

/// Parse a configuration file version.
///
/// Surrounding whitespace and a single leading `v` are tolerated. The rest must
/// be a full `MAJOR.MINOR.PATCH` version, optionally with pre-release and build
/// metadata.
pub fn parse_semantic(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).map_err(|source| Error::VersionParse {
        version: raw.to_owned(),
        source,
    })
}

/// Semver precedence: build metadata does not take part in ordering.
fn precedence(a: &Version, b: &Version) -> Ordering {
    if a.build.is_empty() && b.build.is_empty() {
        return a.cmp(b);
    }
    let strip = |v: &Version| Version {
        build: BuildMetadata::EMPTY,
        ..v.clone()
    };
    strip(a).cmp(&strip(b))
}
