//! Entry points turning YAML input into validated configuration.

use std::io::BufRead;

use tracing::debug;

use crate::decode::decode;
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::reader::DocumentReader;
use crate::schema::{Configuration, MultiPartConfiguration};

/// Parses and validates configuration documents.
///
/// A parser holds only its [`ParseOptions`]; it can be shared between threads
/// and reused for any number of inputs.
///
/// ```rust
/// use launch_config::ConfigParser;
///
/// let yaml = b"\
/// version: 0.1.0
/// addons:
///   - name: dns
///   - name: ingress
///     disable: true
/// ---
/// version: 0.1.0
/// extraKubeletArgs:
///   --max-pods: \"200\"
///   --cluster-domain: null
/// ";
///
/// let multi = ConfigParser::new().parse_multi_part(yaml).unwrap();
/// assert_eq!(multi.len(), 2);
/// assert!(multi.parts[0].addons[1].disable);
/// assert_eq!(multi.parts[1].extra_kubelet_args["--cluster-domain"], None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigParser {
    options: ParseOptions,
}

impl ConfigParser {
    /// Parser accepting the configuration file versions this crate supports.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse exactly one YAML document.
    ///
    /// A document without any content fails with [`Error::EmptyConfig`].
    pub fn parse(&self, input: &[u8]) -> Result<Configuration> {
        let cfg = decode(input, &self.options)?;

        if cfg.is_zero() {
            return Err(Error::EmptyConfig);
        }

        self.options.version_window.check(&cfg.version)?;

        Ok(cfg)
    }

    /// Parse a stream of `---`-separated documents into an ordered list of parts.
    ///
    /// Empty documents are skipped. Any other failure aborts the whole stream;
    /// no parts are returned alongside an error.
    pub fn parse_multi_part(&self, input: &[u8]) -> Result<MultiPartConfiguration> {
        self.parse_multi_part_reader(input)
    }

    /// Like [`ConfigParser::parse_multi_part`], reading from any buffered reader.
    pub fn parse_multi_part_reader<R: BufRead>(&self, reader: R) -> Result<MultiPartConfiguration> {
        let mut parts = Vec::new();

        for (index, document) in DocumentReader::new(reader).enumerate() {
            let document = document?;
            match self.parse(&document) {
                Ok(part) => parts.push(part),
                Err(Error::EmptyConfig) => {
                    debug!(document = index, "skipping empty configuration document");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(MultiPartConfiguration { parts })
    }
}

/// Parse one document with the default [`ParseOptions`].
pub fn parse_configuration(input: &[u8]) -> Result<Configuration> {
    ConfigParser::new().parse(input)
}

/// Parse a multi-document stream with the default [`ParseOptions`].
pub fn parse_multi_part_configuration(input: &[u8]) -> Result<MultiPartConfiguration> {
    ConfigParser::new().parse_multi_part(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionWindow;

    #[test]
    fn parse_rejects_empty_document() {
        let err = ConfigParser::new().parse(b"# nothing\n").expect_err("empty");
        assert!(err.is_empty_config());
    }

    #[test]
    fn emptiness_is_checked_before_version() {
        // No version at all, but also nothing else: empty rather than a version error.
        let err = ConfigParser::new().parse(b"addons: []\n").expect_err("empty");
        assert!(err.is_empty_config());
    }

    #[test]
    fn missing_version_with_content_is_a_parse_error() {
        let err = ConfigParser::new()
            .parse(b"extraSANs: [10.0.0.1]\n")
            .expect_err("missing version");
        match err {
            Error::VersionParse { version, .. } => assert_eq!(version, ""),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn injected_window_is_used() {
        let parser = ConfigParser::with_options(crate::parse_options! {
            version_window: VersionWindow::parse("0.2.0", "0.3.0").unwrap(),
        });
        assert!(parser.parse(b"version: 0.2.1\n").is_ok());
        assert!(matches!(
            parser.parse(b"version: 0.1.0\n"),
            Err(Error::VersionTooOld { .. })
        ));
    }

    #[test]
    fn multi_part_skips_blank_documents() {
        let yaml = b"version: 0.1.0\n---\n# blank\n---\n{}\n---\nversion: 0.1.0\nextraSANs: [b]\n";
        let multi = ConfigParser::new().parse_multi_part(yaml).unwrap();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.parts[1].extra_sans, ["b"]);
    }

    #[test]
    fn multi_part_of_nothing_is_empty() {
        let multi = ConfigParser::new().parse_multi_part(b"").unwrap();
        assert!(multi.is_empty());
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ConfigParser>();
    }
}
