use serde_saphyr::Budget;

use crate::version::VersionWindow;

/// Parser configuration options.
///
/// Use this to widen or narrow the accepted configuration file versions and to
/// tune the YAML engine limits applied to every document.
///
/// Example: accept configuration files from `0.1.0` up to `0.2.0`.
///
/// ```rust
/// use launch_config::{ConfigParser, VersionWindow};
///
/// let options = launch_config::parse_options! {
///     version_window: VersionWindow::parse("0.1.0", "0.2.0").unwrap(),
/// };
///
/// let parser = ConfigParser::with_options(options);
/// let cfg = parser.parse(b"version: 0.2.0\nextraSANs: [10.0.0.1]\n").unwrap();
/// assert_eq!(cfg.extra_sans, ["10.0.0.1"]);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Configuration file versions accepted by the parser.
    pub version_window: VersionWindow,
    /// Optional YAML budget enforced on each document before decoding.
    pub budget: Option<Budget>,
    /// If true (default), decode errors carry a rendered snippet of the
    /// offending document.
    pub with_snippet: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            version_window: VersionWindow::default(),
            budget: Some(Budget::default()),
            with_snippet: true,
        }
    }
}
