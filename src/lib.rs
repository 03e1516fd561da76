//! Parser and validator for cluster launch configuration files.
//!
//! A launch configuration is a stream of YAML documents. Each document names
//! the schema `version` it was written for and carries addons to enable or
//! disable, extra kubelet and kube-apiserver arguments, and extra certificate
//! Subject Alternative Names:
//!
//! ```yaml
//! version: 0.1.0
//! addons:
//!   - name: dns
//!     args: [10.152.183.10]
//! extraKubeAPIServerArgs:
//!   --event-ttl: 5m
//!   --profiling: null   # remove the argument
//! extraSANs:
//!   - cluster.example.com
//! ```
//!
//! [`parse_configuration`] validates one document, [`parse_multi_part_configuration`]
//! splits a stream on `---` and validates every part. Use [`ConfigParser`] with
//! [`ParseOptions`] to change the accepted version range.

pub use error::{Error, Result};
pub use options::ParseOptions;
pub use parser::{ConfigParser, parse_configuration, parse_multi_part_configuration};
pub use reader::{DocumentReader, ReadError};
pub use semver::Version;
pub use schema::{AddonConfiguration, Configuration, ExtraArgs, MultiPartConfiguration};
pub use version::{
    MAXIMUM_CONFIG_FILE_VERSION, MINIMUM_CONFIG_FILE_VERSION, VersionWindow, parse_semantic,
};

mod decode;
mod error;
mod macros;
mod options;
mod parser;
pub mod reader;
mod schema;
pub mod version;
