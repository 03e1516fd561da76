//! Configuration file data model.
//!
//! A configuration file is a stream of YAML documents. Each document decodes
//! into one [`Configuration`]; the documents of a stream together form a
//! [`MultiPartConfiguration`] that is applied part by part, in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// An addon to be enabled or disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonConfiguration {
    /// Name of the addon to configure.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Disable the addon instead of enabling it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub disable: bool,

    /// Arguments passed verbatim to the addon enable or disable operation.
    #[serde(
        rename = "args",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub arguments: Vec<String>,
}

/// Extra command line arguments for a cluster component.
///
/// A key mapped to `None` (YAML `null`) asks for the argument to be removed.
pub type ExtraArgs = BTreeMap<String, Option<String>>;

/// One configuration document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Semantic version of the configuration file format.
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,

    /// Addons to enable and/or disable, in order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub addons: Vec<AddonConfiguration>,

    /// Extra arguments for the local node kubelet.
    #[serde(
        rename = "extraKubeletArgs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub extra_kubelet_args: ExtraArgs,

    /// Extra arguments for the local node kube-apiserver.
    #[serde(
        rename = "extraKubeAPIServerArgs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub extra_kube_api_server_args: ExtraArgs,

    /// Extra Subject Alternative Names for the local API server certificate.
    #[serde(
        rename = "extraSANs",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extra_sans: Vec<String>,
}

impl Configuration {
    /// True if every field holds its zero value.
    ///
    /// Must list every field of the struct.
    pub fn is_zero(&self) -> bool {
        self.version.is_empty()
            && self.addons.is_empty()
            && self.extra_kubelet_args.is_empty()
            && self.extra_kube_api_server_args.is_empty()
            && self.extra_sans.is_empty()
    }
}

/// A configuration split into parts that are meant to be applied in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MultiPartConfiguration {
    pub parts: Vec<Configuration>,
}

impl MultiPartConfiguration {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.parts.iter()
    }
}

impl IntoIterator for MultiPartConfiguration {
    type Item = Configuration;
    type IntoIter = std::vec::IntoIter<Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPartConfiguration {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// Treat an explicit YAML null as the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
