use std::collections::BTreeMap;

use crate::constants;

/// Image attributes as supplied by the caller, before resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub alt: Option<String>,

    /// Any further attributes, carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ImageAttrs {
    pub fn from_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }
}

/// The augmented attribute set handed to the rendering layer.
/// `src` is always the caller's value verbatim; only `srcset` and `sizes`
/// are synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub srcset: Option<String>,

    pub sizes: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub alt: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for ResolvedAttrs {
    fn default() -> Self {
        Self {
            src: None,
            srcset: None,
            sizes: constants::SIZES.to_owned(),
            alt: None,
            extra: BTreeMap::new(),
        }
    }
}
