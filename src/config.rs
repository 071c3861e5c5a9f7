use std::env;

use crate::constants::{DEFAULT_API_ROOT, DEFAULT_VERSION};

/// Configuration read from the environment, with hard defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the image proxy endpoint
    pub api_root: String,
    /// Version label recorded in logs
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_root: env::var("REMOTE_IMAGE_RESOLVER_API_ROOT")
                .unwrap_or_else(|_| DEFAULT_API_ROOT.to_owned()),
            version: env::var("REMOTE_IMAGE_RESOLVER_VERSION")
                .unwrap_or_else(|_| DEFAULT_VERSION.to_owned()),
        }
    }
}
