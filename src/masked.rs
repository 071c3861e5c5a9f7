use crate::capability::Capabilities;
use crate::error::AppError;

/// A read-only value with a copy-to-clipboard affordance, e.g. an API key
/// shown masked in the settings screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedValue {
    value: String,
}

impl MaskedValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Copy the full value through the injected clipboard capability
    pub fn copy(&self, capabilities: &impl Capabilities) -> Result<(), AppError> {
        capabilities.copy_to_clipboard(&self.value)
    }
}
