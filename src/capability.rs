use crate::error::AppError;

/// Environment capabilities injected into the menu and clipboard logic so
/// they can run without a real browser environment.
pub trait Capabilities {
    /// Whether the environment exposes a native share sheet
    fn supports_share(&self) -> bool;

    fn copy_to_clipboard(&self, text: &str) -> Result<(), AppError>;
}

/// A headless environment: no share sheet, no clipboard
#[derive(Debug, Default)]
pub struct NoCapabilities;

impl Capabilities for NoCapabilities {
    fn supports_share(&self) -> bool {
        false
    }

    fn copy_to_clipboard(&self, _text: &str) -> Result<(), AppError> {
        Err(AppError::Clipboard)
    }
}
