/// Widths requested from the image proxy for each remote image
pub const SRCSET_WIDTHS: [u32; 2] = [320, 767];

/// The `sizes` descriptor attached to every resolved image
pub const SIZES: &str = "(max-width: 767px) 767px, 320px";

pub const DEFAULT_API_ROOT: &str = "/api";
pub const DEFAULT_VERSION: &str = "snapshot";
