//! Core configuration for uvanim-import-core.

use serde::{Deserialize, Serialize};

use crate::settings::DEFAULT_TEXTURE_PROPERTY;

/// Configuration for the postprocessor. Keep this minimal; expand as needed
/// without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Texture property driven when an object has no redirect record.
    /// `_MainTex` for the legacy pipeline; URP projects typically set
    /// `_BaseMap`, HDRP `_BaseColorMap`.
    pub default_texture_property: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_texture_property: DEFAULT_TEXTURE_PROPERTY.to_string(),
        }
    }
}
