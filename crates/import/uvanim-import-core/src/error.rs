//! Error types for the settings persistence boundary.
//!
//! The import hooks themselves have no error channel: absent settings,
//! missing renderers, and malformed records are all silent no-ops by
//! contract. Errors only arise when reading or writing the host's persisted
//! settings document.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    /// Persisted importer-settings JSON did not parse.
    #[error("failed to parse importer settings: {reason}")]
    Parse { reason: String },

    /// Settings could not be serialized back to JSON.
    #[error("failed to serialize importer settings: {reason}")]
    Serialize { reason: String },
}
