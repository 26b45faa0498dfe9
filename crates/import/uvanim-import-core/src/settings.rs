//! Persisted importer settings and the composite-record convention.
//!
//! The host keeps one long-lived settings value per asset and persists it
//! between import passes. The core never owns it: every hook receives the
//! settings by reference and flips the dirty flag when it changes the
//! extra-property list, which tells the host to persist.
//!
//! Extra properties are flat strings. The collector encodes its
//! texture-property associations into them as `"<texProp>___<objectName>"`;
//! the last `"___"` occurrence is authoritative when splitting. Entries
//! without a separator are ignored during lookup.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Separator between the texture-property name and the object name in a
/// composite record.
pub const RECORD_SEPARATOR: &str = "___";

/// Texture property used when no composite record matches an object.
pub const DEFAULT_TEXTURE_PROPERTY: &str = "_MainTex";

/// Per-asset importer settings, host-persisted across import passes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    #[serde(rename = "extraUserProperties", default)]
    pub extra_properties: Vec<String>,
    #[serde(skip)]
    dirty: bool,
}

impl ImportSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_extra_properties(extra_properties: Vec<String>) -> Self {
        Self {
            extra_properties,
            dirty: false,
        }
    }

    /// True when the extra-property list changed since the last
    /// `clear_dirty`, i.e. the host should persist.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Host calls this after persisting.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Append a composite record for `object_name` and mark the settings
    /// dirty. No de-duplication; the sanitizer is responsible for clearing
    /// stale records before a pass collects new ones.
    pub fn push_record(&mut self, value: &str, object_name: &str) {
        self.extra_properties
            .push(composite_record(value, object_name));
        self.mark_dirty();
    }
}

/// Encode `"<value>___<object_name>"`.
pub fn composite_record(value: &str, object_name: &str) -> String {
    format!("{value}{RECORD_SEPARATOR}{object_name}")
}

/// Split a composite record at its last separator occurrence into
/// `(texture_property, object_name)`. `None` when the entry carries no
/// separator.
pub fn split_composite(entry: &str) -> Option<(&str, &str)> {
    entry
        .rfind(RECORD_SEPARATOR)
        .map(|idx| (&entry[..idx], &entry[idx + RECORD_SEPARATOR.len()..]))
}

/// Resolve the texture property for an object from the extra-property list.
///
/// Scans in sequence order and takes the first entry that ends with the
/// object's name; the texture property is everything before the last
/// separator. Separator-less entries are skipped and scanning continues.
/// `None` when nothing matches; callers fall back to a default
/// (`DEFAULT_TEXTURE_PROPERTY` unless configured otherwise).
pub fn resolve_texture_property<'a>(
    extra_properties: &'a [String],
    object_name: &str,
) -> Option<&'a str> {
    extra_properties
        .iter()
        .filter(|entry| entry.ends_with(object_name))
        .find_map(|entry| split_composite(entry).map(|(tex_prop, _)| tex_prop))
}

/// Parse the host's persisted importer-settings JSON document.
pub fn parse_import_settings_json(s: &str) -> Result<ImportSettings, SettingsError> {
    serde_json::from_str(s).map_err(|e| SettingsError::Parse {
        reason: e.to_string(),
    })
}

/// Serialize settings back into the host's persisted JSON form.
pub fn export_import_settings_json(settings: &ImportSettings) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Serialize {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_last_separator() {
        assert_eq!(split_composite("_BaseMap___Bone01"), Some(("_BaseMap", "Bone01")));
        assert_eq!(split_composite("a___b___c"), Some(("a___b", "c")));
        assert_eq!(split_composite("noseparator"), None);
    }

    #[test]
    fn resolve_takes_first_match_in_order() {
        let extra = vec!["foo___Bone01".to_string(), "bar___Bone01".to_string()];
        assert_eq!(resolve_texture_property(&extra, "Bone01"), Some("foo"));
    }

    #[test]
    fn resolve_skips_separator_less_entries() {
        let extra = vec!["Bone01".to_string(), "bar___Bone01".to_string()];
        assert_eq!(resolve_texture_property(&extra, "Bone01"), Some("bar"));
    }

    #[test]
    fn resolve_none_without_match() {
        let extra = vec!["foo___Other".to_string()];
        assert_eq!(resolve_texture_property(&extra, "Bone01"), None);
    }
}
