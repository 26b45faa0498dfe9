//! Custom user properties and the Attribute Collector.
//!
//! Source assets carry per-object custom properties: float tracks become the
//! animated UV bindings, and string attributes named `TargetTexProp...`
//! redirect which material texture property an object's UV animation should
//! drive. The collector turns those string attributes into composite records
//! in the importer settings so the rewriter can look them up later in the
//! same pass.

use serde::{Deserialize, Serialize};

use crate::sanitize::contains_marker;
use crate::settings::ImportSettings;

/// Name prefix identifying a texture-property redirect attribute.
pub const TARGET_TEX_PROP_PREFIX: &str = "TargetTexProp";

/// Value of a custom user property as handed over by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Float(f32),
    Text(String),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Float(_) => None,
        }
    }
}

/// One custom property on one imported object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProperty {
    pub name: String,
    pub value: PropertyValue,
}

impl UserProperty {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, PropertyValue::Text(value.into()))
    }

    pub fn float(name: impl Into<String>, value: f32) -> Self {
        Self::new(name, PropertyValue::Float(value))
    }
}

/// Collect texture-property redirects for one object.
///
/// For each property whose name starts with `TargetTexProp` and whose text
/// value contains "Tex" or "Map", appends `"<value>___<object_name>"` to the
/// extra-property list. No de-duplication; non-matching properties are
/// ignored silently. Returns the number of records appended (the settings
/// are marked dirty iff it is non-zero).
pub fn collect_target_texture_properties(
    settings: &mut ImportSettings,
    object_name: &str,
    properties: &[UserProperty],
) -> usize {
    let mut appended = 0;
    for prop in properties {
        if !prop.name.starts_with(TARGET_TEX_PROP_PREFIX) {
            continue;
        }
        let Some(value) = prop.value.as_text() else {
            continue;
        };
        if !contains_marker(value) {
            continue;
        }
        settings.push_record(value, object_name);
        appended += 1;
    }
    appended
}
