//! Embedded JSON fixtures shared by uvanim integration tests.
//!
//! Three name-keyed registries: persisted importer-settings documents,
//! imported-object snapshots, and curve-binding sequences. Everything is
//! embedded; tests parse the JSON through the core crate's serde types.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

static SETTINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "persisted-stale",
            r#"{
              "extraUserProperties": [
                "_BaseMap___Tail",
                "legacyExporterFlag",
                "MyMap___Leg"
              ]
            }"#,
        ),
        (
            "persisted-clean",
            r#"{ "extraUserProperties": ["legacyExporterFlag"] }"#,
        ),
        ("persisted-empty", r#"{ "extraUserProperties": [] }"#),
    ])
});

static OBJECTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "skinned-tail",
            r#"{
              "name": "Tail",
              "path": { "segments": ["Chimera", "Body", "Tail"] },
              "renderers": ["SkinnedMeshRenderer"]
            }"#,
        ),
        (
            "static-fan",
            r#"{
              "name": "Fan",
              "path": { "segments": ["Machine", "Fan"] },
              "renderers": ["MeshRenderer"]
            }"#,
        ),
        (
            "camera-rig",
            r#"{
              "name": "CameraRig",
              "path": { "segments": ["Machine", "CameraRig"] },
              "renderers": []
            }"#,
        ),
    ])
});

static BINDINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "uv-scroll-full",
            r#"[
              { "propertyName": "uvRepeatAnimU", "path": "Body/Tail", "target": "Transform" },
              { "propertyName": "uvRepeatAnimV", "path": "Body/Tail", "target": "Transform" },
              { "propertyName": "uvOffsetAnimU", "path": "Body/Tail", "target": "Transform" },
              { "propertyName": "uvOffsetAnimV_custom", "path": "Body/Tail", "target": "Transform" },
              { "propertyName": "m_LocalPosition.x", "path": "Body/Tail", "target": "Transform" }
            ]"#,
        ),
        (
            "no-uv-tracks",
            r#"[
              { "propertyName": "m_LocalRotation.y", "path": "Fan", "target": "Transform" },
              { "propertyName": "intensity", "path": "Fan", "target": { "Other": "Light" } }
            ]"#,
        ),
    ])
});

fn lookup(map: &HashMap<&'static str, &'static str>, kind: &str, name: &str) -> Result<String> {
    map.get(name)
        .map(|raw| raw.to_string())
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod importer_settings {
    use super::*;

    pub fn keys() -> Vec<String> {
        SETTINGS.keys().map(|k| k.to_string()).collect()
    }

    pub fn json(name: &str) -> Result<String> {
        lookup(&SETTINGS, "importer-settings", name)
    }
}

pub mod objects {
    use super::*;

    pub fn keys() -> Vec<String> {
        OBJECTS.keys().map(|k| k.to_string()).collect()
    }

    pub fn json(name: &str) -> Result<String> {
        lookup(&OBJECTS, "object", name)
    }
}

pub mod bindings {
    use super::*;

    pub fn keys() -> Vec<String> {
        BINDINGS.keys().map(|k| k.to_string()).collect()
    }

    pub fn json(name: &str) -> Result<String> {
        lookup(&BINDINGS, "bindings", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_valid_json() {
        for name in importer_settings::keys() {
            let raw = importer_settings::json(&name).unwrap();
            serde_json::from_str::<serde_json::Value>(&raw).unwrap();
        }
        for name in objects::keys() {
            let raw = objects::json(&name).unwrap();
            serde_json::from_str::<serde_json::Value>(&raw).unwrap();
        }
        for name in bindings::keys() {
            let raw = bindings::json(&name).unwrap();
            serde_json::from_str::<serde_json::Value>(&raw).unwrap();
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        assert!(importer_settings::json("nope").is_err());
    }
}
