//! uvanim-import-core: import-time UV-scroll animation retargeting
//! (engine-agnostic).
//!
//! Source 3D tools export UV scrolling as flat float tracks on the animated
//! object (`uvRepeatAnimU/V`, `uvOffsetAnimU/V`) plus optional
//! `TargetTexProp...` string attributes naming which texture property to
//! drive. This crate rewrites the host importer's curve bindings so those
//! tracks land on the object's renderer as `material.<texProp>_ST.<axis>`,
//! at the object's path relative to the import root.
//!
//! The host pipeline itself stays behind the [`hooks::ImportHooks`] seam;
//! everything here is pure, synchronous, and single-threaded.

pub mod binding;
pub mod config;
pub mod error;
pub mod hooks;
pub mod properties;
pub mod rewrite;
pub mod sanitize;
pub mod scene;
pub mod settings;

// Re-exports for consumers (adapters)
pub use binding::{CurveBinding, TargetComponent};
pub use config::Config;
pub use error::SettingsError;
pub use hooks::{run_import_pass, ImportHooks, ObjectImport, UvScrollPostprocessor};
pub use properties::{
    collect_target_texture_properties, PropertyValue, UserProperty, TARGET_TEX_PROP_PREFIX,
};
pub use rewrite::{rewrite_object_bindings, rewrite_object_bindings_default, UvChannel};
pub use sanitize::{contains_marker, sanitize_extra_properties, MARKER_SUBSTRINGS};
pub use scene::{ImportedObject, RendererKind, TransformPath};
pub use settings::{
    composite_record, export_import_settings_json, parse_import_settings_json,
    resolve_texture_property, split_composite, ImportSettings, DEFAULT_TEXTURE_PROPERTY,
    RECORD_SEPARATOR,
};
