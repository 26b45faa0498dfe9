//! Host callback contract and the stock postprocessor.
//!
//! The host import pipeline drives three hooks per asset, in order:
//! `on_pre_import` once, then for each imported object
//! `on_object_imported_with_custom_properties` followed by
//! `on_object_imported_with_animated_properties`. All hooks run
//! synchronously on one thread within a single import operation; the only
//! shared state is the per-asset [`ImportSettings`] value.

use crate::binding::CurveBinding;
use crate::config::Config;
use crate::properties::{collect_target_texture_properties, UserProperty};
use crate::rewrite::rewrite_object_bindings;
use crate::sanitize::sanitize_extra_properties;
use crate::scene::ImportedObject;
use crate::settings::ImportSettings;

/// Callbacks a host adapter registers with its import pipeline.
pub trait ImportHooks {
    /// Runs once per import, before any object-level hooks.
    fn on_pre_import(&mut self, settings: &mut ImportSettings);

    /// Runs once per imported object carrying custom properties.
    fn on_object_imported_with_custom_properties(
        &mut self,
        settings: &mut ImportSettings,
        object: &ImportedObject,
        properties: &[UserProperty],
    );

    /// Runs once per imported object carrying animated user properties,
    /// after the custom-property hook for the same object. Returns the
    /// rewritten binding sequence (same length, positionally aligned); the
    /// host commits it back into the pipeline.
    fn on_object_imported_with_animated_properties(
        &mut self,
        settings: &ImportSettings,
        object: &ImportedObject,
        bindings: &[CurveBinding],
    ) -> Vec<CurveBinding>;
}

/// Stock postprocessor: sanitize stale records, collect `TargetTexProp`
/// redirects, retarget UV-scroll bindings.
#[derive(Debug, Default)]
pub struct UvScrollPostprocessor {
    config: Config,
}

impl UvScrollPostprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ImportHooks for UvScrollPostprocessor {
    fn on_pre_import(&mut self, settings: &mut ImportSettings) {
        let removed = sanitize_extra_properties(settings);
        if removed > 0 {
            log::debug!("sanitized {removed} stale texture record(s)");
        }
    }

    fn on_object_imported_with_custom_properties(
        &mut self,
        settings: &mut ImportSettings,
        object: &ImportedObject,
        properties: &[UserProperty],
    ) {
        collect_target_texture_properties(settings, &object.name, properties);
    }

    fn on_object_imported_with_animated_properties(
        &mut self,
        settings: &ImportSettings,
        object: &ImportedObject,
        bindings: &[CurveBinding],
    ) -> Vec<CurveBinding> {
        rewrite_object_bindings(
            &settings.extra_properties,
            object,
            bindings,
            &self.config.default_texture_property,
        )
    }
}

/// One imported object with everything the per-object hooks consume.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectImport {
    pub object: ImportedObject,
    pub properties: Vec<UserProperty>,
    pub bindings: Vec<CurveBinding>,
}

/// Drive a full import pass in the host-dictated hook order, committing
/// rewritten bindings back into each [`ObjectImport`]. Stands in for the
/// host pipeline in tests and headless tools.
pub fn run_import_pass(
    hooks: &mut dyn ImportHooks,
    settings: &mut ImportSettings,
    objects: &mut [ObjectImport],
) {
    hooks.on_pre_import(settings);
    for import in objects.iter_mut() {
        hooks.on_object_imported_with_custom_properties(
            settings,
            &import.object,
            &import.properties,
        );
    }
    for import in objects.iter_mut() {
        import.bindings = hooks.on_object_imported_with_animated_properties(
            settings,
            &import.object,
            &import.bindings,
        );
    }
}
