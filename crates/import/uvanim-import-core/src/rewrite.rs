//! Binding Rewriter: retargets UV-scroll user-property tracks onto the
//! material's texture-transform property.
//!
//! Source tools export the scroll animation as flat float tracks named
//! `uvRepeatAnimU/V` and `uvOffsetAnimU/V` on the animated object. The host
//! imports those as bindings against the object itself; this pass moves each
//! one onto the object's renderer component, at the object's path relative
//! to the import root, driving `material.<texProp>_ST.<axis>`.

use crate::binding::CurveBinding;
use crate::scene::ImportedObject;
use crate::settings::{resolve_texture_property, DEFAULT_TEXTURE_PROPERTY};

/// One component of the texture-transform vector, identified by the source
/// track's name prefix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UvChannel {
    RepeatU,
    RepeatV,
    OffsetU,
    OffsetV,
}

impl UvChannel {
    /// Match a binding's property name against the four recognized
    /// prefixes. Exporters may suffix the track name (curve indices,
    /// namespace mangling), so this is a prefix check, not equality.
    pub fn from_property_name(name: &str) -> Option<Self> {
        if name.starts_with("uvRepeatAnimU") {
            Some(UvChannel::RepeatU)
        } else if name.starts_with("uvRepeatAnimV") {
            Some(UvChannel::RepeatV)
        } else if name.starts_with("uvOffsetAnimU") {
            Some(UvChannel::OffsetU)
        } else if name.starts_with("uvOffsetAnimV") {
            Some(UvChannel::OffsetV)
        } else {
            None
        }
    }

    /// Component of the `_ST` vector this channel drives: scale in x/y,
    /// offset in z/w.
    pub fn axis(self) -> &'static str {
        match self {
            UvChannel::RepeatU => "x",
            UvChannel::RepeatV => "y",
            UvChannel::OffsetU => "z",
            UvChannel::OffsetV => "w",
        }
    }

    /// Full rewritten property name, e.g. `material._MainTex_ST.z`.
    pub fn material_property(self, tex_prop: &str) -> String {
        format!("material.{tex_prop}_ST.{}", self.axis())
    }
}

/// Rewrite one object's bindings.
///
/// Returns a new sequence of the same length, positionally aligned with the
/// input. Bindings whose property name matches a UV channel are retargeted
/// to the object's renderer at its root-relative path; everything else is
/// passed through untouched. When the object has no renderer at all, the
/// input is returned unchanged.
pub fn rewrite_object_bindings(
    extra_properties: &[String],
    object: &ImportedObject,
    bindings: &[CurveBinding],
    default_texture_property: &str,
) -> Vec<CurveBinding> {
    let Some(renderer) = object.renderer() else {
        return bindings.to_vec();
    };

    let tex_prop =
        resolve_texture_property(extra_properties, &object.name).unwrap_or(default_texture_property);
    let relative_path = object.path.relative_to_root();

    bindings
        .iter()
        .map(|binding| match UvChannel::from_property_name(&binding.property_name) {
            Some(channel) => {
                log::debug!(
                    "retargeting {} (type {:?}, path {:?}) -> {}",
                    binding.property_name,
                    binding.target,
                    binding.path,
                    channel.material_property(tex_prop),
                );
                CurveBinding {
                    property_name: channel.material_property(tex_prop),
                    path: relative_path.clone(),
                    target: renderer.target_component(),
                }
            }
            None => binding.clone(),
        })
        .collect()
}

/// Convenience wrapper using the stock `_MainTex` default.
pub fn rewrite_object_bindings_default(
    extra_properties: &[String],
    object: &ImportedObject,
    bindings: &[CurveBinding],
) -> Vec<CurveBinding> {
    rewrite_object_bindings(extra_properties, object, bindings, DEFAULT_TEXTURE_PROPERTY)
}
