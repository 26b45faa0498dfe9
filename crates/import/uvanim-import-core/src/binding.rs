//! Curve-binding records produced by the host importer.
//!
//! The host hands the core one `Vec<CurveBinding>` per imported object, one
//! row per animated property. The rewriter consumes such a sequence and
//! returns a new sequence of the same length (positionally aligned); the
//! host adapter is responsible for committing the result back into the
//! import pipeline.

use serde::{Deserialize, Serialize};

/// Component-type tag a binding targets on the imported object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetComponent {
    Transform,
    MeshRenderer,
    SkinnedMeshRenderer,
    /// Any host component kind the core has no special handling for.
    Other(String),
}

/// One animated property on one imported object.
///
/// `path` is the object path relative to the import root ('/'-separated,
/// empty for the root itself).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveBinding {
    #[serde(rename = "propertyName")]
    pub property_name: String,
    pub path: String,
    pub target: TargetComponent,
}

impl CurveBinding {
    pub fn new(
        property_name: impl Into<String>,
        path: impl Into<String>,
        target: TargetComponent,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            path: path.into(),
            target,
        }
    }
}
