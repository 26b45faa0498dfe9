//! Read-only view of one imported scene-graph node.
//!
//! The host's transient import hierarchy is not modeled here; each hook
//! receives a flat `ImportedObject` snapshot carrying exactly what the
//! rewrite needs: the object's name, its root-first transform path, and the
//! renderer components attached to it.

use serde::{Deserialize, Serialize};

use crate::binding::TargetComponent;

/// Renderer component kinds the rewriter can retarget bindings onto.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RendererKind {
    MeshRenderer,
    SkinnedMeshRenderer,
}

impl RendererKind {
    pub fn target_component(self) -> TargetComponent {
        match self {
            RendererKind::MeshRenderer => TargetComponent::MeshRenderer,
            RendererKind::SkinnedMeshRenderer => TargetComponent::SkinnedMeshRenderer,
        }
    }
}

/// Transform path from the import root down to the object, root-first and
/// including the object itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPath {
    pub segments: Vec<String>,
}

impl TransformPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Path relative to the topmost ancestor: every segment after the root,
    /// '/'-joined. Empty string when the object is the root itself.
    pub fn relative_to_root(&self) -> String {
        self.segments
            .iter()
            .skip(1)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// One imported object as seen by the post-import hooks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportedObject {
    pub name: String,
    pub path: TransformPath,
    /// Renderer components attached to the object, in attachment order.
    #[serde(default)]
    pub renderers: Vec<RendererKind>,
}

impl ImportedObject {
    pub fn new(name: impl Into<String>, path: TransformPath, renderers: Vec<RendererKind>) -> Self {
        Self {
            name: name.into(),
            path,
            renderers,
        }
    }

    /// Renderer to retarget bindings onto: a plain mesh renderer when one is
    /// attached, otherwise a skinned mesh renderer, otherwise `None` (the
    /// rewriter skips the object entirely).
    pub fn renderer(&self) -> Option<RendererKind> {
        if self.renderers.contains(&RendererKind::MeshRenderer) {
            Some(RendererKind::MeshRenderer)
        } else if self.renderers.contains(&RendererKind::SkinnedMeshRenderer) {
            Some(RendererKind::SkinnedMeshRenderer)
        } else {
            None
        }
    }
}
