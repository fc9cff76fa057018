//! Picking and selection.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec3;

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one renderer-owned mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(u64);

impl MeshId {
    /// Wraps a raw id chosen by the renderer.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocates a process-unique id.
    pub fn next() -> Self {
        Self(NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

/// A pick reported by the renderer, filled in by the trace that owns the mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The mesh that was hit.
    pub object: MeshId,

    /// The vertex index reported by the renderer.
    pub data_index: usize,

    /// The resolved sample index, set once a trace claims the selection.
    pub index: Option<usize>,

    /// Data-space coordinate of the picked sample (before axis scaling).
    pub trace_coordinate: Option<DVec3>,

    /// Text label of the picked sample, if the trace has one.
    pub text_label: Option<String>,
}

impl Selection {
    /// Creates an unresolved selection.
    pub fn new(object: MeshId, data_index: usize) -> Self {
        Self {
            object,
            data_index,
            index: None,
            trace_coordinate: None,
            text_label: None,
        }
    }

    /// Returns true once a trace has resolved this selection.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_ids_are_unique() {
        let a = MeshId::next();
        let b = MeshId::next();
        assert_ne!(a, b);
        assert_eq!(MeshId::new(7).raw(), 7);
        assert_eq!(MeshId::new(7).to_string(), "mesh#7");
    }

    #[test]
    fn test_new_selection_is_unresolved() {
        let selection = Selection::new(MeshId::new(3), 12);
        assert_eq!(selection.data_index, 12);
        assert!(!selection.is_resolved());
        assert!(selection.trace_coordinate.is_none());
        assert!(selection.text_label.is_none());
    }
}
