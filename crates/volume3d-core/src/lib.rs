//! Core abstractions for volume3d-rs.
//!
//! This crate provides the data model and the mesh builder used throughout volume3d-rs:
//! - [`ScalarField`] for rectilinear grids of scalar samples
//! - [`IsoRange`] / [`IsoInterval`] for the band of values considered "inside"
//! - [`build_volume_mesh`] for boundary-face extraction
//! - [`Selection`] for mapping renderer picks back to samples

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod boundary_faces;
pub mod error;
pub mod field;
pub mod interval;
pub mod pick;

pub use boundary_faces::{build_volume_mesh, classify, triangulate_window, Sweep, VolumeMesh};
pub use error::{Result, Volume3dError};
pub use field::{flatten_index, Sample, ScalarField};
pub use interval::{IsoInterval, IsoRange};
pub use pick::{MeshId, Selection};

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3, Vec3, Vec4};
