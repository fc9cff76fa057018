//! volume3d: turn a 3D scalar field into a renderable boundary mesh.
//!
//! A volume trace takes a rectilinear grid of scalar samples and a band of
//! values, keeps the samples inside the band, and connects them into triangles
//! along the three axis-aligned planes of the grid. The result is handed to a
//! renderer as a [`MeshDescriptor`].
//!
//! # Quick Start
//!
//! ```no_run
//! use volume3d::*;
//!
//! fn run(renderer: Box<dyn SceneRenderer>) -> Result<()> {
//!     let mut scene = Scene::new(renderer);
//!
//!     let spec = Volume3dSpec::new(
//!         vec![0.0, 1.0],
//!         vec![0.0, 1.0],
//!         vec![0.0, 1.0],
//!         vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
//!     )
//!     .with_isovalue(Some(2.0), None);
//!
//!     let trace = create(&mut scene, &spec)?;
//!     // ... later
//!     trace.dispose(&mut scene);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`calc`] resolves the inclusion interval and the colorbar range
//! - [`build_volume_mesh`] classifies samples and emits triangles
//! - [`Volume3dTrace::update`] converts to render space, resolves the coloring
//!   channel and replaces the renderer mesh
//! - [`Volume3dTrace::handle_pick`] maps a renderer pick back to data space

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod calc;
pub mod spec;
pub mod trace;

pub use calc::{calc, calc_field, CalcResult, ColorbarRange};
pub use spec::{TextLabel, Volume3dSpec};
pub use trace::{create, Volume3dTrace};

// Re-export core types
pub use volume3d_core::{
    boundary_faces::{build_volume_mesh, Sweep, VolumeMesh},
    error::{Result, Volume3dError},
    field::{Sample, ScalarField},
    interval::{IsoInterval, IsoRange},
    pick::{MeshId, Selection},
    DVec3, UVec3, Vec3, Vec4,
};

// Re-export render types
pub use volume3d_render::{
    Axis, Coloring, ColoringMode, Colorscale, ColorscaleRegistry, ColorscaleSpec, Contour,
    ContourStyle, LightPosition, Lighting, LinearAxis, LogAxis, MeshDescriptor, RenderMesh,
    Scene, SceneLayout, SceneRenderer,
};
