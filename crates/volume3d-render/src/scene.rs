//! Scene and renderer traits.
//!
//! The renderer itself lives outside this workspace. Traces only talk to it
//! through [`SceneRenderer`] and the [`RenderMesh`] handles it creates.

use glam::DVec3;
use volume3d_core::pick::MeshId;

use crate::axis::{Axis, LinearAxis};
use crate::descriptor::MeshDescriptor;

/// A renderer-owned mesh.
pub trait RenderMesh {
    /// Returns the id the renderer reports in picks on this mesh.
    fn id(&self) -> MeshId;

    /// Replaces the mesh contents with `descriptor`.
    fn update(&mut self, descriptor: &MeshDescriptor);

    /// Releases renderer resources held by this mesh.
    fn dispose(&mut self);
}

/// The rendering side of a scene.
pub trait SceneRenderer {
    /// Creates a new, empty mesh in this renderer's context.
    fn create_mesh(&mut self) -> Box<dyn RenderMesh>;

    /// Registers a mesh so it is drawn.
    fn add(&mut self, mesh: MeshId);

    /// Unregisters a mesh.
    fn remove(&mut self, mesh: MeshId);
}

/// The three axes of a 3D scene.
pub struct SceneLayout {
    pub xaxis: Box<dyn Axis>,
    pub yaxis: Box<dyn Axis>,
    pub zaxis: Box<dyn Axis>,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            xaxis: Box::new(LinearAxis),
            yaxis: Box::new(LinearAxis),
            zaxis: Box::new(LinearAxis),
        }
    }
}

/// A 3D scene: axes, per-axis render scale, and the renderer.
pub struct Scene {
    pub layout: SceneLayout,
    /// Factor applied to each linearized coordinate.
    pub data_scale: DVec3,
    pub renderer: Box<dyn SceneRenderer>,
}

impl Scene {
    /// Creates a scene with linear axes and unit scale.
    pub fn new(renderer: Box<dyn SceneRenderer>) -> Self {
        Self {
            layout: SceneLayout::default(),
            data_scale: DVec3::ONE,
            renderer,
        }
    }

    /// Sets the per-axis render scale.
    #[must_use]
    pub fn with_data_scale(mut self, data_scale: DVec3) -> Self {
        self.data_scale = data_scale;
        self
    }

    /// Sets the axes.
    #[must_use]
    pub fn with_layout(mut self, layout: SceneLayout) -> Self {
        self.layout = layout;
        self
    }
}
