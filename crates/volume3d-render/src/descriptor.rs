//! Mesh descriptors handed to the renderer.

use glam::Vec4;

use crate::color_maps::Colorscale;
use crate::lighting::Lighting;

/// The coloring channel of a mesh. Exactly one is active per descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Coloring {
    /// Per-vertex intensities mapped through a colorscale.
    Colormap {
        /// One intensity per vertex.
        intensity: Vec<f32>,
        /// Intensities mapped to the ends of the colorscale.
        bounds: [f32; 2],
        colorscale: Colorscale,
    },
    /// One explicit color per vertex.
    VertexColors(Vec<Vec4>),
    /// One explicit color per triangle.
    FaceColors(Vec<Vec4>),
    /// A single color for the whole mesh.
    Uniform(Vec4),
}

/// Discriminant of [`Coloring`], for callers that only need the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColoringMode {
    Colormap,
    VertexColors,
    FaceColors,
    Uniform,
}

impl Coloring {
    /// Returns which channel this is.
    #[must_use]
    pub fn mode(&self) -> ColoringMode {
        match self {
            Self::Colormap { .. } => ColoringMode::Colormap,
            Self::VertexColors(_) => ColoringMode::VertexColors,
            Self::FaceColors(_) => ColoringMode::FaceColors,
            Self::Uniform(_) => ColoringMode::Uniform,
        }
    }

    /// Resolves the color of vertex `vertex` of triangle `face`.
    ///
    /// Colormap intensities are normalized against `bounds` before sampling.
    #[must_use]
    pub fn color_at(&self, face: usize, vertex: usize) -> Option<Vec4> {
        match self {
            Self::Colormap {
                intensity,
                bounds: [lo, hi],
                colorscale,
            } => {
                let span = hi - lo;
                let span = if span.abs() < 1e-10 { 1.0 } else { span };
                intensity
                    .get(vertex)
                    .map(|&v| colorscale.sample((v - lo) / span))
            }
            Self::VertexColors(colors) => colors.get(vertex).copied(),
            Self::FaceColors(colors) => colors.get(face).copied(),
            Self::Uniform(color) => Some(*color),
        }
    }
}

/// Contour line parameters as passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourStyle {
    pub enable: bool,
    pub color: [f32; 3],
    pub width: f32,
}

/// Everything the renderer needs to draw one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    /// Render-space vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Triangles as vertex index triples.
    pub cells: Vec<[u32; 3]>,
    pub coloring: Coloring,
    pub light_position: [f32; 3],
    pub lighting: Lighting,
    pub opacity: f32,
    pub contour: ContourStyle,
    /// Use per-face normals (flat shading) instead of per-vertex normals.
    pub use_facet_normals: bool,
}

impl MeshDescriptor {
    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.cells.len()
    }

    /// Position data as raw bytes, for vertex buffer upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index data as raw bytes, for index buffer upload.
    #[must_use]
    pub fn cell_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_maps::ColorscaleRegistry;

    fn descriptor(coloring: Coloring) -> MeshDescriptor {
        MeshDescriptor {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            cells: vec![[0, 1, 2]],
            coloring,
            light_position: [1e5, 1e5, 0.0],
            lighting: Lighting::default(),
            opacity: 1.0,
            contour: ContourStyle {
                enable: false,
                color: [0.0; 3],
                width: 2.0,
            },
            use_facet_normals: false,
        }
    }

    #[test]
    fn test_byte_views() {
        let d = descriptor(Coloring::Uniform(Vec4::ONE));
        assert_eq!(d.num_vertices(), 3);
        assert_eq!(d.num_triangles(), 1);
        assert_eq!(d.position_bytes().len(), 3 * 3 * 4);
        assert_eq!(d.cell_bytes().len(), 3 * 4);
        assert_eq!(&d.cell_bytes()[4..8], &1u32.to_ne_bytes());
    }

    #[test]
    fn test_color_at_per_mode() {
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(Coloring::Uniform(red).color_at(5, 9), Some(red));
        assert_eq!(
            Coloring::VertexColors(vec![Vec4::ZERO, red]).color_at(0, 1),
            Some(red)
        );
        assert_eq!(Coloring::FaceColors(vec![red]).color_at(0, 2), Some(red));
        assert_eq!(Coloring::FaceColors(vec![red]).color_at(1, 0), None);

        let registry = ColorscaleRegistry::new();
        let greys = registry.get("Greys").unwrap().clone();
        let coloring = Coloring::Colormap {
            intensity: vec![0.0, 5.0, 10.0],
            bounds: [0.0, 10.0],
            colorscale: greys,
        };
        assert_eq!(coloring.mode(), ColoringMode::Colormap);
        assert_eq!(coloring.color_at(0, 0), Some(Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(coloring.color_at(0, 2), Some(Vec4::ONE));
        assert!(coloring
            .color_at(0, 1)
            .unwrap()
            .abs_diff_eq(Vec4::new(0.5, 0.5, 0.5, 1.0), 1e-6));
    }
}
