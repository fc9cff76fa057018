//! Lighting and contour parameters for mesh shading.
//!
//! These are the user-facing attribute records. They deserialize with defaults
//! for every missing field.

use serde::{Deserialize, Serialize};

/// Per-channel lighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Ambient light factor (0.0 - 1.0).
    pub ambient: f32,
    /// Diffuse reflection factor (0.0 - 1.0).
    pub diffuse: f32,
    /// Specular reflection intensity (0.0 - 2.0).
    pub specular: f32,
    /// Surface roughness (0.0 - 1.0); higher values spread highlights.
    pub roughness: f32,
    /// Fresnel reflectance at grazing angles (0.0 - 5.0).
    pub fresnel: f32,
    /// Vertex normals shorter than this are treated as degenerate.
    pub vertexnormalsepsilon: f32,
    /// Face normals shorter than this are treated as degenerate.
    pub facenormalsepsilon: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.8,
            diffuse: 0.8,
            specular: 0.05,
            roughness: 0.5,
            fresnel: 0.2,
            vertexnormalsepsilon: 1e-12,
            facenormalsepsilon: 1e-6,
        }
    }
}

/// Position of the scene light, in render space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for LightPosition {
    fn default() -> Self {
        Self {
            x: 1e5,
            y: 1e5,
            z: 0.0,
        }
    }
}

impl LightPosition {
    /// Returns the position as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Contour line settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contour {
    /// Whether contour lines are drawn.
    pub show: bool,
    /// Contour line color specification.
    pub color: String,
    /// Contour line width in pixels.
    pub width: f32,
}

impl Default for Contour {
    fn default() -> Self {
        Self {
            show: false,
            color: "#444".to_string(),
            width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighting_partial_deserialize() {
        let lighting: Lighting = serde_json::from_str(r#"{"ambient": 0.3}"#).unwrap();
        assert_eq!(lighting.ambient, 0.3);
        assert_eq!(lighting.diffuse, Lighting::default().diffuse);
        assert_eq!(lighting.facenormalsepsilon, 1e-6);
    }

    #[test]
    fn test_light_position_default() {
        assert_eq!(LightPosition::default().to_array(), [1e5, 1e5, 0.0]);
    }

    #[test]
    fn test_contour_default() {
        let contour = Contour::default();
        assert!(!contour.show);
        assert_eq!(contour.color, "#444");
        assert_eq!(contour.width, 2.0);
    }
}
