//! Trace attributes.
//!
//! [`Volume3dSpec`] is the full attribute record of a volume trace as a
//! plotting front-end hands it over, usually as JSON. Every attribute except
//! the grid itself has a default.

use serde::{Deserialize, Serialize};
use volume3d_core::{IsoRange, Result, ScalarField};
use volume3d_render::{ColorscaleSpec, Contour, LightPosition, Lighting};

/// Hover text for picked samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextLabel {
    /// One label shared by every sample.
    Single(String),
    /// One label per sample; missing entries have no label.
    PerPoint(Vec<Option<String>>),
}

impl TextLabel {
    /// Returns the label for sample `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text.as_str()),
            Self::PerPoint(texts) => texts.get(index).and_then(Option::as_deref),
        }
    }
}

/// Attributes of a volume trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume3dSpec {
    /// Trace identifier.
    pub uid: String,

    /// Axis coordinates (lengths W, H, D).
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Flattened sample values, x fastest.
    pub volume: Vec<f64>,

    /// Inclusion interval, `[min, max]`, `null` for the data extreme.
    pub isovalue: IsoRange,

    pub xcalendar: Option<String>,
    pub ycalendar: Option<String>,
    pub zcalendar: Option<String>,

    /// Explicit per-sample intensities for colormap coloring.
    pub intensity: Option<Vec<f64>>,
    /// Use the sample values as intensities when `intensity` is not given.
    pub color_by_volume: bool,
    pub vertexcolor: Option<Vec<String>>,
    pub facecolor: Option<Vec<String>>,
    /// Uniform mesh color.
    pub color: String,

    pub colorscale: ColorscaleSpec,
    pub reversescale: bool,
    pub cauto: bool,
    pub cmin: Option<f64>,
    pub cmax: Option<f64>,

    pub opacity: f32,
    pub flatshading: bool,
    pub lighting: Lighting,
    pub lightposition: LightPosition,
    pub contour: Contour,

    pub text: Option<TextLabel>,
}

impl Default for Volume3dSpec {
    fn default() -> Self {
        Self {
            uid: String::new(),
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            volume: Vec::new(),
            isovalue: IsoRange::default(),
            xcalendar: None,
            ycalendar: None,
            zcalendar: None,
            intensity: None,
            color_by_volume: true,
            vertexcolor: None,
            facecolor: None,
            color: "#444".to_string(),
            colorscale: ColorscaleSpec::default(),
            reversescale: false,
            cauto: true,
            cmin: None,
            cmax: None,
            opacity: 1.0,
            flatshading: false,
            lighting: Lighting::default(),
            lightposition: LightPosition::default(),
            contour: Contour::default(),
            text: None,
        }
    }
}

impl Volume3dSpec {
    /// Creates a spec for a grid, with every other attribute at its default.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, volume: Vec<f64>) -> Self {
        Self {
            x,
            y,
            z,
            volume,
            ..Self::default()
        }
    }

    /// Parses a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the grid attributes and builds the scalar field.
    pub fn field(&self) -> Result<ScalarField> {
        ScalarField::new(
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
            self.volume.clone(),
        )
    }

    /// Sets the inclusion interval.
    #[must_use]
    pub fn with_isovalue(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.isovalue = IsoRange::new(min, max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volume3d_core::Volume3dError;

    #[test]
    fn test_defaults_from_minimal_json() {
        let spec = Volume3dSpec::from_json(
            r#"{"x": [0, 1], "y": [0, 1], "z": [0, 1], "volume": [0, 0, 0, 0, 0, 0, 0, 10]}"#,
        )
        .unwrap();
        assert_eq!(spec.isovalue, IsoRange::default());
        assert!(spec.color_by_volume);
        assert!(spec.cauto);
        assert_eq!(spec.opacity, 1.0);
        assert_eq!(spec.color, "#444");
        assert_eq!(spec.colorscale, ColorscaleSpec::Named("Viridis".into()));
        assert_eq!(spec.field().unwrap().dims(), (2, 2, 2));
    }

    #[test]
    fn test_full_json() {
        let spec = Volume3dSpec::from_json(
            r##"{
                "uid": "abc",
                "x": [0], "y": [0], "z": [0], "volume": [1],
                "isovalue": [0.5, null],
                "vertexcolor": ["red"],
                "color_by_volume": false,
                "lighting": {"specular": 1.5},
                "contour": {"show": true, "color": "#f00"},
                "text": ["only"],
                "xcalendar": "julian"
            }"##,
        )
        .unwrap();
        assert_eq!(spec.uid, "abc");
        assert_eq!(spec.isovalue, IsoRange::new(Some(0.5), None));
        assert_eq!(spec.vertexcolor.as_deref(), Some(&["red".to_string()][..]));
        assert!(!spec.color_by_volume);
        assert_eq!(spec.lighting.specular, 1.5);
        assert_eq!(spec.lighting.ambient, 0.8);
        assert!(spec.contour.show);
        assert_eq!(spec.contour.width, 2.0);
        assert_eq!(spec.xcalendar.as_deref(), Some("julian"));
        assert_eq!(spec.text.unwrap().label(0), Some("only"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Volume3dSpec::from_json("{\"x\": \"nope\"}"),
            Err(Volume3dError::JsonError(_))
        ));
    }

    #[test]
    fn test_malformed_grid_is_rejected() {
        let spec = Volume3dSpec::new(vec![0.0, 1.0], vec![0.0], vec![0.0], vec![1.0]);
        assert!(matches!(
            spec.field(),
            Err(Volume3dError::SizeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_text_labels() {
        let single = TextLabel::Single("all".into());
        assert_eq!(single.label(0), Some("all"));
        assert_eq!(single.label(99), Some("all"));

        let per_point = TextLabel::PerPoint(vec![Some("a".into()), None]);
        assert_eq!(per_point.label(0), Some("a"));
        assert_eq!(per_point.label(1), None);
        assert_eq!(per_point.label(2), None);
    }
}
