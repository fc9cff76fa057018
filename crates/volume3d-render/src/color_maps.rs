//! Colorscale system.
//!
//! A [`Colorscale`] is an ordered list of color stops over `[0, 1]`. Traces
//! refer to one either by name (looked up in a [`ColorscaleRegistry`]) or by an
//! explicit `[[stop, color], ...]` list.

#![allow(clippy::cast_precision_loss)]

use std::collections::HashMap;

use glam::Vec4;
use serde::{Deserialize, Serialize};
use volume3d_core::error::{Result, Volume3dError};

use crate::color::{parse_color, rgb8};

/// A single colorscale stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub position: f32,
    /// RGBA color at this position.
    pub color: Vec4,
}

/// A colorscale mapping normalized values to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorscale {
    /// Colorscale name (empty for inline stop lists).
    pub name: String,
    stops: Vec<ColorStop>,
}

impl Colorscale {
    /// Creates a colorscale from explicit stops.
    ///
    /// Stops must be non-decreasing, start at 0 and end at 1.
    pub fn new(name: impl Into<String>, stops: Vec<ColorStop>) -> Result<Self> {
        let invalid = |msg: &str| Err(Volume3dError::InvalidColorscale(msg.to_string()));

        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return invalid("no stops");
        };
        if stops.len() < 2 {
            return invalid("at least two stops are required");
        }
        if first.position != 0.0 || last.position != 1.0 {
            return invalid("stops must start at 0 and end at 1");
        }
        if stops.windows(2).any(|w| w[1].position < w[0].position) {
            return invalid("stops must be in ascending order");
        }

        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    /// Creates a colorscale from evenly spaced colors.
    pub fn evenly_spaced(name: impl Into<String>, colors: &[Vec4]) -> Self {
        let n = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                position: i as f32 / n,
                color,
            })
            .collect();
        Self {
            name: name.into(),
            stops,
        }
    }

    /// Returns the stops.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns the same colorscale running from 1 to 0.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let stops = self
            .stops
            .iter()
            .rev()
            .map(|s| ColorStop {
                position: 1.0 - s.position,
                color: s.color,
            })
            .collect();
        Self {
            name: self.name.clone(),
            stops,
        }
    }

    /// Samples the colorscale at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec4 {
        let t = t.clamp(0.0, 1.0);

        let Some(upper) = self.stops.iter().position(|s| s.position >= t) else {
            return self.stops.last().map_or(Vec4::ZERO, |s| s.color);
        };
        if upper == 0 {
            return self.stops[0].color;
        }

        let (lo, hi) = (self.stops[upper - 1], self.stops[upper]);
        let span = hi.position - lo.position;
        if span <= f32::EPSILON {
            return hi.color;
        }
        lo.color.lerp(hi.color, (t - lo.position) / span)
    }
}

/// How a trace names its colorscale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorscaleSpec {
    /// A registered colorscale name (case-insensitive).
    Named(String),
    /// Explicit `[stop, color]` pairs.
    Stops(Vec<(f32, String)>),
}

impl Default for ColorscaleSpec {
    fn default() -> Self {
        Self::Named("Viridis".to_string())
    }
}

impl ColorscaleSpec {
    /// Resolves this specification to a concrete colorscale.
    pub fn resolve(&self, registry: &ColorscaleRegistry) -> Result<Colorscale> {
        match self {
            Self::Named(name) => registry
                .get(name)
                .cloned()
                .ok_or_else(|| Volume3dError::UnknownColorscale(name.clone())),
            Self::Stops(pairs) => {
                let stops = pairs
                    .iter()
                    .map(|(position, color)| {
                        Ok(ColorStop {
                            position: *position,
                            color: parse_color(color)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Colorscale::new(String::new(), stops)
            }
        }
    }
}

/// Registry for named colorscales.
#[derive(Default)]
pub struct ColorscaleRegistry {
    scales: HashMap<String, Colorscale>,
}

impl ColorscaleRegistry {
    /// Creates a new registry with the built-in colorscales.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Viridis colorscale
        self.register(Colorscale::evenly_spaced(
            "Viridis",
            &[
                Vec4::new(0.267, 0.004, 0.329, 1.0),
                Vec4::new(0.282, 0.140, 0.457, 1.0),
                Vec4::new(0.253, 0.265, 0.529, 1.0),
                Vec4::new(0.206, 0.371, 0.553, 1.0),
                Vec4::new(0.163, 0.471, 0.558, 1.0),
                Vec4::new(0.127, 0.566, 0.550, 1.0),
                Vec4::new(0.134, 0.658, 0.517, 1.0),
                Vec4::new(0.266, 0.749, 0.440, 1.0),
                Vec4::new(0.477, 0.821, 0.318, 1.0),
                Vec4::new(0.741, 0.873, 0.150, 1.0),
                Vec4::new(0.993, 0.906, 0.144, 1.0),
            ],
        ));

        // Rainbow colorscale
        self.register(Colorscale::evenly_spaced(
            "Rainbow",
            &[
                Vec4::new(0.5, 0.0, 1.0, 1.0),
                Vec4::new(0.0, 0.0, 1.0, 1.0),
                Vec4::new(0.0, 1.0, 1.0, 1.0),
                Vec4::new(0.0, 1.0, 0.0, 1.0),
                Vec4::new(1.0, 1.0, 0.0, 1.0),
                Vec4::new(1.0, 0.0, 0.0, 1.0),
            ],
        ));

        let tables: &[(&str, &[(f32, [u8; 3])])] = &[
            ("Greys", &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])]),
            (
                "Blues",
                &[
                    (0.0, [5, 10, 172]),
                    (0.35, [40, 60, 190]),
                    (0.5, [70, 100, 245]),
                    (0.6, [90, 120, 245]),
                    (0.7, [106, 137, 247]),
                    (1.0, [220, 220, 220]),
                ],
            ),
            (
                "Reds",
                &[
                    (0.0, [220, 220, 220]),
                    (0.2, [245, 195, 157]),
                    (0.4, [245, 160, 105]),
                    (1.0, [178, 10, 28]),
                ],
            ),
            (
                "RdBu",
                &[
                    (0.0, [5, 10, 172]),
                    (0.35, [106, 137, 247]),
                    (0.5, [190, 190, 190]),
                    (0.6, [220, 170, 132]),
                    (0.7, [230, 145, 90]),
                    (1.0, [178, 10, 28]),
                ],
            ),
            (
                "Jet",
                &[
                    (0.0, [0, 0, 131]),
                    (0.125, [0, 60, 170]),
                    (0.375, [5, 255, 255]),
                    (0.625, [255, 255, 0]),
                    (0.875, [250, 0, 0]),
                    (1.0, [128, 0, 0]),
                ],
            ),
            (
                "Hot",
                &[
                    (0.0, [0, 0, 0]),
                    (0.3, [230, 0, 0]),
                    (0.6, [255, 210, 0]),
                    (1.0, [255, 255, 255]),
                ],
            ),
            (
                "Portland",
                &[
                    (0.0, [12, 51, 131]),
                    (0.25, [10, 136, 186]),
                    (0.5, [242, 211, 56]),
                    (0.75, [242, 143, 56]),
                    (1.0, [217, 30, 30]),
                ],
            ),
            (
                "Electric",
                &[
                    (0.0, [0, 0, 0]),
                    (0.15, [30, 0, 100]),
                    (0.4, [120, 0, 100]),
                    (0.6, [160, 90, 0]),
                    (0.8, [230, 200, 0]),
                    (1.0, [255, 250, 220]),
                ],
            ),
        ];

        for &(name, table) in tables {
            self.register(Colorscale {
                name: name.to_string(),
                stops: table
                    .iter()
                    .map(|&(position, [r, g, b])| ColorStop {
                        position,
                        color: rgb8(r, g, b),
                    })
                    .collect(),
            });
        }
    }

    /// Registers a colorscale under its (case-insensitive) name.
    pub fn register(&mut self, scale: Colorscale) {
        self.scales.insert(scale.name.to_ascii_lowercase(), scale);
    }

    /// Gets a colorscale by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Colorscale> {
        self.scales.get(&name.to_ascii_lowercase())
    }

    /// Returns all colorscale names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.values().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stop(position: f32, color: Vec4) -> ColorStop {
        ColorStop { position, color }
    }

    #[test]
    fn test_registry_defaults() {
        let registry = ColorscaleRegistry::new();
        assert!(registry.get("viridis").is_some());
        assert!(registry.get("VIRIDIS").is_some());
        assert!(registry.get("Jet").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names().count(), 10);
        for name in registry.names() {
            let scale = registry.get(name).unwrap();
            assert_eq!(scale.stops().first().unwrap().position, 0.0);
            assert_eq!(scale.stops().last().unwrap().position, 1.0);
        }
    }

    #[test]
    fn test_sample_interpolates() {
        let scale = Colorscale::new(
            "bw",
            vec![stop(0.0, Vec4::ZERO), stop(1.0, Vec4::ONE)],
        )
        .unwrap();
        assert_eq!(scale.sample(0.0), Vec4::ZERO);
        assert_eq!(scale.sample(1.0), Vec4::ONE);
        assert!(scale.sample(0.25).abs_diff_eq(Vec4::splat(0.25), 1e-6));
        assert_eq!(scale.sample(-3.0), Vec4::ZERO);
        assert_eq!(scale.sample(7.0), Vec4::ONE);
    }

    #[test]
    fn test_reversed() {
        let registry = ColorscaleRegistry::new();
        let greys = registry.get("Greys").unwrap();
        let reversed = greys.reversed();
        assert_eq!(reversed.sample(0.0), greys.sample(1.0));
        assert_eq!(reversed.stops()[0].position, 0.0);
        assert_eq!(reversed.stops()[1].position, 1.0);
    }

    #[test]
    fn test_new_rejects_malformed_stops() {
        assert!(Colorscale::new("empty", vec![]).is_err());
        assert!(Colorscale::new("one", vec![stop(0.0, Vec4::ZERO)]).is_err());
        assert!(Colorscale::new(
            "short",
            vec![stop(0.0, Vec4::ZERO), stop(0.9, Vec4::ONE)]
        )
        .is_err());
        assert!(Colorscale::new(
            "unordered",
            vec![
                stop(0.0, Vec4::ZERO),
                stop(0.7, Vec4::ONE),
                stop(0.3, Vec4::ONE),
                stop(1.0, Vec4::ONE)
            ]
        )
        .is_err());
    }

    #[test]
    fn test_spec_resolution() {
        let registry = ColorscaleRegistry::new();

        let named: ColorscaleSpec = serde_json::from_str("\"hot\"").unwrap();
        assert_eq!(named.resolve(&registry).unwrap().name, "Hot");

        let inline: ColorscaleSpec =
            serde_json::from_str(r##"[[0, "#000"], [1, "rgb(255, 255, 255)"]]"##).unwrap();
        let scale = inline.resolve(&registry).unwrap();
        assert_eq!(scale.stops().len(), 2);
        assert_eq!(scale.sample(1.0), Vec4::ONE);

        let unknown = ColorscaleSpec::Named("Plasma2".into());
        assert!(matches!(
            unknown.resolve(&registry),
            Err(Volume3dError::UnknownColorscale(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_samples_stay_in_unit_range(t in -2.0f32..3.0) {
            let registry = ColorscaleRegistry::new();
            for name in ["Viridis", "Jet", "RdBu", "Electric"] {
                let color = registry.get(name).unwrap().sample(t);
                prop_assert!(color.min_element() >= 0.0);
                prop_assert!(color.max_element() <= 1.0 + 1e-6);
            }
        }
    }
}
