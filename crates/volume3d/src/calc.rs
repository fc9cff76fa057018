//! Calc step: resolve the inclusion interval and the colorbar range.

use volume3d_core::{IsoInterval, Result, ScalarField};

use crate::spec::Volume3dSpec;

/// The color axis range published for colorbars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorbarRange {
    /// Attribute prefix of the color axis (`c` for `cmin` / `cmax`).
    pub key: char,
    pub cmin: f64,
    pub cmax: f64,
}

/// Output of [`calc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcResult {
    /// The resolved inclusion interval.
    pub interval: IsoInterval,
    /// Colorbar range derived from `interval`.
    pub colorbar: ColorbarRange,
}

/// Resolves the inclusion interval of `spec` and derives its colorbar range.
pub fn calc(spec: &Volume3dSpec) -> Result<CalcResult> {
    Ok(calc_field(spec, &spec.field()?))
}

/// Like [`calc`], for a field that has already been built from `spec`.
///
/// The published colorbar is computed from exactly the interval used for
/// inclusion; nothing is recomputed from the data.
#[must_use]
pub fn calc_field(spec: &Volume3dSpec, field: &ScalarField) -> CalcResult {
    let interval = spec.isovalue.resolve(field);
    let (cmin, cmax) = colorscale_range(
        &[interval.min, interval.max],
        spec.cauto,
        spec.cmin,
        spec.cmax,
    );

    CalcResult {
        interval,
        colorbar: ColorbarRange {
            key: 'c',
            cmin,
            cmax,
        },
    }
}

/// Colorscale range calculation.
///
/// With `auto` set, or when a bound is missing, bounds come from `values`.
/// A zero-width result is widened by 0.5 on each side.
fn colorscale_range(values: &[f64], auto: bool, min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (mut cmin, mut cmax) = match (auto, min, max) {
        (false, Some(min), Some(max)) => (min, max),
        (false, min, max) => (min.unwrap_or(lo), max.unwrap_or(hi)),
        (true, _, _) => (lo, hi),
    };

    if cmin == cmax {
        cmin -= 0.5;
        cmax += 0.5;
    }
    (cmin, cmax)
}
