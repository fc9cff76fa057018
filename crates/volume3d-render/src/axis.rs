//! Data-to-render axis conversion.

/// Converts raw data coordinates along one axis into a linear render-space scalar.
pub trait Axis {
    /// Converts `value` into the axis' linearized space.
    ///
    /// `calendar` names the calendar system of date-valued data; axes without
    /// date handling ignore it.
    fn d2l(&self, value: f64, calendar: Option<&str>) -> f64;
}

/// A linear axis: data values are already linear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearAxis;

impl Axis for LinearAxis {
    fn d2l(&self, value: f64, _calendar: Option<&str>) -> f64 {
        value
    }
}

/// A base-10 logarithmic axis. Non-positive values have no position and map to NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogAxis;

impl Axis for LogAxis {
    fn d2l(&self, value: f64, _calendar: Option<&str>) -> f64 {
        if value > 0.0 {
            value.log10()
        } else {
            f64::NAN
        }
    }
}

/// Converts one data coordinate to render space: linearize, then scale.
#[inline]
pub fn to_render_coord(axis: &dyn Axis, value: f64, scale: f64, calendar: Option<&str>) -> f64 {
    axis.d2l(value, calendar) * scale
}
