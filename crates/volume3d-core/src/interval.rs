//! Inclusion intervals.
//!
//! An [`IsoRange`] is what a caller supplies: each bound may be unset. It is
//! resolved once against a field into an [`IsoInterval`], and only the resolved
//! form is used downstream.

use serde::{Deserialize, Serialize};

use crate::field::ScalarField;

/// An inclusion interval whose bounds may be left unset.
///
/// Serializes as a two-element array, `[min, max]`, with `null` for unset bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[Option<f64>; 2]", into = "[Option<f64>; 2]")]
pub struct IsoRange {
    /// Lower bound; `None` resolves to the field minimum.
    pub min: Option<f64>,
    /// Upper bound; `None` resolves to the field maximum.
    pub max: Option<f64>,
}

impl IsoRange {
    /// Creates a new range.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Substitutes the field's global minimum/maximum for unset bounds.
    #[must_use]
    pub fn resolve(&self, field: &ScalarField) -> IsoInterval {
        match (self.min, self.max) {
            (Some(min), Some(max)) => IsoInterval::new(min, max),
            _ => {
                let (lo, hi) = field.value_range();
                IsoInterval::new(self.min.unwrap_or(lo), self.max.unwrap_or(hi))
            }
        }
    }
}

impl From<[Option<f64>; 2]> for IsoRange {
    fn from([min, max]: [Option<f64>; 2]) -> Self {
        Self { min, max }
    }
}

impl From<IsoRange> for [Option<f64>; 2] {
    fn from(range: IsoRange) -> Self {
        [range.min, range.max]
    }
}

/// A resolved inclusion interval `[min, max]`.
///
/// `min > max` is allowed and simply includes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoInterval {
    pub min: f64,
    pub max: f64,
}

impl IsoInterval {
    /// Creates a new interval.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// An interval including every non-NaN value.
    pub fn everything() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Returns true if `value` lies in the closed interval. NaN is never included.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if no value can be included.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.max < self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ScalarField {
        ScalarField::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0],
            vec![4.0, -3.0, 8.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_unset_bounds() {
        let interval = IsoRange::default().resolve(&field());
        assert_eq!(interval, IsoInterval::new(-3.0, 8.0));
    }

    #[test]
    fn test_resolve_partial_bounds() {
        assert_eq!(
            IsoRange::new(Some(0.5), None).resolve(&field()),
            IsoInterval::new(0.5, 8.0)
        );
        assert_eq!(
            IsoRange::new(None, Some(2.0)).resolve(&field()),
            IsoInterval::new(-3.0, 2.0)
        );
    }

    #[test]
    fn test_explicit_bounds_are_kept() {
        let interval = IsoRange::new(Some(100.0), Some(-100.0)).resolve(&field());
        assert_eq!(interval, IsoInterval::new(100.0, -100.0));
        assert!(interval.is_inverted());
    }

    #[test]
    fn test_contains_is_closed() {
        let interval = IsoInterval::new(1.0, 2.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(2.0));
        assert!(!interval.contains(0.999));
        assert!(!interval.contains(f64::NAN));
        assert!(IsoInterval::everything().contains(f64::MAX));
    }

    #[test]
    fn test_serde_array_form() {
        let range: IsoRange = serde_json::from_str("[5, null]").unwrap();
        assert_eq!(range, IsoRange::new(Some(5.0), None));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[5.0,null]");
    }
}
