//! Boundary-face extraction for banded scalar fields.
//!
//! Every grid sample is classified as included or excluded by an
//! [`IsoInterval`]. Three sweeps then walk the axis-aligned 2x2 windows of the
//! grid (XY, YZ and XZ planes) and triangulate each window from its included
//! corners only. Cut points are never interpolated, so the surface is blocky
//! and windows fully inside a solid region still emit faces.

#![allow(clippy::cast_possible_truncation)]

use glam::UVec3;

use crate::field::{flatten_index, Sample, ScalarField};
use crate::interval::IsoInterval;

/// Output mesh of the boundary-face extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeMesh {
    /// One sample per grid point, in flattened (x-fastest) order.
    pub samples: Vec<Sample>,
    /// Triangles as indices into `samples`. Every index refers to an included sample.
    pub triangles: Vec<UVec3>,
}

impl VolumeMesh {
    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the number of included samples.
    #[must_use]
    pub fn num_included(&self) -> usize {
        self.samples.iter().filter(|s| s.included).count()
    }

    /// Returns the scalar values of all samples in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}

/// One of the three window sweeps. Each names the plane its windows lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Windows in the XY plane, one layer per z.
    Xy,
    /// Windows in the YZ plane, one layer per x.
    Yz,
    /// Windows in the XZ plane, one layer per y.
    Xz,
}

impl Sweep {
    /// All sweeps, in the order they are emitted.
    pub const ALL: [Sweep; 3] = [Sweep::Xy, Sweep::Yz, Sweep::Xz];

    /// Calls `f` with the four corners `(a, b, c, d)` of every window of this
    /// sweep, in cyclic order around the window.
    pub fn for_each_window(self, width: usize, height: usize, depth: usize, mut f: impl FnMut([usize; 4])) {
        let index = |i, j, k| flatten_index(width, height, i, j, k);

        match self {
            Sweep::Xy => {
                for j in 1..height {
                    for i in 1..width {
                        for k in 0..depth {
                            f([
                                index(i - 1, j - 1, k),
                                index(i - 1, j, k),
                                index(i, j, k),
                                index(i, j - 1, k),
                            ]);
                        }
                    }
                }
            }
            Sweep::Yz => {
                for k in 1..depth {
                    for j in 1..height {
                        for i in 0..width {
                            f([
                                index(i, j - 1, k - 1),
                                index(i, j - 1, k),
                                index(i, j, k),
                                index(i, j, k - 1),
                            ]);
                        }
                    }
                }
            }
            Sweep::Xz => {
                for i in 1..width {
                    for k in 1..depth {
                        for j in 0..height {
                            f([
                                index(i - 1, j, k - 1),
                                index(i, j, k - 1),
                                index(i, j, k),
                                index(i - 1, j, k),
                            ]);
                        }
                    }
                }
            }
        }
    }

    /// Returns how many windows this sweep visits on a grid of the given size.
    #[must_use]
    pub fn num_windows(self, width: usize, height: usize, depth: usize) -> usize {
        let (w1, h1, d1) = (
            width.saturating_sub(1),
            height.saturating_sub(1),
            depth.saturating_sub(1),
        );
        match self {
            Sweep::Xy => w1 * h1 * depth,
            Sweep::Yz => width * h1 * d1,
            Sweep::Xz => w1 * height * d1,
        }
    }
}

/// Classifies every sample of `field` against `interval`.
#[must_use]
pub fn classify(field: &ScalarField, interval: IsoInterval) -> Vec<Sample> {
    let (width, height, depth) = field.dims();
    let mut samples = Vec::with_capacity(field.len());

    for k in 0..depth {
        for j in 0..height {
            for i in 0..width {
                let value = field.value(i, j, k);
                samples.push(Sample {
                    position: field.position(i, j, k),
                    value,
                    included: interval.contains(value),
                });
            }
        }
    }

    samples
}

/// Extracts the boundary faces of the region of `field` inside `interval`.
///
/// Runs in O(W·H·D) and recomputes everything on each call; identical inputs
/// give identical output.
#[must_use]
pub fn build_volume_mesh(field: &ScalarField, interval: IsoInterval) -> VolumeMesh {
    let samples = classify(field, interval);
    let mask: Vec<bool> = samples.iter().map(|s| s.included).collect();
    let (width, height, depth) = field.dims();

    let mut triangles = Vec::new();
    for sweep in Sweep::ALL {
        let before = triangles.len();
        sweep.for_each_window(width, height, depth, |corners| {
            triangulate_window(&mask, corners, &mut triangles);
        });
        log::debug!(
            "{sweep:?} sweep: {} windows, {} triangles",
            sweep.num_windows(width, height, depth),
            triangles.len() - before
        );
    }

    log::debug!(
        "volume mesh: {}x{}x{} grid, {} of {} samples included, {} triangles",
        width,
        height,
        depth,
        mask.iter().filter(|&&m| m).count(),
        samples.len(),
        triangles.len()
    );

    VolumeMesh { samples, triangles }
}

/// Emits the triangles for one window with corners `[a, b, c, d]`.
///
/// Four included corners give `(a, b, c)` and `(c, d, a)`. Exactly three give
/// the single triangle through them; the subsets are tested in the order
/// `abc, abd, acd, bcd` and only one of them can match. Fewer give nothing.
#[inline]
pub fn triangulate_window(mask: &[bool], [a, b, c, d]: [usize; 4], out: &mut Vec<UVec3>) {
    let tri = |p: usize, q: usize, r: usize| UVec3::new(p as u32, q as u32, r as u32);

    if mask[a] && mask[b] && mask[c] && mask[d] {
        out.push(tri(a, b, c));
        out.push(tri(c, d, a));
        return;
    }

    for [p, q, r] in [[a, b, c], [a, b, d], [a, c, d], [b, c, d]] {
        if mask[p] && mask[q] && mask[r] {
            out.push(tri(p, q, r));
            return;
        }
    }
}
