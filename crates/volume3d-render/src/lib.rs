//! Renderer boundary for volume3d-rs.
//!
//! This crate provides what a trace needs to talk to a renderer:
//! - [`MeshDescriptor`] and its [`Coloring`] channel
//! - Color parsing and [`Colorscale`]s
//! - [`Lighting`] and contour parameters
//! - The [`Axis`], [`RenderMesh`] and [`SceneRenderer`] traits

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod axis;
pub mod color;
pub mod color_maps;
pub mod descriptor;
pub mod lighting;
pub mod scene;

pub use axis::{to_render_coord, Axis, LinearAxis, LogAxis};
pub use color::{parse_color, parse_color_array, rgb8, to_rgb};
pub use color_maps::{ColorStop, Colorscale, ColorscaleRegistry, ColorscaleSpec};
pub use descriptor::{Coloring, ColoringMode, ContourStyle, MeshDescriptor};
pub use lighting::{Contour, LightPosition, Lighting};
pub use scene::{RenderMesh, Scene, SceneLayout, SceneRenderer};
