//! Volume traces: the adapter between a scalar field and a renderer mesh.
//!
//! A [`Volume3dTrace`] owns exactly one renderer mesh. Each [`update`] rebuilds
//! the boundary-face mesh from scratch, converts it to render space and
//! replaces the renderer's copy. The trace keeps the samples of the last
//! update for pick resolution.
//!
//! [`update`]: Volume3dTrace::update

#![allow(clippy::cast_possible_truncation)]

use volume3d_core::{build_volume_mesh, MeshId, Result, Selection, Volume3dError, VolumeMesh};
use volume3d_render::{
    parse_color, parse_color_array, to_render_coord, to_rgb, Coloring, ColorscaleRegistry,
    ContourStyle, MeshDescriptor, RenderMesh, Scene,
};

use crate::calc::{calc_field, ColorbarRange};
use crate::spec::{TextLabel, Volume3dSpec};

/// Representative color used while the mesh is colormap-driven.
const COLORMAP_SWATCH: &str = "#fff";

/// A volume trace registered with a scene.
pub struct Volume3dTrace {
    uid: String,
    mesh: Box<dyn RenderMesh>,
    colorscales: ColorscaleRegistry,
    color: String,
    show_contour: bool,
    data: Option<VolumeMesh>,
    text: Option<TextLabel>,
}

/// Creates a trace for `spec`, uploads its first mesh and registers it with `scene`.
pub fn create(scene: &mut Scene, spec: &Volume3dSpec) -> Result<Volume3dTrace> {
    let mesh = scene.renderer.create_mesh();
    let mut trace = Volume3dTrace {
        uid: spec.uid.clone(),
        mesh,
        colorscales: ColorscaleRegistry::new(),
        color: COLORMAP_SWATCH.to_string(),
        show_contour: false,
        data: None,
        text: None,
    };

    if let Err(err) = trace.update(scene, spec) {
        trace.mesh.dispose();
        return Err(err);
    }
    scene.renderer.add(trace.mesh.id());
    log::info!("created volume trace '{}' on {}", trace.uid, trace.mesh.id());
    Ok(trace)
}

impl Volume3dTrace {
    /// Returns the trace identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the id of the renderer mesh owned by this trace.
    pub fn mesh_id(&self) -> MeshId {
        self.mesh.id()
    }

    /// Returns the color used for legend and colorbar swatches.
    pub fn representative_color(&self) -> &str {
        &self.color
    }

    /// Returns whether contour lines are enabled.
    pub fn show_contour(&self) -> bool {
        self.show_contour
    }

    /// Returns the mesh built by the last successful update.
    pub fn volume_mesh(&self) -> Option<&VolumeMesh> {
        self.data.as_ref()
    }

    /// Gives mutable access to the colorscale registry, e.g. to register custom scales.
    pub fn colorscales_mut(&mut self) -> &mut ColorscaleRegistry {
        &mut self.colorscales
    }

    /// Rebuilds the mesh from `spec` and replaces the renderer's copy.
    ///
    /// On error nothing is sent to the renderer and the previous state is kept.
    pub fn update(&mut self, scene: &Scene, spec: &Volume3dSpec) -> Result<()> {
        let field = spec.field()?;
        let calc = calc_field(spec, &field);
        let volume_mesh = build_volume_mesh(&field, calc.interval);

        let scale = scene.data_scale;
        let (xaxis, yaxis, zaxis) = (
            scene.layout.xaxis.as_ref(),
            scene.layout.yaxis.as_ref(),
            scene.layout.zaxis.as_ref(),
        );
        let (xcal, ycal, zcal) = (
            spec.xcalendar.as_deref(),
            spec.ycalendar.as_deref(),
            spec.zcalendar.as_deref(),
        );
        let positions = volume_mesh
            .samples
            .iter()
            .map(|s| {
                [
                    to_render_coord(xaxis, s.position.x, scale.x, xcal) as f32,
                    to_render_coord(yaxis, s.position.y, scale.y, ycal) as f32,
                    to_render_coord(zaxis, s.position.z, scale.z, zcal) as f32,
                ]
            })
            .collect();
        let cells = volume_mesh.triangles.iter().map(|t| t.to_array()).collect();

        let (coloring, color) = self.resolve_coloring(spec, &volume_mesh, &calc.colorbar)?;

        let descriptor = MeshDescriptor {
            positions,
            cells,
            coloring,
            light_position: spec.lightposition.to_array(),
            lighting: spec.lighting,
            opacity: spec.opacity,
            contour: ContourStyle {
                enable: spec.contour.show,
                color: to_rgb(parse_color(&spec.contour.color)?),
                width: spec.contour.width,
            },
            use_facet_normals: spec.flatshading,
        };

        self.mesh.update(&descriptor);
        log::debug!(
            "updated volume trace '{}': {} vertices, {} triangles, {:?} coloring",
            self.uid,
            descriptor.num_vertices(),
            descriptor.num_triangles(),
            descriptor.coloring.mode()
        );

        self.color = color;
        self.show_contour = spec.contour.show;
        self.data = Some(volume_mesh);
        self.text.clone_from(&spec.text);
        Ok(())
    }

    /// Picks the coloring channel: intensity, then vertex colors, then face
    /// colors, then the uniform color. Returns it with the swatch color.
    fn resolve_coloring(
        &self,
        spec: &Volume3dSpec,
        mesh: &VolumeMesh,
        colorbar: &ColorbarRange,
    ) -> Result<(Coloring, String)> {
        let num_samples = mesh.samples.len();

        let intensity: Option<Vec<f32>> = match &spec.intensity {
            Some(values) if !values.is_empty() => {
                if values.len() != num_samples {
                    return Err(Volume3dError::SizeMismatch {
                        expected: num_samples,
                        actual: values.len(),
                    });
                }
                Some(values.iter().map(|&v| v as f32).collect())
            }
            _ if spec.color_by_volume => Some(mesh.values().map(|v| v as f32).collect()),
            _ => None,
        };

        if let Some(intensity) = intensity {
            let mut colorscale = spec.colorscale.resolve(&self.colorscales)?;
            if spec.reversescale {
                colorscale = colorscale.reversed();
            }
            let coloring = Coloring::Colormap {
                intensity,
                bounds: [colorbar.cmin as f32, colorbar.cmax as f32],
                colorscale,
            };
            return Ok((coloring, COLORMAP_SWATCH.to_string()));
        }

        if let Some(colors) = spec.vertexcolor.as_ref().filter(|c| !c.is_empty()) {
            if colors.len() != num_samples {
                log::warn!(
                    "volume trace '{}': {} vertex colors for {} vertices",
                    self.uid,
                    colors.len(),
                    num_samples
                );
            }
            return Ok((
                Coloring::VertexColors(parse_color_array(colors)?),
                colors[0].clone(),
            ));
        }

        if let Some(colors) = spec.facecolor.as_ref().filter(|c| !c.is_empty()) {
            if colors.len() != mesh.num_triangles() {
                log::warn!(
                    "volume trace '{}': {} face colors for {} triangles",
                    self.uid,
                    colors.len(),
                    mesh.num_triangles()
                );
            }
            return Ok((
                Coloring::FaceColors(parse_color_array(colors)?),
                colors[0].clone(),
            ));
        }

        Ok((Coloring::Uniform(parse_color(&spec.color)?), spec.color.clone()))
    }

    /// Resolves a renderer pick against this trace.
    ///
    /// Returns false, leaving `selection` untouched, if the pick hit another
    /// mesh. Otherwise fills in the data-space coordinate and text label of
    /// the picked sample.
    pub fn handle_pick(&self, selection: &mut Selection) -> bool {
        if selection.object != self.mesh.id() {
            return false;
        }

        let index = selection.data_index;
        selection.index = Some(index);
        selection.trace_coordinate = self
            .data
            .as_ref()
            .and_then(|mesh| mesh.samples.get(index))
            .map(|s| s.position);
        selection.text_label = self
            .text
            .as_ref()
            .and_then(|text| text.label(index))
            .map(str::to_string);
        true
    }

    /// Removes the mesh from the scene and releases its renderer resources.
    pub fn dispose(mut self, scene: &mut Scene) {
        let id = self.mesh.id();
        scene.renderer.remove(id);
        self.mesh.dispose();
        log::info!("disposed volume trace '{}' ({})", self.uid, id);
    }
}
