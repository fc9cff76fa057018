//! Volume trace demo.
//!
//! Samples a sphere distance field, keeps the shell between two radii and
//! pushes the resulting mesh through a renderer that only logs what it receives.
//!
//! Run with `RUST_LOG=debug` to see the per-sweep statistics.

use volume3d::*;

struct LoggingMesh {
    id: MeshId,
}

impl RenderMesh for LoggingMesh {
    fn id(&self) -> MeshId {
        self.id
    }

    fn update(&mut self, descriptor: &MeshDescriptor) {
        log::info!(
            "{}: {} vertices, {} triangles, {:?} coloring, {} bytes of positions",
            self.id,
            descriptor.num_vertices(),
            descriptor.num_triangles(),
            descriptor.coloring.mode(),
            descriptor.position_bytes().len()
        );
    }

    fn dispose(&mut self) {
        log::info!("{}: disposed", self.id);
    }
}

struct LoggingRenderer;

impl SceneRenderer for LoggingRenderer {
    fn create_mesh(&mut self) -> Box<dyn RenderMesh> {
        Box::new(LoggingMesh { id: MeshId::next() })
    }

    fn add(&mut self, mesh: MeshId) {
        log::info!("{mesh}: added to scene");
    }

    fn remove(&mut self, mesh: MeshId) {
        log::info!("{mesh}: removed from scene");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 16;
    let axis: Vec<f64> = (0..n).map(|i| f64::from(i) / f64::from(n - 1) * 2.0 - 1.0).collect();
    let mut volume = Vec::with_capacity(axis.len().pow(3));
    for &z in &axis {
        for &y in &axis {
            for &x in &axis {
                volume.push(DVec3::new(x, y, z).length());
            }
        }
    }

    let mut spec = Volume3dSpec::new(axis.clone(), axis.clone(), axis, volume)
        .with_isovalue(Some(0.5), Some(0.8));
    spec.colorscale = ColorscaleSpec::Named("Portland".to_string());

    let result = calc(&spec)?;
    log::info!(
        "inclusion interval [{}, {}], colorbar {}min={} {}max={}",
        result.interval.min,
        result.interval.max,
        result.colorbar.key,
        result.colorbar.cmin,
        result.colorbar.key,
        result.colorbar.cmax
    );

    let mut scene = Scene::new(Box::new(LoggingRenderer)).with_data_scale(DVec3::splat(0.5));
    let mut trace = create(&mut scene, &spec)?;

    let mut selection = Selection::new(trace.mesh_id(), 0);
    if trace.handle_pick(&mut selection) {
        log::info!("picked sample 0 at {:?}", selection.trace_coordinate);
    }

    spec.color_by_volume = false;
    spec.color = "orange".to_string();
    trace.update(&scene, &spec)?;
    log::info!("swatch color: {}", trace.representative_color());

    trace.dispose(&mut scene);
    Ok(())
}
