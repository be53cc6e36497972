/// Per-triangle transform, cull, shade and projection pipeline
use nalgebra::Vector3;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geometry::{Mesh, Point3D, Triangle};
use crate::jgraph::DrawableEmitter;
use crate::projection::{ProjectionParams, Viewport};
use crate::transform::{
    apply_transform, make_rotation_x, make_rotation_y, make_translation, Transform4x4,
};

/// Everything needed to render one view of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Rotation about X in degrees, applied first
    pub rotation_x_deg: f32,
    /// Rotation about Y in degrees, applied after X
    pub rotation_y_deg: f32,
    /// Distance added to every z after rotation
    pub z_offset: f32,
    pub camera: Point3D,
    /// Direction the light travels; normalized when the pipeline is built
    pub light_direction: Vector3<f32>,
    pub projection: ProjectionParams,
    pub viewport: Viewport,
}

impl PipelineConfig {
    pub fn new(rotation_x_deg: f32, rotation_y_deg: f32, z_offset: f32) -> Self {
        Self {
            rotation_x_deg,
            rotation_y_deg,
            z_offset,
            ..Self::default()
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rotation_x_deg: 0.0,
            rotation_y_deg: 0.0,
            z_offset: 0.0,
            camera: Point3D::new(0.0, 0.0, 0.0),
            light_direction: Vector3::new(0.0, 0.0, -1.0),
            projection: ProjectionParams::default(),
            viewport: Viewport::default(),
        }
    }
}

/// What happened to a single triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleOutcome {
    /// Screen-space triangle with its flat shade
    Visible(Triangle),
    /// Faces away from the camera
    Culled,
    /// Zero-area or non-finite after transformation, no normal exists
    Degenerate,
}

/// Counts collected over one render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub total: usize,
    pub emitted: usize,
    pub culled: usize,
    pub degenerate: usize,
}

/// Precomputed matrices and constants, shared read-only by every triangle
#[derive(Debug, Clone)]
pub struct Pipeline {
    rotation_x: Transform4x4,
    rotation_y: Transform4x4,
    translation: Transform4x4,
    projection: Transform4x4,
    camera: Point3D,
    light: Vector3<f32>,
    viewport: Viewport,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.projection.validate()?;

        let light = config
            .light_direction
            .try_normalize(0.0)
            .filter(|l| l.iter().all(|c| c.is_finite()))
            .ok_or(Error::InvalidLightDirection)?;

        debug!(
            rotation_x = config.rotation_x_deg,
            rotation_y = config.rotation_y_deg,
            z_offset = config.z_offset,
            "building pipeline"
        );

        Ok(Self {
            rotation_x: make_rotation_x(config.rotation_x_deg),
            rotation_y: make_rotation_y(config.rotation_y_deg),
            translation: make_translation(0.0, 0.0, config.z_offset),
            projection: config.projection.matrix(),
            camera: config.camera,
            light,
            viewport: config.viewport,
        })
    }

    /// Run one object-space triangle through the pipeline
    pub fn process_triangle(&self, triangle: &Triangle) -> TriangleOutcome {
        // Rotate in X, then in Y, then push away from the camera
        let translated = Triangle::from_vertices(triangle.vertices.map(|p| {
            let rotated = apply_transform(&p, &self.rotation_x);
            let rotated = apply_transform(&rotated, &self.rotation_y);
            apply_transform(&rotated, &self.translation)
        }));

        let Some(normal) = translated.normal() else {
            return TriangleOutcome::Degenerate;
        };

        // Only faces pointing back at the camera survive
        let to_triangle = translated.vertices[0] - self.camera;
        if normal.dot(&to_triangle) >= 0.0 {
            return TriangleOutcome::Culled;
        }

        let shade = normal.dot(&self.light);

        let vertices = translated
            .vertices
            .map(|p| self.viewport.to_screen(apply_transform(&p, &self.projection)));

        TriangleOutcome::Visible(Triangle { vertices, shade })
    }

    /// Screen-space triangles of `mesh` that face the camera, in mesh order
    pub fn visible_triangles<'a>(&'a self, mesh: &'a Mesh) -> impl Iterator<Item = Triangle> + 'a {
        mesh.triangles
            .iter()
            .filter_map(|t| match self.process_triangle(t) {
                TriangleOutcome::Visible(projected) => Some(projected),
                _ => None,
            })
    }

    /// Render a whole mesh: header first, then one drawable per visible triangle
    pub fn render<E: DrawableEmitter>(&self, mesh: &Mesh, emitter: &mut E) -> Result<RenderStats> {
        let mut stats = RenderStats {
            total: mesh.len(),
            ..RenderStats::default()
        };

        emitter.begin(&self.viewport)?;

        for (index, triangle) in mesh.triangles.iter().enumerate() {
            match self.process_triangle(triangle) {
                TriangleOutcome::Visible(projected) => {
                    emitter.emit(&projected)?;
                    stats.emitted += 1;
                }
                TriangleOutcome::Culled => stats.culled += 1,
                TriangleOutcome::Degenerate => {
                    debug!(index, "skipping degenerate triangle");
                    stats.degenerate += 1;
                }
            }
        }

        emitter.finish()?;

        info!(
            total = stats.total,
            emitted = stats.emitted,
            culled = stats.culled,
            degenerate = stats.degenerate,
            "render complete"
        );
        Ok(stats)
    }
}
