/// Perspective projection and viewport utilities
use crate::error::{Error, Result};
use crate::geometry::Point3D;
use crate::transform::Transform4x4;

/// Parameters for the perspective projection matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Full field of view in degrees
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionParams {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
        }
    }

    /// Reject parameters that would put infinities or NaN into the matrix
    pub fn validate(&self) -> Result<()> {
        let values = [self.fov_deg, self.aspect, self.near, self.far];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "parameters must be finite, got {:?}",
                self
            )));
        }
        if self.fov_deg <= 0.0 || self.fov_deg >= 180.0 {
            return Err(Error::InvalidProjection(format!(
                "field of view must be within (0, 180) degrees, got {}",
                self.fov_deg
            )));
        }
        if self.aspect <= 0.0 {
            return Err(Error::InvalidProjection(format!(
                "aspect ratio must be positive, got {}",
                self.aspect
            )));
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(Error::InvalidProjection(format!(
                "clip planes must satisfy 0 < near < far, got near {} far {}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    pub fn matrix(&self) -> Transform4x4 {
        make_projection(self.fov_deg, self.aspect, self.near, self.far)
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::new(90.0, 1.0, 0.1, 1000.0)
    }
}

/// Create the perspective projection matrix.
///
/// Post-divide depth grows with view-space z so triangles keep their ordering.
/// No validation happens here: a zero depth range or a zero tangent yields
/// infinite entries. See [`ProjectionParams::validate`].
pub fn make_projection(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Transform4x4 {
    let fov_scale = 1.0 / (fov_deg * 0.5).to_radians().tan();
    let mut matrix = Transform4x4::zero();
    matrix[(0, 0)] = aspect * fov_scale;
    matrix[(1, 1)] = fov_scale;
    matrix[(2, 2)] = far / (far - near);
    matrix[(3, 2)] = (-far * near) / (far - near);
    matrix[(2, 3)] = 1.0;
    matrix[(3, 3)] = 0.0;
    matrix
}

/// Output canvas size in jgraph units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map normalized device coordinates in [-1, 1] onto [0, width] x [0, height].
    /// z and w pass through untouched.
    pub fn to_screen(&self, ndc: Point3D) -> Point3D {
        Point3D {
            x: (ndc.x + 1.0) * 0.5 * self.width as f32,
            y: (ndc.y + 1.0) * 0.5 * self.height as f32,
            ..ndc
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(100, 100)
    }
}
