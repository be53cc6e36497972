/// 4x4 transformation matrices and their application to points
use nalgebra::{Matrix4, RowVector4};
use std::ops::{Index, IndexMut};

use crate::geometry::Point3D;

/// A 4x4 transform applied as `output = input_row_vector * matrix`.
///
/// Indexing is `[(row, col)]` in that row-vector convention, so the
/// translation lives in row 3. The default value is the zero matrix, not
/// the identity: builders set every entry they need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform4x4 {
    m: Matrix4<f32>,
}

impl Transform4x4 {
    pub fn zero() -> Self {
        Self {
            m: Matrix4::zeros(),
        }
    }

    pub fn identity() -> Self {
        Self {
            m: Matrix4::identity(),
        }
    }

    pub fn as_matrix(&self) -> &Matrix4<f32> {
        &self.m
    }
}

impl Default for Transform4x4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<(usize, usize)> for Transform4x4 {
    type Output = f32;

    fn index(&self, index: (usize, usize)) -> &f32 {
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for Transform4x4 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f32 {
        &mut self.m[index]
    }
}

/// Create a translation matrix
pub fn make_translation(dx: f32, dy: f32, dz: f32) -> Transform4x4 {
    let mut matrix = Transform4x4::identity();
    matrix[(3, 0)] = dx;
    matrix[(3, 1)] = dy;
    matrix[(3, 2)] = dz;
    matrix
}

/// Create a rotation about the X axis. The angle is in degrees.
pub fn make_rotation_x(angle_deg: f32) -> Transform4x4 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let mut matrix = Transform4x4::zero();
    matrix[(0, 0)] = 1.0;
    matrix[(1, 1)] = cos;
    matrix[(1, 2)] = sin;
    matrix[(2, 1)] = -sin;
    matrix[(2, 2)] = cos;
    matrix[(3, 3)] = 1.0;
    matrix
}

/// Create a rotation about the Y axis. The angle is in degrees.
pub fn make_rotation_y(angle_deg: f32) -> Transform4x4 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let mut matrix = Transform4x4::zero();
    matrix[(0, 0)] = cos;
    matrix[(0, 2)] = sin;
    matrix[(2, 0)] = -sin;
    matrix[(1, 1)] = 1.0;
    matrix[(2, 2)] = cos;
    matrix[(3, 3)] = 1.0;
    matrix
}

/// Multiply `(x, y, z, 1)` by the matrix and divide by the resulting `w`.
///
/// When `w` is exactly zero the divide is skipped and the result keeps
/// `w = 0` next to the undivided coordinates. Otherwise the result has `w = 1`.
pub fn apply_transform(point: &Point3D, matrix: &Transform4x4) -> Point3D {
    let row = RowVector4::new(point.x, point.y, point.z, 1.0);
    let out = row * matrix.as_matrix();
    let w = out[3];

    if w == 0.0 {
        return Point3D {
            x: out[0],
            y: out[1],
            z: out[2],
            w: 0.0,
        };
    }

    Point3D::new(out[0] / w, out[1] / w, out[2] / w)
}
