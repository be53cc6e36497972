/// Geometry primitives for the software pipeline
use nalgebra::Vector3;
use std::ops::Sub;

/// A homogeneous 3D point. `w` is 1 for ordinary points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Point3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Default for Point3D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Difference of the spatial components; `w` is ignored.
impl Sub for Point3D {
    type Output = Vector3<f32>;

    fn sub(self, rhs: Self) -> Vector3<f32> {
        self.to_vector() - rhs.to_vector()
    }
}

/// A triangle face defined by three points and a flat shade value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Winding order determines the normal direction.
    pub vertices: [Point3D; 3],
    /// Grayscale intensity, 0 = black and 1 = white.
    pub shade: f32,
}

impl Triangle {
    pub fn new(v0: Point3D, v1: Point3D, v2: Point3D) -> Self {
        Self::from_vertices([v0, v1, v2])
    }

    pub fn from_vertices(vertices: [Point3D; 3]) -> Self {
        Self {
            vertices,
            shade: 0.0,
        }
    }

    /// Unit face normal `(p1 - p0) x (p2 - p0)`.
    ///
    /// Returns `None` for zero-area triangles and for vertices that are not
    /// finite, where no direction can be recovered.
    pub fn normal(&self) -> Option<Vector3<f32>> {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];

        let normal = edge1.cross(&edge2).try_normalize(0.0)?;
        normal.iter().all(|c| c.is_finite()).then_some(normal)
    }
}

/// A 3D mesh composed of triangles in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Create a cube centered on the origin, wound counter-clockwise when
    /// seen from outside so every face normal points outward.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let p = |x: f32, y: f32, z: f32| Point3D::new(x * h, y * h, z * h);

        // Each face as a quad of corner signs, split into (0,1,2) and (0,2,3)
        let faces = [
            // Front (+z)
            [(-1.0, -1.0, 1.0), (1.0, -1.0, 1.0), (1.0, 1.0, 1.0), (-1.0, 1.0, 1.0)],
            // Back (-z)
            [(-1.0, -1.0, -1.0), (-1.0, 1.0, -1.0), (1.0, 1.0, -1.0), (1.0, -1.0, -1.0)],
            // Top (+y)
            [(-1.0, 1.0, -1.0), (-1.0, 1.0, 1.0), (1.0, 1.0, 1.0), (1.0, 1.0, -1.0)],
            // Bottom (-y)
            [(-1.0, -1.0, -1.0), (1.0, -1.0, -1.0), (1.0, -1.0, 1.0), (-1.0, -1.0, 1.0)],
            // Right (+x)
            [(1.0, -1.0, -1.0), (1.0, 1.0, -1.0), (1.0, 1.0, 1.0), (1.0, -1.0, 1.0)],
            // Left (-x)
            [(-1.0, -1.0, -1.0), (-1.0, -1.0, 1.0), (-1.0, 1.0, 1.0), (-1.0, 1.0, -1.0)],
        ];

        let mut mesh = Self::with_capacity(12);
        for quad in faces {
            let [a, b, c, d] = quad.map(|(x, y, z)| p(x, y, z));
            mesh.add_triangle(Triangle::new(a, b, c));
            mesh.add_triangle(Triangle::new(a, c, d));
        }
        mesh
    }
}
