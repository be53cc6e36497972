/// JGR3D Core Library - Software 3D pipeline that renders meshes as jgraph text
///
/// This library provides the stateless core functionality: OBJ loading,
/// transformation matrices, projection, backface culling, flat shading and
/// jgraph polygon output.

pub mod error;
pub mod geometry;
pub mod jgraph;
pub mod obj;
pub mod pipeline;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Mesh, Point3D, Triangle};
pub use jgraph::{DrawableEmitter, JgraphWriter};
pub use pipeline::{Pipeline, PipelineConfig, RenderStats, TriangleOutcome};
pub use projection::{ProjectionParams, Viewport};
pub use transform::Transform4x4;
