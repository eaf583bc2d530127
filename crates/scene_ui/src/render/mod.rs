//! Rendering interface for widgets
//!
//! The library does not own a GPU pipeline. Widgets build meshes and submit them
//! through the `RenderBackend` trait; `CommandBuffer` is the headless backend.

pub mod backend;
pub mod commands;
pub mod mesh;

pub use backend::{draw_textured_mesh, BackendResult, RenderBackend};
pub use commands::{CommandBuffer, RenderCommand};
pub use mesh::{DataArray, DirtyArrays, Mesh, MeshType, Polygon, QuadVertex};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Draw issued before any vertex array was pushed
    #[error("Draw call without vertex data")]
    NoVertexData,
}
