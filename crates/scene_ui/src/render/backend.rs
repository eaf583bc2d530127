//! Backend abstraction for widget rendering
//!
//! Widgets describe what to draw; the backend owns shaders, GPU buffers and
//! texture objects.

use crate::assets::TextureHandle;
use crate::foundation::math::Mat4;
use crate::render::mesh::{DataArray, Mesh, MeshType};
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Immediate-style rendering interface used by widgets
pub trait RenderBackend {
    /// Set the model matrix for the next draws
    fn set_model_matrix(&mut self, matrix: &Mat4) -> BackendResult<()>;

    /// Unbind any shader override, falling back to the fixed textured path
    fn clear_shader(&mut self) -> BackendResult<()>;

    /// Bind a texture for subsequent draws (`None` unbinds)
    fn set_texture(&mut self, texture: Option<TextureHandle>) -> BackendResult<()>;

    /// Submit one data array of a mesh
    ///
    /// The backend re-uploads the array when the mesh reports it dirty.
    fn push_data_array(&mut self, mesh: &Mesh, array: DataArray) -> BackendResult<()>;

    /// Draw the arrays pushed since the last draw
    fn draw_arrays(&mut self, mesh_type: MeshType) -> BackendResult<()>;
}

/// Draw a textured mesh the way every quad widget does
///
/// Clears the shader override, binds `texture`, pushes positions and texture
/// coordinates, issues one draw call, then clears the pushed dirty bits.
pub fn draw_textured_mesh(
    backend: &mut dyn RenderBackend,
    mesh: &mut Mesh,
    texture: Option<TextureHandle>,
) -> BackendResult<()> {
    backend.clear_shader()?;
    backend.set_texture(texture)?;
    backend.push_data_array(mesh, DataArray::Vertex)?;
    backend.push_data_array(mesh, DataArray::TexCoord)?;
    backend.draw_arrays(mesh.mesh_type())?;
    mesh.clear_dirty(DataArray::Vertex.dirty_flag() | DataArray::TexCoord.dirty_flag());
    Ok(())
}
