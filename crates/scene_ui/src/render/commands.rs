//! Recorded render commands
//!
//! `CommandBuffer` is a headless `RenderBackend`: it records what widgets ask
//! for instead of talking to a GPU. Tools and tests use it to inspect a frame.
//! Dirty arrays are copied into a byte staging buffer, as a GPU backend would
//! before a buffer upload.

use crate::assets::TextureHandle;
use crate::foundation::math::Mat4;
use crate::render::backend::{BackendResult, RenderBackend};
use crate::render::mesh::{DataArray, Mesh, MeshType};
use crate::render::RenderError;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Model matrix set
    SetModelMatrix(Mat4),
    /// Shader override cleared
    ClearShader,
    /// Texture bound
    SetTexture(Option<TextureHandle>),
    /// Data array pushed
    PushArray {
        /// Which array
        array: DataArray,
        /// Flattened data
        data: Vec<f32>,
        /// Whether the array was dirty (needed re-upload)
        upload: bool,
    },
    /// Draw call
    Draw {
        /// Primitive type
        mesh_type: MeshType,
        /// Vertices drawn
        vertex_count: usize,
    },
}

/// Recording backend
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
    pending_vertices: Option<usize>,
    staging: Vec<u8>,
}

impl CommandBuffer {
    /// Create an empty command buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of draw calls recorded
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Draw { .. }))
            .count()
    }

    /// Bytes staged for upload (dirty arrays only, in push order)
    pub fn staged_bytes(&self) -> &[u8] {
        &self.staging
    }

    /// Drop all recorded commands and staged data
    pub fn clear(&mut self) {
        self.commands.clear();
        self.pending_vertices = None;
        self.staging.clear();
    }
}

impl RenderBackend for CommandBuffer {
    fn set_model_matrix(&mut self, matrix: &Mat4) -> BackendResult<()> {
        self.commands.push(RenderCommand::SetModelMatrix(*matrix));
        Ok(())
    }

    fn clear_shader(&mut self) -> BackendResult<()> {
        self.commands.push(RenderCommand::ClearShader);
        Ok(())
    }

    fn set_texture(&mut self, texture: Option<TextureHandle>) -> BackendResult<()> {
        self.commands.push(RenderCommand::SetTexture(texture));
        Ok(())
    }

    fn push_data_array(&mut self, mesh: &Mesh, array: DataArray) -> BackendResult<()> {
        let data = mesh.data_array(array);
        if array == DataArray::Vertex {
            self.pending_vertices = Some(data.len() / 3);
        }
        let upload = mesh.dirty().contains(array.dirty_flag());
        if upload {
            self.staging.extend_from_slice(bytemuck::cast_slice::<f32, u8>(&data));
        }
        self.commands.push(RenderCommand::PushArray { array, data, upload });
        Ok(())
    }

    fn draw_arrays(&mut self, mesh_type: MeshType) -> BackendResult<()> {
        let vertex_count = self.pending_vertices.take().ok_or(RenderError::NoVertexData)?;
        self.commands.push(RenderCommand::Draw { mesh_type, vertex_count });
        Ok(())
    }
}
