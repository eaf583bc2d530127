//! Textured image entity
//!
//! A plain scene node (not a widget) drawing one texture at its pixel size.

use std::path::Path;

use crate::assets::{TextureHandle, TextureManager, TextureParams};
use crate::render::{draw_textured_mesh, BackendResult, Mesh, RenderBackend};

/// Image resource placed in the scene
#[derive(Debug, Clone)]
pub struct SceneImage {
    texture: Option<TextureHandle>,
    mesh: Mesh,
    width: f32,
    height: f32,
}

impl SceneImage {
    /// Load an image from disk
    ///
    /// A missing or unreadable file gives an empty (0 x 0) image.
    pub fn from_file<P: AsRef<Path>>(
        textures: &mut TextureManager,
        path: P,
        params: TextureParams,
    ) -> Self {
        match textures.create_texture_from_file(path.as_ref(), params) {
            Ok(handle) => {
                let (w, h) = textures.dimensions(handle).unwrap_or((0, 0));
                Self::from_texture(handle, w as f32, h as f32)
            }
            Err(e) => {
                log::warn!("Scene image {:?} has no texture: {}", path.as_ref(), e);
                Self {
                    texture: None,
                    mesh: Mesh::quad(0.0, 0.0),
                    width: 0.0,
                    height: 0.0,
                }
            }
        }
    }

    /// Wrap an already loaded texture of known pixel size
    pub fn from_texture(texture: TextureHandle, width: f32, height: f32) -> Self {
        Self {
            texture: Some(texture),
            mesh: Mesh::quad(width, height),
            width,
            height,
        }
    }

    /// Bounding box size (width, height)
    pub fn bounding_box(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Texture handle, if loaded
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Quad mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Draw the image
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        draw_textured_mesh(backend, &mut self.mesh, self.texture)
    }
}
