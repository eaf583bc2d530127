//! Rect widget - a textured quad
//!
//! Geometry is a centered 4-vertex quad. Texture coordinates either cover the
//! whole texture or address a pixel sub-rectangle of it (sprite sheets).

use std::path::Path;

use crate::assets::{TextureHandle, TextureManager};
use crate::config::UIConfig;
use crate::render::{draw_textured_mesh, BackendResult, DirtyArrays, Mesh, RenderBackend};
use crate::scene::Entity;
use crate::ui::widgets::UIElement;

/// Textured quad widget
#[derive(Debug, Clone)]
pub struct UIRect {
    mesh: Mesh,
    texture: Option<TextureHandle>,
    image_width: f32,
    image_height: f32,
}

impl UIRect {
    /// Untextured quad of the given size
    pub fn new(entity: &mut Entity, width: f32, height: f32) -> Self {
        Self {
            mesh: Self::init_rect(entity, width, height),
            texture: None,
            image_width: 0.0,
            image_height: 0.0,
        }
    }

    /// Quad sized to a texture loaded from `path`
    ///
    /// When loading fails the rect becomes a placeholder quad
    /// (`config.placeholder_size` square) with image size (0, 0).
    pub fn from_file<P: AsRef<Path>>(
        entity: &mut Entity,
        textures: &mut TextureManager,
        path: P,
        config: &UIConfig,
    ) -> Self {
        let loaded = textures
            .create_texture_from_file(path.as_ref(), config.texture_params.clone())
            .map(|handle| (handle, textures.dimensions(handle).unwrap_or((0, 0))));

        match loaded {
            Ok((handle, (w, h))) => {
                let (w, h) = (w as f32, h as f32);
                Self {
                    mesh: Self::init_rect(entity, w, h),
                    texture: Some(handle),
                    image_width: w,
                    image_height: h,
                }
            }
            Err(e) => {
                log::warn!("Rect texture {:?} failed to load, using placeholder: {}", path.as_ref(), e);
                Self::new(entity, config.placeholder_size, config.placeholder_size)
            }
        }
    }

    fn init_rect(entity: &mut Entity, width: f32, height: f32) -> Mesh {
        UIElement::configure_entity(entity);
        entity.set_width(width);
        entity.set_height(height);
        Mesh::quad(width, height)
    }

    /// Show the `width x height` pixel region at (x, y) of the image
    ///
    /// The widget takes the region's size. With no recorded image size (a
    /// placeholder rect) texture coordinates collapse to zero.
    pub fn set_image_coordinates(
        &mut self,
        entity: &mut Entity,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) {
        let pixel_size_x = Self::pixel_size(self.image_width);
        let pixel_size_y = Self::pixel_size(self.image_height);
        if pixel_size_x == 0.0 || pixel_size_y == 0.0 {
            log::warn!("set_image_coordinates on rect without image size; texture coordinates zeroed");
        }

        entity.set_width(width);
        entity.set_height(height);

        let u = x * pixel_size_x;
        let v = y * pixel_size_y;
        let du = width * pixel_size_x;
        let dv = height * pixel_size_y;
        let tex_coords = [(u, v + dv), (u + du, v + dv), (u + du, v), (u, v)];

        if let Some(polygon) = self.mesh.polygon_mut(0) {
            polygon.set_rect_positions(width, height);
            for (i, (s, t)) in tex_coords.into_iter().enumerate() {
                if let Some(vertex) = polygon.vertex_mut(i) {
                    vertex.set_tex_coord(s, t);
                }
            }
        }

        self.mesh.mark_dirty(DirtyArrays::VERTEX | DirtyArrays::TEX_COORD);
        entity.rebuild_transform_matrix();
        entity.dirty_matrix(true);
    }

    fn pixel_size(extent: f32) -> f32 {
        if extent > 0.0 {
            1.0 / extent
        } else {
            0.0
        }
    }

    /// Change the quad size, keeping texture coordinates
    pub fn resize(&mut self, entity: &mut Entity, width: f32, height: f32) {
        entity.set_width(width);
        entity.set_height(height);

        if let Some(polygon) = self.mesh.polygon_mut(0) {
            polygon.set_rect_positions(width, height);
        }
        self.mesh.mark_dirty(DirtyArrays::VERTEX);
    }

    /// Use a different (shared) texture; image size is unchanged
    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
    }

    /// Bound texture
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Source image width in pixels (0 without a texture)
    pub fn image_width(&self) -> f32 {
        self.image_width
    }

    /// Source image height in pixels (0 without a texture)
    pub fn image_height(&self) -> f32 {
        self.image_height
    }

    /// Quad mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Draw the quad
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        draw_textured_mesh(backend, &mut self.mesh, self.texture)
    }
}
