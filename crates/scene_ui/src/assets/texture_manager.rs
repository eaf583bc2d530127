//! Texture management
//!
//! Loads textures synchronously through the image crate and hands out shared
//! handles. Widgets never own textures; they keep a `TextureHandle`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::image_loader::ImageData;
use super::AssetError;

/// Handle for a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Texture creation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureParams {
    /// Texture filtering mode
    pub filter_mode: FilterMode,
    /// Texture wrapping mode
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

impl TextureParams {
    /// Clamp-to-edge sampling without mipmaps, the mode UI quads load with
    pub fn clamped() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::ClampToEdge,
            generate_mipmaps: false,
        }
    }
}

/// A loaded texture
#[derive(Debug, Clone)]
pub struct Texture {
    /// Texture handle
    pub handle: TextureHandle,
    /// Creation parameters
    pub params: TextureParams,
    /// Resource name (file path for file textures)
    pub name: String,
    /// Pixel data
    pub image: ImageData,
}

impl Texture {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height
    }
}

/// Texture manager
pub struct TextureManager {
    textures: HashMap<TextureHandle, Texture>,
    by_name: HashMap<String, TextureHandle>,
    next_handle: u32,
}

impl TextureManager {
    /// Create a new texture manager
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            by_name: HashMap::new(),
            next_handle: 1, // Start from 1, reserve 0 for "no texture"
        }
    }

    /// Load a texture from file
    ///
    /// Loading the same path twice returns the handle of the first load.
    pub fn create_texture_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        params: TextureParams,
    ) -> Result<TextureHandle, AssetError> {
        let name = path.as_ref().display().to_string();
        if let Some(handle) = self.by_name.get(&name) {
            log::debug!("Texture {} already loaded as {:?}", name, handle);
            return Ok(*handle);
        }

        let image = ImageData::from_file(path.as_ref())?;
        Ok(self.create_texture_from_image(name, image, params))
    }

    /// Register already decoded pixels as a texture
    pub fn create_texture_from_image(
        &mut self,
        name: impl Into<String>,
        image: ImageData,
        params: TextureParams,
    ) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;

        let name = name.into();
        log::debug!(
            "Created texture {:?} '{}' ({}x{}, {:?})",
            handle, name, image.width, image.height, params.wrap_mode
        );

        self.by_name.insert(name.clone(), handle);
        self.textures.insert(handle, Texture { handle, params, name, image });
        handle
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(&handle)
    }

    /// Pixel dimensions of a texture
    pub fn dimensions(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.get(handle).map(|t| (t.width(), t.height()))
    }

    /// Unload a texture; handles held elsewhere become dangling and resolve to `None`
    pub fn remove(&mut self, handle: TextureHandle) -> Option<Texture> {
        let texture = self.textures.remove(&handle)?;
        self.by_name.remove(&texture.name);
        Some(texture)
    }

    /// Get number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}
