//! Asset loading: decoded images and shared textures

pub mod image_loader;
pub mod texture_manager;

pub use image_loader::ImageData;
pub use texture_manager::{
    FilterMode, Texture, TextureHandle, TextureManager, TextureParams, WrapMode,
};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
