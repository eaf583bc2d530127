//! Image loading utilities for texture data
//!
//! Decodes PNG (and whatever else the image crate is built with) into RGBA8.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image data ready for upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let data = color.repeat(pixel_count);

        Self { data, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 2, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 2);
        assert_eq!(img.data.len(), 4 * 2 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ImageData::from_file("does/not/exist.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let result = ImageData::from_bytes(&[0, 1, 2, 3]);
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }

    #[test]
    fn test_png_from_disk() {
        let mut path = std::env::temp_dir();
        path.push(format!("scene_ui_loader_{}.png", std::process::id()));
        image::RgbaImage::from_pixel(3, 5, image::Rgba([0, 255, 0, 255]))
            .save(&path)
            .unwrap();

        let img = ImageData::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((img.width, img.height), (3, 5));
        assert_eq!(&img.data[0..4], &[0, 255, 0, 255]);
    }
}
