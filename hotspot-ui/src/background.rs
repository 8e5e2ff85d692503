//! Background image descriptor

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to load image: {0}")]
    ImageLoadError(#[from] image::ImageError),
    #[error("Image has no pixels: {0}")]
    Empty(String),
}

/// Background image with its intrinsic size.
/// Created once the image has loaded; never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    path: String,
    natural_width: u32,
    natural_height: u32,
}

impl ImageDescriptor {
    pub fn new(path: impl Into<String>, natural_width: u32, natural_height: u32) -> Self {
        Self {
            path: path.into(),
            natural_width,
            natural_height,
        }
    }

    /// Read the intrinsic size of an image file without decoding the pixels.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(ImageError::Empty(path.display().to_string()));
        }
        Ok(Self::new(path.to_string_lossy(), width, height))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }
}
