//! Image export

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::info;

use hypermarch_render::Framebuffer;

/// Error writing an image
#[derive(Debug)]
pub enum OutputError {
    /// The framebuffer holds no pixels
    EmptyImage,
    /// Encoding or IO failure
    Image(image::ImageError),
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::EmptyImage => write!(f, "Image has no pixels"),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Image(e) => Some(e),
            OutputError::EmptyImage => None,
        }
    }
}

/// Copy a framebuffer into an RGBA image
pub fn framebuffer_to_image(framebuffer: &Framebuffer) -> Result<RgbaImage, OutputError> {
    RgbaImage::from_raw(
        framebuffer.width(),
        framebuffer.height(),
        framebuffer.as_bytes().to_vec(),
    )
    .filter(|image| !image.is_empty())
    .ok_or(OutputError::EmptyImage)
}

/// Save a framebuffer as PNG, whatever the file extension
pub fn save_framebuffer_as_png<P: AsRef<Path>>(
    framebuffer: &Framebuffer,
    path: P,
) -> Result<(), OutputError> {
    let path = path.as_ref();
    framebuffer_to_image(framebuffer)?.save_with_format(path, ImageFormat::Png)?;
    info!("Image saved as {}", path.display());
    Ok(())
}
