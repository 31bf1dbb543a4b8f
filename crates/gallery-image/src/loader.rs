use cosmic::widget::image::Handle;
use std::{
    fmt::{self, Debug, Formatter},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to resize image: {0}")]
    Resize(String),
    #[error("Task cancelled")]
    Cancelled,
}

#[derive(Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl Debug for LoadedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("path", &self.path)
            .finish()
    }
}

impl LoadedImage {
    fn from_rgba(rgba: image::RgbaImage, path: &Path) -> Self {
        let (width, height) = rgba.dimensions();
        let handle = Handle::from_rgba(width, height, rgba.into_raw());

        Self {
            handle,
            width,
            height,
            path: path.to_path_buf(),
        }
    }
}

/// Decode a full-resolution image off the UI thread
pub async fn load_image(path: PathBuf) -> Result<LoadedImage, LoadError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = decode_rgba(&path).map(|rgba| LoadedImage::from_rgba(rgba, &path));
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| LoadError::Cancelled)?
}

/// Decode and downscale a thumbnail off the UI thread
pub async fn load_thumbnail(path: PathBuf, max_size: u32) -> Result<LoadedImage, LoadError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = decode_rgba(&path)
            .and_then(|rgba| downscale(rgba, max_size))
            .map(|rgba| LoadedImage::from_rgba(rgba, &path));
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| LoadError::Cancelled)?
}

fn decode_rgba(path: &Path) -> Result<image::RgbaImage, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    // zune decodes the common formats noticeably faster; fall back to the
    // image crate for everything it does not handle.
    if is_zune_supported(&extension)
        && let Ok(rgba) = decode_with_zune(path)
    {
        return Ok(rgba);
    }

    Ok(image::open(path)?.into_rgba8())
}

fn is_zune_supported(extension: &str) -> bool {
    matches!(
        extension,
        "jpg" | "jpeg" | "png" | "ppm" | "pgm" | "pbm" | "pnm" | "bmp" | "qoi"
    )
}

fn decode_with_zune(path: &Path) -> Result<image::RgbaImage, LoadError> {
    use zune_image::image::Image;

    let mut img = Image::open(path).map_err(|e| LoadError::UnsupportedFormat(e.to_string()))?;

    img.convert_color(zune_image::codecs::bmp::zune_core::colorspace::ColorSpace::RGBA)
        .map_err(|e| LoadError::UnsupportedFormat(e.to_string()))?;

    let (width, height) = img.dimensions();

    let pixels = img
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::UnsupportedFormat("No pixel data".into()))?;

    image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| LoadError::UnsupportedFormat("Pixel buffer size mismatch".into()))
}

/// Downscale to fit within `max_size`, keeping the aspect ratio
fn downscale(rgba: image::RgbaImage, max_size: u32) -> Result<image::RgbaImage, LoadError> {
    let (width, height) = rgba.dimensions();
    if width <= max_size && height <= max_size {
        return Ok(rgba);
    }

    let scale = (max_size as f32 / width as f32).min(max_size as f32 / height as f32);
    let dst_width = ((width as f32 * scale).round() as u32).max(1);
    let dst_height = ((height as f32 * scale).round() as u32).max(1);

    let src = image::DynamicImage::ImageRgba8(rgba);
    let mut dst = image::DynamicImage::new(dst_width, dst_height, image::ColorType::Rgba8);

    let mut resizer = fast_image_resize::Resizer::new();
    resizer
        .resize(&src, &mut dst, None)
        .map_err(|e| LoadError::Resize(e.to_string()))?;

    Ok(dst.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> image::RgbaImage {
        image::RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn downscale_keeps_small_images_untouched() {
        let rgba = checkerboard(32, 16);
        let result = downscale(rgba, 64).expect("downscale");
        assert_eq!(result.dimensions(), (32, 16));
    }

    #[test]
    fn downscale_fits_within_bounds() {
        let rgba = checkerboard(400, 200);
        let result = downscale(rgba, 100).expect("downscale");
        assert_eq!(result.dimensions(), (100, 50));
    }

    #[test]
    fn downscale_preserves_aspect_for_tall_images() {
        let rgba = checkerboard(100, 400);
        let result = downscale(rgba, 100).expect("downscale");
        assert_eq!(result.dimensions(), (25, 100));
    }

    #[test]
    fn decode_rejects_non_images() {
        let dir = std::env::temp_dir();
        let path = dir.join("rotunda-loader-test.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(decode_rgba(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
