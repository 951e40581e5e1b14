use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Load the image at `path` as a `size` x `size` square of RGBA bytes.
/// Aspect ratio is not preserved. Returns (rgba_bytes, width, height).
pub fn load_thumbnail(path: &Path, size: u32) -> Result<(Vec<u8>, u32, u32), ThumbnailError> {
    let data = std::fs::read(path).map_err(|source| ThumbnailError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let orientation = read_orientation(&data);

    let img = match decode_jpeg_scaled(&data, size) {
        Some(img) => img,
        None => image::load_from_memory(&data).map_err(|source| ThumbnailError::Decode {
            path: path.to_path_buf(),
            source,
        })?,
    };

    let thumb = apply_orientation(img, orientation).resize_exact(size, size, FilterType::Triangle);
    let (w, h) = thumb.dimensions();
    Ok((thumb.to_rgba8().into_raw(), w, h))
}

/// Decode a JPEG at reduced resolution using DCT scaling.
/// Returns None for non-JPEG data, images already small, or on failure.
fn decode_jpeg_scaled(data: &[u8], size: u32) -> Option<DynamicImage> {
    let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));

    // scale() reads the header and picks the smallest DCT scale that still
    // covers the requested size.
    let target = size.min(u16::MAX as u32) as u16;
    let (actual_w, actual_h) = decoder.scale(target, target).ok()?;

    let info = decoder.info()?;
    if actual_w == info.width && actual_h == info.height {
        return None;
    }

    let pixels = decoder.decode().ok()?;

    match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => {
            image::RgbImage::from_raw(actual_w as u32, actual_h as u32, pixels)
                .map(DynamicImage::ImageRgb8)
        }
        jpeg_decoder::PixelFormat::L8 => {
            image::GrayImage::from_raw(actual_w as u32, actual_h as u32, pixels)
                .map(DynamicImage::ImageLuma8)
        }
        _ => None,
    }
}

/// EXIF orientation tag, 1 (normal) when absent.
fn read_orientation(data: &[u8]) -> u32 {
    let Ok(exif) = exif::Reader::new().read_from_container(&mut Cursor::new(data)) else {
        return 1;
    };
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|f| f.value.get_uint(0))
        .unwrap_or(1)
}

fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}
