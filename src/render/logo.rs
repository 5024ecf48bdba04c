use std::path::Path;

use image::imageops::{FilterType, overlay};
use image::{DynamicImage, GrayImage, ImageBuffer, Rgba};
use imageproc::contrast::{ThresholdType, threshold};
use thiserror::Error;

/// Luma values at or above this print as white.
const WHITE_FROM: u8 = 200;

/// Longest logo side kept for embedding. The header is a few centimetres
/// wide, so this is still well above print resolution.
pub const MAX_LOGO_PX: u32 = 600;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode logo {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
    #[error("logo {0} has no pixels")]
    Empty(String),
}

/// Load a logo and reduce it to pure black and white for printing.
///
/// Transparent areas become white before thresholding. Large images are
/// scaled down to at most [`MAX_LOGO_PX`] on their longest side, since the
/// raster is embedded again on every page.
pub fn load_logo_bw(path: &Path) -> Result<GrayImage, LogoError> {
    let bytes = std::fs::read(path).map_err(|source| LogoError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| LogoError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(LogoError::Empty(path.display().to_string()));
    }
    let decoded = if decoded.width().max(decoded.height()) > MAX_LOGO_PX {
        decoded.resize(MAX_LOGO_PX, MAX_LOGO_PX, FilterType::Triangle)
    } else {
        decoded
    };
    Ok(to_black_and_white(&decoded))
}

pub fn to_black_and_white(img: &DynamicImage) -> GrayImage {
    let rgba = img.to_rgba8();
    let mut flat = ImageBuffer::from_pixel(rgba.width(), rgba.height(), Rgba([255u8, 255, 255, 255]));
    overlay(&mut flat, &rgba, 0, 0);
    let gray = DynamicImage::ImageRgba8(flat).to_luma8();
    threshold(&gray, WHITE_FROM - 1, ThresholdType::Binary)
}
