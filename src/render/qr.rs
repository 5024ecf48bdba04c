use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

/// Turns a URL into a scannable image (PNG or any format `image` can decode).
pub trait CodeImageEncoder {
    fn encode(&self, url: &str) -> Result<Vec<u8>, String>;
}

/// QR code renderer producing black-on-white PNG bytes.
#[derive(Debug, Clone, Copy)]
pub struct QrPngEncoder {
    /// Pixels per QR module.
    pub module_px: u32,
}

impl Default for QrPngEncoder {
    fn default() -> Self {
        Self { module_px: 6 }
    }
}

impl CodeImageEncoder for QrPngEncoder {
    fn encode(&self, url: &str) -> Result<Vec<u8>, String> {
        let code = QrCode::new(url.as_bytes()).map_err(|e| e.to_string())?;
        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_px, self.module_px)
            .build();
        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| e.to_string())?;
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png() {
        let png = QrPngEncoder::default()
            .encode("https://vip-club.uk/vvjkz0")
            .unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), decoded.height());
    }
}
