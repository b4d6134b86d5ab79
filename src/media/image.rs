// SPDX-License-Identifier: MPL-2.0
//! Downloaded calendar artwork ready for display.

use crate::error::Result;
use iced::widget::image;
use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps encoded bytes (JPEG, PNG, WebP) after probing their dimensions.
    ///
    /// Only the header is parsed here; iced decodes the pixels when the
    /// handle is first drawn.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let (width, height) = read_dimensions(&bytes)?;
        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }

    /// Creates image data from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Memory footprint once decoded to RGBA.
    #[must_use]
    pub fn decoded_size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Width divided by height, or 1 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Reads the pixel dimensions from an encoded image header.
pub fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image_rs::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let pixels = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([245, 158, 11, 255]));
    let mut bytes = Cursor::new(Vec::new());
    pixels
        .write_to(&mut bytes, image_rs::ImageFormat::Png)
        .expect("encode test png");
    bytes.into_inner()
}
