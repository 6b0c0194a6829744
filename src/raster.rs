use alloc::borrow::Cow;

use crate::error::ConvertError;

/// Decoded image raster: RGB8 samples, row-major, top row first.
///
/// Pixels may be borrowed (zero-copy from the decoder's input) or owned.
#[derive(Clone, Debug)]
pub struct Raster<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
}

impl<'a> Raster<'a> {
    /// Samples per pixel: R, G, B.
    pub const CHANNELS: usize = 3;

    /// Build a raster from an existing pixel buffer.
    ///
    /// The buffer must hold exactly `width * height * 3` bytes.
    pub fn from_pixels(
        pixels: impl Into<Cow<'a, [u8]>>,
        width: u32,
        height: u32,
    ) -> Result<Self, ConvertError> {
        let pixels = pixels.into();
        let needed = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(Self::CHANNELS))
            .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(ConvertError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Total pixel byte length (`width * height * 3`).
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Bytes of one row (`width * 3`).
    pub fn row_stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    /// One row of RGB samples, top row is `y = 0`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_stride();
        &self.pixels[start..start + self.row_stride()]
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> Raster<'static> {
        Raster {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
        }
    }
}
