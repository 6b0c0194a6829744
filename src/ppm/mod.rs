//! Binary PPM (P6) decoder.
//!
//! Only the plain three-line header shape is accepted: signature, dimensions,
//! maximum sample value, each on its own newline-terminated line. Header
//! comments (`#`) and tokens spanning lines are parse failures, not grammar —
//! this decoder targets producers that emit the canonical header and nothing
//! else.

mod decode;

use enough::Stop;

use crate::error::ConvertError;
use crate::limits::Limits;
use crate::raster::Raster;

/// Parsed P6 header (internal).
pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    /// Declared maximum sample value. Recorded but never validated; samples
    /// are always read as raw 8-bit values.
    #[allow(dead_code)]
    pub maxval: i64,
    /// Byte offset of the pixel section, immediately after the third line.
    pub data_offset: usize,
}

/// Decode P6 data into a raster (called from [`crate::decode_ppm`]).
///
/// The pixel section is borrowed zero-copy from `data`.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'a>, ConvertError> {
    let header = decode::parse_header(data)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    let byte_len = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(Raster::CHANNELS))
        .ok_or(ConvertError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check_memory(byte_len)?;
    }

    stop.check()?;

    let pixel_data = data
        .get(header.data_offset..)
        .ok_or(ConvertError::UnexpectedEof)?;
    if pixel_data.len() < byte_len {
        return Err(ConvertError::UnexpectedEof);
    }

    Ok(Raster::borrowed(
        &pixel_data[..byte_len],
        header.width,
        header.height,
    ))
}
