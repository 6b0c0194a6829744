//! 24-bit uncompressed BMP encoder.
//!
//! Rows are emitted bottom-up with channels reordered RGB → BGR, reindexing
//! the source arithmetically rather than building a flipped intermediate.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::ConvertError;
use crate::raster::Raster;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;
const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
/// 72 DPI expressed in pixels per meter.
const RESOLUTION_PPM: u32 = 2835;

/// Encode a raster as a 24-bit BMP.
///
/// With `pad_rows` false the pixel rows are written back to back, byte length
/// `width * 3` each; readers that insist on 4-byte row alignment will reject
/// widths where that is not already a multiple of 4. With `pad_rows` true
/// each row is zero-padded to a 4-byte boundary and the header sizes account
/// for the padding.
pub(crate) fn encode_bmp(
    raster: &Raster<'_>,
    pad_rows: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ConvertError> {
    let width = raster.width;
    let height = raster.height;
    let row_bytes = raster.row_stride();
    let row_stride = if pad_rows {
        row_bytes
            .checked_add(3)
            .map(|r| r & !3)
            .ok_or(ConvertError::DimensionsTooLarge { width, height })?
    } else {
        row_bytes
    };
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(HEADER_LEN)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_header(&mut out, file_size, pixel_data_size, width, height);

    let pad = row_stride - row_bytes;
    for y in (0..height).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for rgb in raster.row(y).chunks_exact(Raster::CHANNELS) {
            out.push(rgb[2]);
            out.push(rgb[1]);
            out.push(rgb[0]);
        }
        out.extend(core::iter::repeat_n(0u8, pad));
    }

    Ok(out)
}

fn write_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // pixel data offset

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (none)
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
