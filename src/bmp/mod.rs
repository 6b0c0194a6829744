//! BMP encoder: uncompressed 24-bit, bottom-up row order.

mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::ConvertError;
use crate::raster::Raster;

/// Encode a raster to BMP (called from [`crate::encode_bmp`]).
pub(crate) fn encode(
    raster: &Raster<'_>,
    pad_rows: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ConvertError> {
    encode::encode_bmp(raster, pad_rows, stop)
}
