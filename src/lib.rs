//! # ppm2bmp
//!
//! Binary PPM (P6) to uncompressed 24-bit BMP transcoder.
//!
//! ## Zero-Copy Decoding
//!
//! Decoding borrows the pixel section straight out of the input buffer — no
//! allocation or copy. The encoder performs the whole format bridge in one
//! pass: BMP stores rows bottom-up in BGR order, so rows are reindexed and
//! channels swapped while streaming into the output.
//!
//! ## Supported Formats
//!
//! - **P6** (PPM binary) in — RGB, 8-bit, plain three-line header only
//! - **BMP** out — 24-bit, uncompressed, bottom-up; unpadded rows by default
//!   (matching the original tool), 4-byte-aligned rows on request
//!
//! ## Non-Goals
//!
//! - ASCII PNM formats (P1–P3) and the other binary variants (P4, P5)
//! - Header comments or multi-line header tokens
//! - Indexed, compressed, or alpha-carrying BMP
//!
//! ## Usage
//!
//! ```no_run
//! use ppm2bmp::{Unstoppable, decode_ppm, encode_bmp};
//!
//! let data = std::fs::read("image.ppm")?;
//! let raster = decode_ppm(&data, None, &Unstoppable)?;
//! let bmp = encode_bmp(&raster, false, &Unstoppable)?;
//! std::fs::write("image.bmp", bmp)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod limits;
mod ppm;
mod raster;

#[cfg(feature = "std")]
pub mod convert;

use alloc::vec::Vec;

// Re-exports
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::ConvertError;
pub use limits::Limits;
pub use raster::Raster;

/// Decode a binary PPM (P6) from a byte slice.
///
/// The returned [`Raster`] borrows the pixel section zero-copy. `limits`, if
/// present, is checked against the header before the pixel data is touched.
pub fn decode_ppm<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'a>, ConvertError> {
    ppm::decode(data, limits, stop)
}

/// Encode a raster as an uncompressed 24-bit BMP.
///
/// `pad_rows` selects between the unpadded legacy layout and spec-conformant
/// 4-byte-aligned rows; see [`crate::convert`] for the file-level driver.
pub fn encode_bmp(
    raster: &Raster<'_>,
    pad_rows: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ConvertError> {
    bmp::encode(raster, pad_rows, stop)
}
