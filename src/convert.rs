//! File-to-file conversion: the driver behind the `ppm2bmp` binary.

use std::fs;
use std::path::{Path, PathBuf};

use enough::Stop;

use crate::bmp;
use crate::error::ConvertError;
use crate::limits::Limits;
use crate::ppm;

/// Derive the output path from the input path.
///
/// Any existing extension is replaced with `bmp`; a path without one gains
/// `.bmp` instead of being corrupted.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("bmp")
}

/// Convert one PPM file to a BMP written next to it.
///
/// Prints `load <input>` before reading and `save as <output>` after a
/// successful write. On any failure nothing is written and the error is
/// returned; the output file is never created from a failed decode.
pub fn convert_file(
    input: &Path,
    limits: Option<&Limits>,
    pad_rows: bool,
    stop: &dyn Stop,
) -> Result<PathBuf, ConvertError> {
    println!("load {}", input.display());
    let data = fs::read(input)?;
    let raster = ppm::decode(&data, limits, stop)?;

    let output = output_path(input);
    let encoded = bmp::encode(&raster, pad_rows, stop)?;
    fs::write(&output, encoded)?;
    println!("save as {}", output.display());
    Ok(output)
}
