//! P6 header parsing: bounded line reader plus a strtol-style integer
//! tokenizer.

use alloc::format;

use super::PpmHeader;
use crate::error::ConvertError;

/// Longest header line accepted, excluding the newline. A longer line is
/// truncated here and its tail is read as the next line, matching a
/// fixed-size line buffer.
const MAX_LINE: usize = 1023;

/// Read one header line starting at `pos`.
///
/// The line ends at the first newline (consumed), at end of input, or at
/// [`MAX_LINE`] bytes. Returns the line and the offset of the next one.
fn read_line(data: &[u8], pos: usize) -> (&[u8], usize) {
    let rest = &data[pos.min(data.len())..];
    let window = &rest[..rest.len().min(MAX_LINE)];
    match window.iter().position(|&b| b == b'\n') {
        Some(end) => (&window[..end], pos + end + 1),
        None => (window, pos + window.len()),
    }
}

/// Parse a leading integer and advance past it.
///
/// Skips leading ASCII whitespace, accepts an optional sign and either a
/// `0x`/`0X` hex literal or a decimal one, and returns the value together
/// with the unconsumed remainder. When no digits are present the value is 0
/// and the input is returned unchanged.
fn parse_long(buf: &[u8]) -> (i64, &[u8]) {
    let mut pos = 0;
    while pos < buf.len() && buf[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let negative = match buf.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let radix: i64 = if buf.get(pos) == Some(&b'0')
        && matches!(buf.get(pos + 1), Some(b'x' | b'X'))
        && buf.get(pos + 2).is_some_and(u8::is_ascii_hexdigit)
    {
        pos += 2;
        16
    } else {
        10
    };

    let mut value: i64 = 0;
    let mut digits = 0;
    while let Some(digit) = buf.get(pos).and_then(|&b| (b as char).to_digit(radix as u32)) {
        value = value
            .saturating_mul(radix)
            .saturating_add(i64::from(digit));
        pos += 1;
        digits += 1;
    }

    if digits == 0 {
        // No conversion: behave like strtol and leave the input untouched.
        return (0, buf);
    }
    if negative {
        value = -value;
    }
    (value, &buf[pos..])
}

fn dimension(value: i64, what: &str) -> Result<u32, ConvertError> {
    if value <= 0 {
        return Err(ConvertError::InvalidHeader(format!(
            "{what} must be positive, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| ConvertError::InvalidHeader(format!("{what} {value} out of range")))
}

/// Parse the three-line P6 header.
pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, ConvertError> {
    let (signature, pos) = read_line(data, 0);
    if signature.is_empty() {
        return Err(ConvertError::InvalidHeader("missing signature line".into()));
    }
    if signature != b"P6" {
        return Err(ConvertError::UnrecognizedFormat);
    }

    let (size_line, pos) = read_line(data, pos);
    if size_line.is_empty() {
        return Err(ConvertError::InvalidHeader(
            "missing dimensions line".into(),
        ));
    }
    let (raw_width, rest) = parse_long(size_line);
    let (raw_height, _) = parse_long(rest);
    let width = dimension(raw_width, "width")?;
    let height = dimension(raw_height, "height")?;

    let (maxval_line, pos) = read_line(data, pos);
    if maxval_line.is_empty() {
        return Err(ConvertError::InvalidHeader("missing maxval line".into()));
    }
    let (maxval, _) = parse_long(maxval_line);

    Ok(PpmHeader {
        width,
        height,
        maxval,
        data_offset: pos,
    })
}
