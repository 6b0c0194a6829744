use crate::error::ConvertError;

/// Resource limits for decoding.
///
/// All fields default to `None` (no limit). A header that breaches a limit
/// fails the decode with [`ConvertError::LimitExceeded`] before any pixel
/// buffer is touched.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum byte length of the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), ConvertError> {
        let checks = [
            (u64::from(width), self.max_width, "width"),
            (u64::from(height), self.max_height, "height"),
            (
                u64::from(width) * u64::from(height),
                self.max_pixels,
                "pixel count",
            ),
        ];
        for (value, limit, what) in checks {
            if let Some(limit) = limit {
                if value > limit {
                    return Err(ConvertError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {limit}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), ConvertError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(ConvertError::LimitExceeded(alloc::format!(
                    "pixel buffer of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
