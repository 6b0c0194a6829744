//! Driver-level tests: file in, file out.

use std::fs;
use std::path::{Path, PathBuf};

use ppm2bmp::convert::{convert_file, output_path};
use ppm2bmp::{ConvertError, Limits, Unstoppable};

/// Per-test scratch path under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ppm2bmp-test-{}-{name}", std::process::id()))
}

fn write_p6(path: &Path, header: &str, pixels: &[u8]) {
    let mut data = header.as_bytes().to_vec();
    data.extend_from_slice(pixels);
    fs::write(path, data).unwrap();
}

const PIXELS_2X2: [u8; 12] = [
    0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00, // red, green
    0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, // blue, yellow
];

#[test]
fn converts_file_next_to_input() {
    let input = scratch("basic.ppm");
    write_p6(&input, "P6\n2 2\n255\n", &PIXELS_2X2);

    let output = convert_file(&input, None, false, &Unstoppable).unwrap();
    assert_eq!(output, scratch("basic.bmp"));

    let bmp = fs::read(&output).unwrap();
    assert_eq!(bmp.len(), 66);
    assert_eq!(&bmp[..2], b"BM");
    #[rustfmt::skip]
    let expected_pixels: [u8; 12] = [
        0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFF, // bottom row: blue, yellow (BGR)
        0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, // top row: red, green (BGR)
    ];
    assert_eq!(&bmp[54..], &expected_pixels);

    fs::remove_file(&input).unwrap();
    fs::remove_file(&output).unwrap();
}

#[test]
fn missing_input_creates_no_output() {
    let input = scratch("does-not-exist.ppm");
    let result = convert_file(&input, None, false, &Unstoppable);
    assert!(matches!(result, Err(ConvertError::Io(_))));
    assert!(!output_path(&input).exists());
}

#[test]
fn bad_signature_creates_no_output() {
    let input = scratch("gray.ppm");
    write_p6(&input, "P5\n2 2\n255\n", &PIXELS_2X2);

    let result = convert_file(&input, None, false, &Unstoppable);
    assert!(matches!(result, Err(ConvertError::UnrecognizedFormat)));
    assert!(!output_path(&input).exists());

    fs::remove_file(&input).unwrap();
}

#[test]
fn over_limit_input_is_rejected() {
    let input = scratch("large.ppm");
    write_p6(&input, "P6\n2 2\n255\n", &PIXELS_2X2);

    let limits = Limits {
        max_memory_bytes: Some(4),
        ..Limits::default()
    };
    let result = convert_file(&input, Some(&limits), false, &Unstoppable);
    assert!(matches!(result, Err(ConvertError::LimitExceeded(_))));
    assert!(!output_path(&input).exists());

    fs::remove_file(&input).unwrap();
}

#[test]
fn output_path_replaces_or_appends_extension() {
    assert_eq!(output_path(Path::new("img.ppm")), Path::new("img.bmp"));
    assert_eq!(output_path(Path::new("dir/img.ppm")), Path::new("dir/img.bmp"));
    // No recognizable extension: append rather than corrupt the name.
    assert_eq!(output_path(Path::new("image")), Path::new("image.bmp"));
    assert_eq!(output_path(Path::new("a.tar.ppm")), Path::new("a.tar.bmp"));
}
