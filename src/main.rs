use std::env;
use std::path::Path;

use ppm2bmp::{Limits, Unstoppable, convert};

/// Cap on the decoded pixel buffer. A header asking for more fails with a
/// diagnostic instead of an unbounded allocation.
const MAX_PIXEL_BYTES: u64 = 1 << 30;

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| String::from("ppm2bmp"));
    let Some(input) = args.next() else {
        eprintln!("usage: {program} file.ppm");
        return;
    };

    let limits = Limits {
        max_memory_bytes: Some(MAX_PIXEL_BYTES),
        ..Limits::default()
    };

    // Failures are reported on stderr only; the exit status stays 0 either
    // way, matching the original tool's contract.
    if let Err(err) = convert::convert_file(Path::new(&input), Some(&limits), false, &Unstoppable)
    {
        eprintln!("{input}: {err}");
    }
}
