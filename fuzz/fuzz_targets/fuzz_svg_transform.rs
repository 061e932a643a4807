#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(svg) = std::str::from_utf8(data) {
        let file = Path::new("fuzz.svg");
        // The pipeline may reject input but should never panic
        if let Ok(optimized) = glyphpack::transform::optimize(svg, file) {
            let _ = glyphpack::transform::parse_svg(&optimized, file);
        }
    }
});
