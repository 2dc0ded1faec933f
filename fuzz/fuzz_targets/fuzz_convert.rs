#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, splits valid UTF-8 on whitespace, feeds the
// tokens to convert(). Goal: no panics, even on malformed input.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = shunt_core::convert_str(input, &Default::default());
    }
});
