#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: modified-UTF-8 decoding.
//
// Catches bugs in:
// - Multi-byte sequences truncated at the buffer end
// - Illegal leading/continuation bytes
// - Surrogate pairing via from_utf16
fuzz_target!(|data: &[u8]| {
    let _ = joss_wire::mutf8::decode(data, 0);
});
