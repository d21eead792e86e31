#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full stream decode over arbitrary bytes.
//
// Catches bugs in:
// - Tag dispatch on bytes outside the TC_* range
// - Handle-table lookups for garbage handles
// - Length fields that lie about the remaining buffer
// - Recursive descriptor/object reads on truncated input
//
// Decoding must reject bad input with an error, never panic or hang.
fuzz_target!(|data: &[u8]| {
    if let Ok(reader) = joss_decoder::StreamReader::new(data) {
        let _ = reader.read_all();
    }
});
