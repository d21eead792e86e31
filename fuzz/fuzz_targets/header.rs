#![no_main]

use libfuzzer_sys::fuzz_target;
use joss_wire::{Cursor, StreamHeader};

// Fuzz target: stream header validation.
//
// Only an exact ACED 0005 prefix may produce a header; everything else
// must error without consuming past the 4-byte window.
fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    if StreamHeader::read_from(&mut cursor).is_ok() {
        assert!(data.starts_with(&[0xAC, 0xED, 0x00, 0x05]));
    }
});
