#![warn(clippy::pedantic)]

pub mod hexdump;
pub mod json;
pub mod text;

pub use hexdump::hex_dump;
