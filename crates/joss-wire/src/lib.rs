#![warn(clippy::pedantic)]

pub mod constants;
pub mod cursor;
pub mod error;
pub mod header;
pub mod mutf8;
pub mod tag;
pub mod type_code;

pub use cursor::Cursor;
pub use error::WireError;
pub use header::StreamHeader;
pub use tag::Tag;
pub use type_code::TypeCode;
