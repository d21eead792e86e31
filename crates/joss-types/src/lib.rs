#![warn(clippy::pedantic)]

pub mod class_desc;
pub mod error;
pub mod field;
pub mod primitive;
pub mod serialized;

pub use class_desc::{ClassDesc, ClassFlags, LocalClassDesc, ProxyClassDesc, ancestry};
pub use error::TypeError;
pub use field::Field;
pub use primitive::Primitive;
pub use serialized::{ObjectData, Serialized};
