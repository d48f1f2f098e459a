pub mod convert;
pub mod parsers;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export for easy access
pub use convert::{convert, convert_to_writer, ConvertError};
pub use parsers::{ParseError, Record};
