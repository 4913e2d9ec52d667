#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod decoder;
pub mod descriptor;
pub mod error;
pub mod serialization;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use decoder::{
    DecoderConfig, Record, RequiredFields, decode_indexed, decode_object, decode_object_str,
};
pub use descriptor::{Descriptor, ElementDescriptor};
pub use error::Error;
pub use serialization::{Cause, ErrorKind, SerializationError};
