//! Codec implementations (decoders)

pub mod decoder;
pub mod qoa;

pub use decoder::{create_decoder, AudioDecoder};
pub use qoa::QoaCodec;
