//! Decoder interface

use crate::error::{Error, Result};
use crate::pcm::PcmBuffer;

/// Decoder trait for decoding compressed audio data
///
/// Implementations take the complete, fully buffered content of an input
/// file and produce an interleaved PCM buffer in one shot. A failed decode
/// never yields a partial buffer.
pub trait AudioDecoder {
    /// Decode an in-memory bitstream into 16-bit interleaved PCM
    fn decode(&self, data: &[u8]) -> Result<PcmBuffer>;
}

/// Create a decoder for the given codec
pub fn create_decoder(codec_id: &str) -> Result<Box<dyn AudioDecoder>> {
    match codec_id {
        "qoa" => Ok(Box::new(crate::codec::QoaCodec::new())),
        _ => Err(Error::invalid_input(format!(
            "Unsupported codec: {}",
            codec_id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_decoder_qoa() {
        assert!(create_decoder("qoa").is_ok());
    }

    #[test]
    fn test_create_decoder_unknown() {
        assert!(create_decoder("flac").is_err());
    }
}
