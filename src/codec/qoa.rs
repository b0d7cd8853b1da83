//! QOA decoding via the qoaudio crate
//!
//! This module provides an adapter layer between qoa2wav and the qoaudio
//! decoding library. qoaudio streams samples out of a reader; this adapter
//! feeds it the whole in-memory file and repackages the result behind the
//! [`AudioDecoder`] interface, so the rest of the pipeline never touches
//! the QOA bitstream directly.

use crate::codec::AudioDecoder;
use crate::error::Result;
use crate::pcm::PcmBuffer;

/// QOA decoder backed by qoaudio
pub struct QoaCodec;

impl QoaCodec {
    /// Create a new QOA decoder
    pub fn new() -> Self {
        QoaCodec
    }
}

impl Default for QoaCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoder for QoaCodec {
    fn decode(&self, data: &[u8]) -> Result<PcmBuffer> {
        // qoaudio rejects empty, truncated and non-QOA input on its own;
        // all of it surfaces as Error::Decode with no partial samples.
        let decoded = qoaudio::decode_all(data)?;
        PcmBuffer::new(
            decoded.samples,
            decoded.num_channels as u16,
            decoded.sample_rate,
        )
    }
}
