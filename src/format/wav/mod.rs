//! WAV audio format support
//!
//! This module implements canonical 44-byte-header RIFF/WAV file writing.
//! WAV is a simple uncompressed audio format widely used for audio interchange.

pub mod header;
pub mod muxer;

pub use header::WavFormat;
pub use muxer::{encode_wav, write_wav};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the canonical PCM WAV header, up to and including the data
/// chunk size field
pub const HEADER_SIZE: usize = 44;
