//! WAV file muxer implementation
//!
//! The whole sample buffer is in hand before anything is written, so every
//! size field is final up front: the 44-byte header goes out as a single
//! contiguous prefix, followed by the payload, with no seek-back patching
//! of placeholder sizes. An interrupted write can truncate the payload but
//! never leaves a header that disagrees with itself.

use super::header::{WavFormat, FMT_CHUNK_SIZE};
use super::{DATA_CHUNK, FMT_CHUNK, HEADER_SIZE, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::pcm::PcmBuffer;
use std::io::Write;

/// Bytes counted by the RIFF chunk size in addition to the sample data:
/// "WAVE", the fmt chunk with its preamble, and the data chunk preamble.
const RIFF_CHUNK_OVERHEAD: u32 = 36;

/// Compute the data chunk size for a sample count
///
/// Rejects payloads the 32-bit RIFF size fields cannot represent instead of
/// letting the cast wrap.
fn pcm_data_size(sample_count: usize) -> Result<u32> {
    let data_size = sample_count as u64 * 2;
    if data_size > (u32::MAX - RIFF_CHUNK_OVERHEAD) as u64 {
        return Err(Error::format(format!(
            "PCM payload of {} bytes does not fit in a WAV container",
            data_size
        )));
    }
    Ok(data_size as u32)
}

/// Assemble the canonical 44-byte PCM WAV header, all fields little-endian
fn header_bytes(format: &WavFormat, data_size: u32) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];

    header[0..4].copy_from_slice(RIFF_MAGIC);
    header[4..8].copy_from_slice(&(data_size + RIFF_CHUNK_OVERHEAD).to_le_bytes());
    header[8..12].copy_from_slice(WAVE_MAGIC);
    header[12..16].copy_from_slice(FMT_CHUNK);
    header[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    header[20..36].copy_from_slice(&format.to_bytes());
    header[36..40].copy_from_slice(DATA_CHUNK);
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Serialize interleaved samples as little-endian 16-bit PCM bytes
fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Write a complete PCM WAV file to a writer
///
/// A zero-frame buffer is valid and produces a header-only 44-byte file.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &PcmBuffer) -> Result<()> {
    let format = WavFormat::pcm16(buffer.channels(), buffer.sample_rate());
    format.validate()?;

    let data_size = pcm_data_size(buffer.samples().len())?;

    writer.write_all(&header_bytes(&format, data_size))?;
    writer.write_all(&samples_to_bytes(buffer.samples()))?;

    Ok(())
}

/// Encode a complete PCM WAV file to a byte vector
pub fn encode_wav(buffer: &PcmBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(HEADER_SIZE + buffer.samples().len() * 2);
    write_wav(&mut out, buffer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_u32(wav: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([wav[offset], wav[offset + 1], wav[offset + 2], wav[offset + 3]])
    }

    fn field_u16(wav: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([wav[offset], wav[offset + 1]])
    }

    #[test]
    fn test_zero_frame_buffer_is_header_only() {
        let buffer = PcmBuffer::new(Vec::new(), 2, 44100).unwrap();
        let wav = encode_wav(&buffer).unwrap();

        assert_eq!(wav.len(), 44);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(field_u32(&wav, 4), 36);
        assert_eq!(field_u32(&wav, 40), 0);
    }

    #[test]
    fn test_header_fields() {
        let buffer = PcmBuffer::new(vec![0; 200], 2, 44100).unwrap();
        let wav = encode_wav(&buffer).unwrap();

        assert_eq!(field_u32(&wav, 16), 16); // fmt chunk size
        assert_eq!(field_u16(&wav, 20), 1); // PCM format tag
        assert_eq!(field_u16(&wav, 22), 2); // channels
        assert_eq!(field_u32(&wav, 24), 44100); // sample rate
        assert_eq!(field_u32(&wav, 28), 176400); // byte rate
        assert_eq!(field_u16(&wav, 32), 4); // block align
        assert_eq!(field_u16(&wav, 34), 16); // bits per sample
    }

    #[test]
    fn test_chunk_size_arithmetic() {
        // (sample_rate, channels, frames)
        let cases = [
            (8000u32, 1u16, 0usize),
            (22050, 1, 7),
            (44100, 2, 100),
            (48000, 2, 4801),
        ];

        for (sample_rate, channels, frames) in cases {
            let buffer =
                PcmBuffer::new(vec![0; frames * channels as usize], channels, sample_rate)
                    .unwrap();
            let wav = encode_wav(&buffer).unwrap();

            let data_size = frames as u32 * channels as u32 * 2;
            assert_eq!(field_u32(&wav, 40), data_size);
            assert_eq!(field_u32(&wav, 4), data_size + 36);
            assert_eq!(wav.len(), 44 + data_size as usize);
        }
    }

    #[test]
    fn test_sample_interleaving() {
        // [L0, R0, L1, R1, L2, R2]
        let samples: Vec<i16> = vec![100, -100, 2000, -2000, 30000, -30000];
        let buffer = PcmBuffer::new(samples.clone(), 2, 44100).unwrap();
        let wav = encode_wav(&buffer).unwrap();

        assert_eq!(field_u32(&wav, 40), 12);
        for (i, &expected) in samples.iter().enumerate() {
            let offset = 44 + i * 2;
            let actual = i16::from_le_bytes([wav[offset], wav[offset + 1]]);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_oversized_payload_rejected() {
        // 2^31 samples would need a 4 GiB data chunk
        assert!(pcm_data_size(1 << 31).is_err());
        assert_eq!(pcm_data_size(6).unwrap(), 12);
        assert_eq!(pcm_data_size(0).unwrap(), 0);
    }

    #[test]
    fn test_write_wav_matches_encode_wav() {
        let buffer = PcmBuffer::new(vec![1, 2, 3, 4], 2, 48000).unwrap();
        let mut written = Vec::new();
        write_wav(&mut written, &buffer).unwrap();
        assert_eq!(written, encode_wav(&buffer).unwrap());
    }
}
