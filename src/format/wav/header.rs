//! WAV format chunk structure

use crate::error::{Error, Result};

/// Audio format tag for integer PCM
pub const FORMAT_TAG_PCM: u16 = 0x0001;

/// Size of the fmt chunk payload for plain PCM
pub const FMT_CHUNK_SIZE: u32 = 16;

/// WAV format chunk data
///
/// Only 16-bit integer PCM is ever produced; the derived fields
/// (block align, byte rate) are computed rather than stored so they
/// cannot drift out of sync with the channel count and sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Create a 16-bit PCM format
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        WavFormat {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample (per channel)
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block alignment (bytes per sample frame across all channels)
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Average bytes per second
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Validate format parameters
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::format("Invalid channel count: 0"));
        }

        if self.sample_rate == 0 {
            return Err(Error::format("Invalid sample rate: 0"));
        }

        if self.bits_per_sample != 16 {
            return Err(Error::format(format!(
                "Unsupported bits per sample: {} (only 16-bit PCM is written)",
                self.bits_per_sample
            )));
        }

        Ok(())
    }

    /// Serialize the fmt chunk payload (16 bytes, little-endian)
    pub fn to_bytes(&self) -> [u8; FMT_CHUNK_SIZE as usize] {
        let mut bytes = [0u8; FMT_CHUNK_SIZE as usize];

        bytes[0..2].copy_from_slice(&FORMAT_TAG_PCM.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.channels.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.byte_rate().to_le_bytes());
        bytes[12..14].copy_from_slice(&self.block_align().to_le_bytes());
        bytes[14..16].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_format_calculations() {
        let mono = WavFormat::pcm16(1, 44100);
        assert_eq!(mono.block_align(), 2);
        assert_eq!(mono.byte_rate(), 88200);

        let stereo = WavFormat::pcm16(2, 44100);
        assert_eq!(stereo.block_align(), 4);
        assert_eq!(stereo.byte_rate(), 176400);
    }

    #[test]
    fn test_wav_format_validation() {
        assert!(WavFormat::pcm16(2, 44100).validate().is_ok());
        assert!(WavFormat::pcm16(0, 44100).validate().is_err());
        assert!(WavFormat::pcm16(2, 0).validate().is_err());

        let eight_bit = WavFormat {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 8,
        };
        assert!(eight_bit.validate().is_err());
    }

    #[test]
    fn test_fmt_chunk_serialization() {
        let bytes = WavFormat::pcm16(2, 44100).to_bytes();

        assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), FORMAT_TAG_PCM);
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 2);
        assert_eq!(
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            44100
        );
        assert_eq!(
            u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            176400
        );
        assert_eq!(u16::from_le_bytes([bytes[12], bytes[13]]), 4);
        assert_eq!(u16::from_le_bytes([bytes[14], bytes[15]]), 16);
    }
}
