//! Interleaved 16-bit PCM sample buffers

use crate::error::{Error, Result};

/// A fully decoded block of 16-bit PCM audio.
///
/// Samples are interleaved by channel (L-R-L-R... for stereo). The buffer
/// always holds a whole number of frames, where one frame is one sample per
/// channel at a single instant.
#[derive(Debug, Clone)]
pub struct PcmBuffer {
    samples: Vec<i16>,
    channels: u16,
    sample_rate: u32,
}

impl PcmBuffer {
    /// Create a buffer from interleaved samples and stream parameters.
    ///
    /// A zero-frame buffer is valid. Fails if the channel count or sample
    /// rate is zero, or if the sample count is not a multiple of the channel
    /// count.
    pub fn new(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::format("Invalid channel count: 0"));
        }
        if sample_rate == 0 {
            return Err(Error::format("Invalid sample rate: 0"));
        }
        if samples.len() % channels as usize != 0 {
            return Err(Error::format(format!(
                "Sample count {} is not a multiple of channel count {}",
                samples.len(),
                channels
            )));
        }

        Ok(PcmBuffer {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Interleaved samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of sample frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// True when the buffer holds no frames
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}
