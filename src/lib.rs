//! qoa2wav - QOA to WAV conversion library
//!
//! qoa2wav converts audio from the QOA ("Quite OK Audio") lossy container
//! into canonical 44-byte-header PCM WAV files.
//!
//! # Architecture
//!
//! The library is organized into a small, linear pipeline:
//!
//! - `codec`: decoding the QOA bitstream to PCM (via the qoaudio crate)
//! - `pcm`: the interleaved 16-bit sample buffer passed between stages
//! - `format`: RIFF/WAV container writing
//! - `convert`: per-file orchestration and directory batch conversion

pub mod codec;
pub mod convert;
pub mod error;
pub mod format;
pub mod pcm;

pub use error::{Error, Result};

/// qoa2wav version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the qoa2wav library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the qoa2wav library with the given configuration
pub fn init(config: Config) -> Result<()> {
    // Initialize logging
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.debug);
    }
}
