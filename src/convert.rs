//! Conversion orchestration
//!
//! One [`ConversionJob`] is one input file, fully read into memory, decoded
//! through the [`AudioDecoder`] seam and serialized back out as WAV. Jobs
//! carry no state across each other; batch mode is a sequence of independent
//! jobs whose outcomes are collected, never an all-or-nothing run.

use crate::codec::{create_decoder, AudioDecoder};
use crate::error::{Error, Result};
use crate::format::wav;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extension of the input files this tool consumes
pub const QOA_EXTENSION: &str = "qoa";

/// Extension given to derived output paths
pub const WAV_EXTENSION: &str = "wav";

/// One input -> output file pair
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Path of the QOA file to read
    pub input: PathBuf,
    /// Path of the WAV file to write
    pub output: PathBuf,
}

impl ConversionJob {
    /// Create a job, deriving the output path when none is given
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| derive_output_path(&input));
        ConversionJob { input, output }
    }
}

/// Derive an output path from an input path
///
/// The input's extension is replaced with `wav`; an extensionless input gets
/// `.wav` appended instead.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut output = input.to_path_buf();
    output.set_extension(WAV_EXTENSION);
    output
}

/// Result of a successful conversion, for diagnostic display
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Input path
    pub input: PathBuf,
    /// Output path
    pub output: PathBuf,
    /// Number of sample frames written
    pub frames: usize,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Size of the WAV data chunk in bytes
    pub data_size: usize,
}

impl ConversionReport {
    /// Duration of the converted audio in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {} frames, {} channels, {} Hz ({:.2}s)",
            self.input.display(),
            self.output.display(),
            self.frames,
            self.channels,
            self.sample_rate,
            self.duration_seconds()
        )
    }
}

/// Convert a single file with the default QOA decoder
pub fn convert(job: &ConversionJob) -> Result<ConversionReport> {
    let decoder = create_decoder("qoa")?;
    convert_with(decoder.as_ref(), job)
}

/// Convert a single file with the given decoder
///
/// The input is read whole, decoded and re-encoded in memory, then written
/// in one pass. Nothing is created on disk until the decode has succeeded,
/// and a partially written output is removed before the error propagates.
pub fn convert_with(decoder: &dyn AudioDecoder, job: &ConversionJob) -> Result<ConversionReport> {
    debug!("Reading {}", job.input.display());
    let data = fs::read(&job.input)?;

    let buffer = decoder.decode(&data)?;
    drop(data);

    let wav_data = wav::encode_wav(&buffer)?;
    debug!(
        "Writing {} ({} bytes)",
        job.output.display(),
        wav_data.len()
    );

    if let Err(e) = fs::write(&job.output, &wav_data) {
        // Never leave a truncated output behind
        let _ = fs::remove_file(&job.output);
        return Err(Error::Io(e));
    }

    Ok(ConversionReport {
        input: job.input.clone(),
        output: job.output.clone(),
        frames: buffer.frame_count(),
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        data_size: wav_data.len() - wav::HEADER_SIZE,
    })
}

/// Outcome of one job within a batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Input path of the job
    pub input: PathBuf,
    /// The job's result
    pub result: Result<ConversionReport>,
}

/// Collected outcomes of a batch conversion
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-file outcomes, in path order
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Number of files converted successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// True when no matching input files were found
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Convert every QOA file directly inside a directory
///
/// Each file is an independent job with a derived output path; one file's
/// failure is recorded and the rest of the batch keeps going. Only the
/// directory's immediate children are considered, matched on a
/// case-insensitive `qoa` extension.
pub fn convert_dir(dir: &Path) -> Result<BatchReport> {
    if !dir.is_dir() {
        return Err(Error::invalid_input(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut report = BatchReport::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        let is_qoa = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(QOA_EXTENSION));
        if !is_qoa {
            debug!("Skipping {}", path.display());
            continue;
        }

        let job = ConversionJob::new(path, None);
        let result = convert(&job);
        report.outcomes.push(BatchOutcome {
            input: job.input,
            result,
        });
    }

    Ok(report)
}
