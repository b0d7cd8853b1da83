//! qoa2wav CLI - QOA to WAV converter
//!
//! Converts a single QOA file, or every QOA file directly inside a
//! directory, to canonical PCM WAV.

use clap::Parser;
use qoa2wav_lib::convert::{convert, convert_dir, ConversionJob};
use qoa2wav_lib::{init, Config};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "qoa2wav")]
#[command(about = "QOA to WAV converter", long_about = None)]
#[command(version)]
struct Cli {
    /// Input QOA file, or a directory containing QOA files
    input: PathBuf,

    /// Output WAV file (single-file mode only; defaults to the input path
    /// with its extension replaced by .wav)
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config {
        verbose: cli.verbose,
        debug: cli.debug,
    };
    init(config)?;

    info!("qoa2wav v{}", qoa2wav_lib::VERSION);

    if !cli.input.exists() {
        anyhow::bail!("Cannot access: {}", cli.input.display());
    }

    if cli.input.is_dir() {
        if cli.output.is_some() {
            anyhow::bail!("An output path cannot be combined with a directory input");
        }
        cmd_convert_dir(&cli.input)
    } else {
        cmd_convert(cli.input, cli.output)
    }
}

fn cmd_convert(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let job = ConversionJob::new(input, output);
    info!(
        "Converting {} -> {}",
        job.input.display(),
        job.output.display()
    );

    let report = convert(&job)?;
    println!("{}", report);
    Ok(())
}

fn cmd_convert_dir(dir: &Path) -> anyhow::Result<()> {
    info!("Converting directory {}", dir.display());

    let report = convert_dir(dir)?;
    if report.is_empty() {
        anyhow::bail!("No .qoa files found in {}", dir.display());
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(converted) => println!("{}", converted),
            Err(e) => eprintln!("Failed: {}: {}", outcome.input.display(), e),
        }
    }
    println!(
        "Converted {} of {} files",
        report.succeeded(),
        report.outcomes.len()
    );

    if report.failed() > 0 {
        anyhow::bail!("{} file(s) failed to convert", report.failed());
    }
    Ok(())
}
