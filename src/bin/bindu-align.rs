//! BinduAlign CLI - match model transforms against space transforms
//!
//! Loads two JSON transform sets, runs the offset matcher, exports the
//! discovered offsets, and optionally writes an SVG audit file.
//!
//! # Usage
//!
//! ```bash
//! # With built-in defaults
//! bindu-align --model model.json --space space.json
//!
//! # With a config file and overrides
//! bindu-align --model model.json --space space.json \
//!     --config align.yaml --tolerance 0.05 --svg audit.svg
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use bindu_align::io::{SvgConfig, SvgVisualizer};
use bindu_align::{pipeline, AlignConfig};

/// Match model transforms against space transforms by translation offset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model transform set (JSON)
    #[arg(short, long)]
    model: PathBuf,

    /// Space transform set (JSON)
    #[arg(short, long)]
    space: PathBuf,

    /// Configuration file (YAML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the matching tolerance
    #[arg(short, long)]
    tolerance: Option<f32>,

    /// Override the offsets output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the SVG audit output path
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => AlignConfig::load(path)?,
        None => AlignConfig::default(),
    };

    if let Some(tolerance) = args.tolerance {
        config.matcher.tolerance = tolerance;
    }
    if let Some(output) = args.output {
        config.output.offsets = output;
    }
    if let Some(svg) = args.svg {
        config.output.svg = Some(svg);
    }

    let result = pipeline::align_files(&args.model, &args.space, &config.matcher)?;

    pipeline::export_matches(&result.matching_offsets, &config.output.offsets)?;

    if let Some(ref svg_path) = config.output.svg {
        SvgVisualizer::new(&result, SvgConfig::default())
            .with_title(format!(
                "{} vs {}",
                args.model.display(),
                args.space.display()
            ))
            .save(svg_path)?;
    }

    Ok(())
}
