//! ink2glyphs - Extract per-character samples from a handwriting capture
//!
//! A command line tool that reads a drawing JSON file (`{points, width,
//! height}`, points as `{x, y, pressure?}` objects) together with the
//! characters the drawing is expected to contain, runs character
//! segmentation, and writes the per-character sample map as JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inkglyph_core::{DrawingData, ExtractParams, extract_characters_with_params};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Extract per-character drawing samples from a handwritten sentence.
#[derive(Parser, Debug)]
#[command(name = "ink2glyphs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the drawing JSON file
    file: PathBuf,

    /// The characters the drawing is expected to contain
    #[arg(short = 'c', long = "chars")]
    chars: String,

    /// Output file ("-" for stdout)
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Pretty-print the output JSON
    #[arg(short = 'p', long, action = ArgAction::SetTrue)]
    pretty: bool,

    // === Segmentation options ===
    /// Pen-lift distance threshold in canvas units
    #[arg(long = "pen-lift", default_value = "15.0")]
    pen_lift: f64,

    /// Horizontal gap below which strokes cluster into one character
    #[arg(long = "group-gap", default_value = "30.0")]
    group_gap: f64,

    /// Estimated width of a single drawn character
    #[arg(long = "char-width", default_value = "30.0")]
    char_width: f64,

    /// Fraction of the canvas a normalized character fills
    #[arg(long = "fill-ratio", default_value = "0.8")]
    fill_ratio: f64,
}

fn build_params(args: &Args) -> ExtractParams {
    ExtractParams {
        pen_lift_distance: args.pen_lift,
        group_gap: args.group_gap,
        est_char_width: args.char_width,
        fill_ratio: args.fill_ratio,
        ..ExtractParams::default()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let drawing: DrawingData = serde_json::from_str(&data)
        .with_context(|| format!("invalid drawing JSON in {}", args.file.display()))?;

    let samples = extract_characters_with_params(&drawing, &args.chars, &build_params(&args));

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    if args.pretty {
        serde_json::to_writer_pretty(&mut output, &samples)?;
    } else {
        serde_json::to_writer(&mut output, &samples)?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
