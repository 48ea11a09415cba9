//! dumpink - Dump detected strokes and character bounds from a drawing
//!
//! Diagnostic companion to ink2glyphs: shows what the segmenter and the
//! bounds calculator see for a given capture, which is the quickest way to
//! tune the pen-lift and grouping thresholds for a new input device.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use inkglyph_core::clusters::compute_character_bounds;
use inkglyph_core::extract::unique_characters;
use inkglyph_core::geometry::BBox;
use inkglyph_core::strokes::segment_strokes;
use inkglyph_core::{DrawingData, DrawingPoint, ExtractParams};
use serde::Serialize;
use std::path::PathBuf;

/// What to dump.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Mode {
    /// Detected strokes, one point list each (default)
    #[default]
    Strokes,
    /// Computed per-character bounding boxes
    Bounds,
}

/// Dump segmentation internals for a drawing JSON file.
#[derive(Parser, Debug)]
#[command(name = "dumpink")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the drawing JSON file
    file: PathBuf,

    /// What to dump
    #[arg(short = 'm', long, value_enum, default_value = "strokes")]
    mode: Mode,

    /// Expected characters; required for bounds mode
    #[arg(short = 'c', long = "chars")]
    chars: Option<String>,

    /// Pen-lift distance threshold in canvas units
    #[arg(long = "pen-lift", default_value = "15.0")]
    pen_lift: f64,
}

#[derive(Serialize)]
struct StrokeReport {
    stroke_count: usize,
    strokes: Vec<Vec<DrawingPoint>>,
}

#[derive(Serialize)]
struct BoundsReport {
    expected_count: usize,
    bounds: Vec<BBox>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let drawing: DrawingData = serde_json::from_str(&data)
        .with_context(|| format!("invalid drawing JSON in {}", args.file.display()))?;

    let params = ExtractParams {
        pen_lift_distance: args.pen_lift,
        ..ExtractParams::default()
    };
    let strokes = segment_strokes(&drawing.points, &params);

    match args.mode {
        Mode::Strokes => {
            let report = StrokeReport {
                stroke_count: strokes.len(),
                strokes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Mode::Bounds => {
            let chars = args
                .chars
                .as_deref()
                .context("bounds mode requires --chars")?;
            let targets = unique_characters(chars);
            let bounds = compute_character_bounds(&strokes, targets.len(), &params);
            let report = BoundsReport {
                expected_count: targets.len(),
                bounds,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
