// ABOUTME: Offline dataset seeder producing an ML-ready CSV of labeled session rows
// ABOUTME: Synthesizes seeded uniform-random athlete rows and labels them with the calorie model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Dataset seeder for the Tartan platform.
//!
//! Generates a labeled, ML-ready CSV for the external learning pipeline
//! without touching any live user data.
//!
//! Usage:
//! ```bash
//! # Generate the default 2000 rows
//! cargo run --bin seed-dataset
//!
//! # More rows, fixed seed, custom output path
//! cargo run --bin seed-dataset -- --rows 5000 --seed 7 --output throws.csv
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use tartan::intelligence::dataset::DatasetRow;
use tartan::intelligence::nutrition_calculator::Gender;
use tartan::intelligence::physiological_constants::dataset::NOISE_FRACTION;
use tartan::logging::LoggingConfig;
use tartan_core::models::{Discipline, Intensity, SessionType};

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),
}

type SeedResult<T> = Result<T, SeedError>;

#[derive(Parser)]
#[command(
    name = "seed-dataset",
    about = "Tartan ML dataset seeder",
    long_about = "Generate a labeled athlete-session CSV for the external learning pipeline"
)]
struct SeedArgs {
    /// Number of rows to generate
    #[arg(long, default_value = "2000")]
    rows: usize,

    /// Random seed for reproducible data
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output CSV path
    #[arg(long, default_value = "athlete_ml_dataset.csv")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

const DISCIPLINES: [Discipline; 12] = [
    Discipline::Sprint100m,
    Discipline::Sprint200m,
    Discipline::Sprint400m,
    Discipline::Run800m,
    Discipline::Run1500m,
    Discipline::LongJump,
    Discipline::HighJump,
    Discipline::TripleJump,
    Discipline::ShotPut,
    Discipline::Discus,
    Discipline::Javelin,
    Discipline::Hammer,
];
const SESSION_TYPES: [SessionType; 3] = [
    SessionType::Training,
    SessionType::Competition,
    SessionType::Recovery,
];
const INTENSITIES: [Intensity; 3] = [Intensity::Low, Intensity::Moderate, Intensity::High];

fn main() -> anyhow::Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    logging.init().map_err(|e| anyhow::anyhow!(e))?;

    if args.rows == 0 {
        return Err(SeedError::Validation("--rows must be positive".into()).into());
    }

    info!(rows = args.rows, seed = args.seed, "synthesizing dataset");
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut rows = synthesize_rows(&mut rng, args.rows);

    // Sample label noise sequentially so the seed pins the full output,
    // then label rows in parallel.
    let noise: Vec<f64> = (0..rows.len())
        .map(|_| rng.gen_range(-NOISE_FRACTION..=NOISE_FRACTION))
        .collect();
    rows.par_iter_mut()
        .zip(noise.par_iter())
        .for_each(|(row, noise)| row.label(*noise));

    write_csv(&args.output, &rows)?;
    report(&rows);
    info!(path = %args.output.display(), "dataset ready");
    Ok(())
}

/// Uniform-random feature rows over the plausible athlete ranges
fn synthesize_rows(rng: &mut StdRng, count: usize) -> Vec<DatasetRow> {
    (0..count)
        .map(|_| DatasetRow {
            age: rng.gen_range(15..41),
            gender: if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
            height_cm: round1(rng.gen_range(155.0..200.0)),
            weight_kg: round1(rng.gen_range(45.0..110.0)),
            discipline: DISCIPLINES[rng.gen_range(0..DISCIPLINES.len())],
            session_type: SESSION_TYPES[rng.gen_range(0..SESSION_TYPES.len())],
            duration_minutes: rng.gen_range(20..151),
            intensity: INTENSITIES[rng.gen_range(0..INTENSITIES.len())],
            distance_m: rng.gen_range(0..15001),
            effort_count: rng.gen_range(1..21),
            target_calories: 0,
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn write_csv(path: &Path, rows: &[DatasetRow]) -> SeedResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", DatasetRow::csv_header())?;
    for row in rows {
        writeln!(writer, "{}", row.to_csv_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Quality report over the generated labels
fn report(rows: &[DatasetRow]) {
    let labels: Vec<f64> = rows.iter().map(|r| f64::from(r.target_calories)).collect();
    let mean = labels.iter().sum::<f64>() / labels.len() as f64;
    let min = labels.iter().copied().fold(f64::INFINITY, f64::min);
    let max = labels.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    info!(
        rows = rows.len(),
        label_mean = format!("{mean:.1}"),
        label_min = min,
        label_max = max,
        "dataset quality report"
    );
}
