// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrole command line classifier.
//!
//! Reads frames of detected cards, classifies each frame and prints its
//! category label.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use log::info;
use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

pub mod detection;
pub mod frame;
pub mod labels;
pub mod stats;

pub use frame::{Format, FrameConfig, Report};
pub use stats::Stats;

/// The command to run.
#[derive(Debug)]
pub enum Config {
    /// Classify frames of cards.
    Classify {
        /// A single frame given on the command line.
        values: Vec<i32>,
        /// A file with a frame per line, stdin if none.
        input: Option<PathBuf>,
        /// Frames configuration.
        frames: FrameConfig,
    },
    /// Count hands per category.
    Stats {
        /// Number of random hands, all hands if none.
        samples: Option<usize>,
    },
}

/// Runs a command writing results to stdout.
pub fn run(config: Config) -> Result<()> {
    let mut out = io::stdout().lock();

    match config {
        Config::Classify {
            values,
            input,
            frames,
        } => {
            if !values.is_empty() {
                let report = Report::new(frames.card_codes(&values));
                writeln!(out, "{}", report.render(frames.format)?)?;
            } else if let Some(path) = input {
                info!("Reading frames from {}", path.display());
                let file = File::open(&path)
                    .with_context(|| format!("Cannot open {}", path.display()))?;
                frame::classify_frames(BufReader::new(file), out, &frames)?;
            } else {
                frame::classify_frames(io::stdin().lock(), out, &frames)?;
            }
        }
        Config::Stats { samples } => {
            let stats = match samples {
                Some(samples) => {
                    info!("Sampling {samples} hands");
                    Stats::sample(samples, &mut rand::rng())
                }
                None => {
                    info!("Classifying all hands");
                    Stats::all_hands()
                }
            };

            write!(out, "{stats}")?;
        }
    }

    Ok(())
}
