// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::{Parser, Subcommand};
use log::error;
use std::{path::PathBuf, process};

use handrole_cli::{Config, Format, FrameConfig, frame};

#[derive(Debug, Parser)]
#[command(version, about = "Classifies five cards poker hands from detected card codes.")]
struct Cli {
    /// Enable debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a frame from the arguments or a frame per input line.
    Classify {
        /// The frame values, read frames from input if empty.
        #[arg(allow_negative_numbers = true, value_parser = frame::parse_value)]
        values: Vec<i32>,
        /// Read frames from this file instead of stdin.
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Values are detector class identifiers.
        #[arg(long)]
        class_ids: bool,
        /// The output format.
        #[arg(long, short, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Count hands per category over all hands or random samples.
    Stats {
        /// Number of random hands to sample.
        #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
        samples: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = match cli.command {
        Command::Classify {
            values,
            input,
            class_ids,
            format,
        } => Config::Classify {
            values,
            input,
            frames: FrameConfig { class_ids, format },
        },
        Command::Stats { samples } => Config::Stats {
            samples: samples.map(|s| s as usize),
        },
    };

    if let Err(e) = handrole_cli::run(config) {
        error!("{e:#}");
        process::exit(1);
    }
}
