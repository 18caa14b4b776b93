// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Frames of detected cards.
//!
//! A frame is a line of integers separated by whitespace or commas, with
//! optional enclosing brackets, for example `[9, 10, 11, 12, 0]`.
use anyhow::{Result, anyhow};
use log::{info, warn};
use serde::Serialize;
use std::{
    io::{BufRead, Write},
    num::{IntErrorKind, ParseIntError},
};

use handrole_eval::{Category, classify, sanitize};

use crate::{detection, labels};

/// Output format for classified frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One human readable line per frame.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Frames processing configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameConfig {
    /// Frame values are detector class identifiers instead of card codes.
    pub class_ids: bool,
    /// The output format.
    pub format: Format,
}

impl FrameConfig {
    /// Converts the frame values to card codes.
    pub fn card_codes(&self, values: &[i32]) -> Vec<i32> {
        if self.class_ids {
            detection::card_codes(values)
        } else {
            values.to_vec()
        }
    }
}

/// The classification of a frame.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The card codes given to the classifier.
    pub codes: Vec<i32>,
    /// The labels of the valid distinct cards.
    pub cards: Vec<String>,
    /// The hand category.
    pub category: Category,
    /// The category label.
    pub label: &'static str,
}

impl Report {
    /// Classifies the card codes.
    pub fn new(codes: Vec<i32>) -> Self {
        let cards = sanitize(&codes)
            .into_iter()
            .map(labels::code_label)
            .collect();
        let category = classify(&codes);

        Self {
            codes,
            cards,
            category,
            label: labels::category_label(category),
        }
    }

    /// Renders this report.
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Text => Ok(format!(
                "{:?} [{}] {}",
                self.codes,
                self.cards.join(", "),
                self.label
            )),
            Format::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Value used for integers that don't fit an `i32`, dropped by the sanitizer.
const OUT_OF_RANGE: i32 = -1;

/// Parses a single frame value.
///
/// Integers too large for an `i32` are out of range card codes and parse to
/// a negative value, only non integer tokens are errors.
pub fn parse_value(s: &str) -> Result<i32, ParseIntError> {
    match s.parse::<i32>() {
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(OUT_OF_RANGE)
        }
        res => res,
    }
}

/// Parses a frame line into integers.
pub fn parse_frame(line: &str) -> Result<Vec<i32>> {
    line.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_value(s).map_err(|e| anyhow!("invalid card value '{s}': {e}")))
        .collect()
}

/// Classifies a frame per line from the reader and writes a report per frame.
///
/// Lines that fail to parse are logged and skipped, returns the number of
/// classified frames.
pub fn classify_frames<R, W>(reader: R, mut writer: W, config: &FrameConfig) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut frames = 0;

    for (idx, line) in reader.split(b'\n').enumerate() {
        // Invalid UTF-8 turns into replacement chars that fail to parse.
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        let values = match parse_frame(&line) {
            Ok(values) => values,
            Err(e) => {
                warn!("Line {}: {e}", idx + 1);
                continue;
            }
        };

        let report = Report::new(config.card_codes(&values));
        writeln!(writer, "{}", report.render(config.format)?)?;
        frames += 1;
    }

    writer.flush()?;
    info!("Classified {frames} frames");

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frames() {
        assert_eq!(parse_frame("1 2 3").unwrap(), [1, 2, 3]);
        assert_eq!(parse_frame("[9, 10, 11, 12, 0]").unwrap(), [9, 10, 11, 12, 0]);
        assert_eq!(parse_frame(" -1,,53\t7 ").unwrap(), [-1, 53, 7]);
        assert!(parse_frame("").unwrap().is_empty());
        assert!(parse_frame("[]").unwrap().is_empty());
        assert!(parse_frame("1 two 3").is_err());
        assert!(parse_frame("1.5").is_err());
        assert!(parse_frame("\u{FFFD}").is_err());
    }

    #[test]
    fn parse_overflowing_values() {
        assert_eq!(parse_value("99999999999"), Ok(OUT_OF_RANGE));
        assert_eq!(parse_value("-99999999999999999999999"), Ok(OUT_OF_RANGE));
        assert_eq!(parse_value("52"), Ok(52));
        assert!(parse_value("5x").is_err());
        assert!(parse_value("").is_err());

        let values = parse_frame("9 10 11 12 0 99999999999").unwrap();
        assert_eq!(values, [9, 10, 11, 12, 0, OUT_OF_RANGE]);
        assert_eq!(Report::new(values).category, Category::RoyalFlush);
    }

    #[test]
    fn report_text() {
        let report = Report::new(vec![9, 10, 11, 12, 0]);
        assert_eq!(report.category, Category::RoyalFlush);
        assert_eq!(report.cards, ["CL_A", "CL_10", "CL_J", "CL_Q", "CL_K"]);
        assert_eq!(
            report.render(Format::Text).unwrap(),
            "[9, 10, 11, 12, 0] [CL_A, CL_10, CL_J, CL_Q, CL_K] ROYAL FLUSH (1)"
        );
    }

    #[test]
    fn report_json() {
        let report = Report::new(vec![52, 1, 2]);
        let json = report.render(Format::Json).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert_eq!(value["codes"], serde_json::json!([52, 1, 2]));
        assert_eq!(value["cards"], serde_json::json!(["CL_2", "CL_3", "JOKER"]));
        assert_eq!(value["category"], "NoPair");
        assert_eq!(value["label"], "NO PAIR (10)");
    }

    #[test]
    fn class_id_frames() {
        let config = FrameConfig {
            class_ids: true,
            format: Format::Text,
        };

        // Background and joker classes.
        assert_eq!(config.card_codes(&[0, 1, 40, 41]), [0, 52, 39]);
        assert_eq!(FrameConfig::default().card_codes(&[0, 1, 40]), [0, 1, 40]);
    }
}
