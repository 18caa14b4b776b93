// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrole five cards hand classifier.
//!
//! The classifier takes the card codes reported by a card detector, drops
//! invalid and duplicate codes, and finds the category of the resulting five
//! cards hand:
//!
//! ```
//! # use handrole_eval::*;
//! // TC, JC, QC, KC, AC with some detector noise.
//! let category = classify(&[9, 10, 11, 12, 0, 11, -1, 77]);
//! assert_eq!(category, Category::RoyalFlush);
//!
//! // Not enough cards.
//! assert_eq!(classify(&[9, 10, 11]), Category::NoPair);
//! assert_eq!(evaluate(&[9, 10, 11]), Err(HandError::CardCount(3)));
//! ```
//!
//! A [Hand] can also be built from [Card]s:
//!
//! ```
//! # use handrole_eval::*;
//! // AC, 2C, 3C, 4C, 5C
//! let cards = Deck::default().into_iter().take(5).collect::<Vec<_>>();
//! let hand = Hand::try_from(&cards[..]).unwrap();
//! assert_eq!(hand.category(), Category::StraightFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, Hand, HandError, classify, evaluate};

// Reexport cards types.
pub use handrole_cards::{Card, CardCode, Deck, Rank, Suit, sanitize};
