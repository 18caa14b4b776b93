// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrole cards types.
//!
//! Card detectors report cards as integer codes in `[0, 52]`, where 52 is the
//! joker. This crate turns raw detector output into validated [CardCode]s:
//!
//! ```
//! # use handrole_cards::{sanitize, CardCode};
//! let codes = sanitize(&[12, -1, 7, 12, 60, 52]);
//! let values = codes.iter().map(|c| c.value()).collect::<Vec<_>>();
//! assert_eq!(values, [7, 12, 52]);
//! ```
//!
//! and decodes them into [Card]s with a [Rank] and a [Suit]:
//!
//! ```
//! # use handrole_cards::{Card, CardCode, Rank, Suit};
//! let code = CardCode::new(13).unwrap();
//! assert_eq!(code.decode(), Some(Card::new(Rank::Ace, Suit::Diamonds)));
//! assert_eq!(CardCode::JOKER.decode(), None);
//! ```
//!
//! The [Deck] type iterates and samples k-cards hands, for example to count
//! all 5 cards hands:
//!
//! ```no_run
//! # use handrole_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod code;
pub use code::{CardCode, sanitize};

mod deck;
pub use deck::{Card, Deck, Rank, Suit};
