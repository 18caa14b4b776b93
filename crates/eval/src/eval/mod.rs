// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
//!
//! Raw card codes are sanitized, decoded, and checked against the hand
//! patterns from the rarest category to the most common one.
//!
//! It provides a [classify] function that never fails and reports any input
//! that is not a five cards hand as [Category::NoPair], and an [evaluate]
//! function that returns a [HandError] for the same inputs.
use log::debug;
use thiserror::Error;

use handrole_cards::{Card, Rank, Suit, sanitize};

mod category;
pub use category::Category;

pub mod patterns;
use patterns::{Multiplicity, is_flush, is_straight, pair_count};

/// Reasons a set of card codes is not a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Not exactly five valid cards.
    #[error("expected {size} cards found {0}", size = Hand::SIZE)]
    CardCount(usize),
    /// The joker is one of the cards.
    #[error("joker is not allowed in a hand")]
    Joker,
    /// The same card appears more than once.
    #[error("duplicate card {0:?}")]
    Duplicate(Card),
}

/// A five cards hand with distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five distinct cards.
    pub fn new(cards: [Card; 5]) -> Result<Self, HandError> {
        for (i, c) in cards.iter().enumerate() {
            if cards[i + 1..].contains(c) {
                return Err(HandError::Duplicate(*c));
            }
        }

        Ok(Self { cards })
    }

    /// Creates a hand from raw card codes.
    ///
    /// Out of range and duplicate codes are dropped before checking that
    /// exactly five cards and no joker are left.
    pub fn from_codes(codes: &[i32]) -> Result<Self, HandError> {
        let codes = sanitize(codes);
        if codes.len() != Self::SIZE {
            return Err(HandError::CardCount(codes.len()));
        }

        let mut cards = [Card::new(Rank::Ace, Suit::Spades); Self::SIZE];
        for (card, code) in cards.iter_mut().zip(&codes) {
            *card = code.decode().ok_or(HandError::Joker)?;
        }

        // Sanitized codes are distinct so are the decoded cards.
        Ok(Self { cards })
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Computes this hand category.
    pub fn category(&self) -> Category {
        let mut ranks = self.cards.map(|c| c.rank());
        ranks.sort_unstable();

        match Multiplicity::from_pair_count(pair_count(&ranks)) {
            Multiplicity::FourOfAKind => Category::FourOfAKind,
            Multiplicity::FullHouse => Category::FullHouse,
            Multiplicity::ThreeOfAKind => Category::ThreeOfAKind,
            Multiplicity::TwoPair => Category::TwoPair,
            Multiplicity::OnePair => Category::OnePair,
            Multiplicity::Distinct => {
                let mut suits = self.cards.map(|c| c.suit());
                suits.sort_unstable();

                let flush = is_flush(&suits);
                if is_straight(&ranks) {
                    if flush && ranks[0] == Rank::Ten {
                        Category::RoyalFlush
                    } else if flush {
                        Category::StraightFlush
                    } else {
                        Category::Straight
                    }
                } else if flush {
                    Category::Flush
                } else {
                    Category::NoPair
                }
            }
        }
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; 5]>::try_from(cards).map_err(|_| HandError::CardCount(cards.len()))?;
        Hand::new(cards)
    }
}

/// Evaluates raw card codes, returns an error if they don't make a hand.
pub fn evaluate(codes: &[i32]) -> Result<Category, HandError> {
    let hand = Hand::from_codes(codes)?;
    let category = hand.category();
    debug!("Cards {:?} category {:?}", hand.cards(), category);
    Ok(category)
}

/// Classifies raw card codes.
///
/// Any input that is not a hand of five cards without the joker is
/// classified as [Category::NoPair].
pub fn classify(codes: &[i32]) -> Category {
    evaluate(codes).unwrap_or_else(|e| {
        debug!("Codes {codes:?} not evaluable: {e}");
        Category::NoPair
    })
}
