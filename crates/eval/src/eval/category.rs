// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};

/// A five cards hand category.
///
/// Categories are ordered from the most common [Category::NoPair] to the
/// rarest [Category::RoyalFlush].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No pair, also used for inputs that are not a hand.
    NoPair = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the rarest to the most common.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            NoPair,
        ]
        .into_iter()
    }

    /// The category position from 1 for a royal flush to 10 for no pair.
    pub fn position(&self) -> usize {
        Self::COUNT - *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_order() {
        let categories = Category::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), Category::COUNT);
        assert!(categories.windows(2).all(|w| w[0] > w[1]));

        let positions = categories.iter().map(|c| c.position()).collect::<Vec<_>>();
        assert_eq!(positions, (1..=10).collect::<Vec<_>>());
    }
}
