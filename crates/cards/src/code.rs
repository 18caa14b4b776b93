// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card codes and input sanitization.
use serde::{Deserialize, Serialize};

use crate::Card;

/// A valid card code in the range `[0, 52]`.
///
/// Codes `0..=51` are the standard cards and [CardCode::JOKER] is the joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardCode(u8);

impl CardCode {
    /// The joker code.
    pub const JOKER: CardCode = CardCode(52);

    /// Creates a card code, returns `None` if the value is out of range.
    pub fn new(value: i32) -> Option<CardCode> {
        u8::try_from(value)
            .ok()
            .filter(|&v| v <= Self::JOKER.0)
            .map(CardCode)
    }

    /// Creates a card code from a value known to be in range.
    pub(crate) fn from_value(value: u8) -> CardCode {
        debug_assert!(value <= Self::JOKER.0);
        CardCode(value)
    }

    /// The code integer value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Checks if this is the joker code.
    pub fn is_joker(&self) -> bool {
        *self == Self::JOKER
    }

    /// Decodes this code into a card, returns `None` for the joker.
    pub fn decode(&self) -> Option<Card> {
        Card::from_code(*self)
    }
}

impl From<Card> for CardCode {
    fn from(card: Card) -> Self {
        card.code()
    }
}

impl From<CardCode> for i32 {
    fn from(code: CardCode) -> Self {
        code.0 as i32
    }
}

/// Removes out of range values and duplicates from raw card codes.
///
/// The returned codes are sorted in ascending order, the joker is kept.
pub fn sanitize(codes: &[i32]) -> Vec<CardCode> {
    let mut codes = codes
        .iter()
        .filter_map(|&v| CardCode::new(v))
        .collect::<Vec<_>>();
    codes.sort_unstable();
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn values(codes: &[CardCode]) -> Vec<i32> {
        codes.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn code_range() {
        assert_eq!(CardCode::new(-1), None);
        assert_eq!(CardCode::new(53), None);
        assert_eq!(CardCode::new(i32::MIN), None);
        assert_eq!(CardCode::new(i32::MAX), None);
        assert_eq!(CardCode::new(0).map(|c| c.value()), Some(0));
        assert_eq!(CardCode::new(52), Some(CardCode::JOKER));
        assert!(CardCode::JOKER.is_joker());
        assert_eq!(CardCode::JOKER.decode(), None);
    }

    #[test]
    fn sanitize_codes() {
        assert!(sanitize(&[]).is_empty());
        assert!(sanitize(&[-5, 53, 100, -1]).is_empty());

        let codes = sanitize(&[52, 7, -1, 0, 7, 99, 3, 52, 0]);
        assert_eq!(values(&codes), [0, 3, 7, 52]);

        let codes = sanitize(&[51, 40, 30, 20, 10]);
        assert_eq!(values(&codes), [10, 20, 30, 40, 51]);
    }

    #[test]
    fn sanitize_properties() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..1_000 {
            let len = rng.random_range(0..12);
            let raw = (0..len)
                .map(|_| rng.random_range(-10..70))
                .collect::<Vec<i32>>();

            let codes = sanitize(&raw);
            assert!(codes.windows(2).all(|w| w[0] < w[1]));
            assert!(codes.iter().all(|c| c.value() <= 52));

            // Every valid input value survives.
            let kept = values(&codes);
            assert!(
                raw.iter()
                    .filter(|v| (0..=52).contains(*v))
                    .all(|v| kept.contains(v))
            );

            // Idempotent.
            assert_eq!(sanitize(&kept), codes);
        }
    }

    #[test]
    fn decode_all_codes() {
        for value in 0..52 {
            let code = CardCode::new(value).unwrap();
            let card = code.decode().unwrap();
            assert_eq!(code.decode(), Some(card));
            assert_eq!(card.suit() as i32, value / 13);
            assert_eq!(card.code(), code);

            let rank = card.rank().value() as i32;
            assert!((1..=13).contains(&rank));
            assert_eq!(rank % 13, value % 13);
        }
    }
}
