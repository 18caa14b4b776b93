// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::CardCode;

/// A playing card decoded from a [CardCode].
///
/// A card code packs the suit and the rank as `suit * 13 + rank % 13`, so the
/// ace of a suit sits at the lowest slot of that suit:
///
/// ```text
///   code  0      1      2    ..  12     13     14   ..  51
///   card  AC     2C     3C   ..  KC     AD     2D   ..  KS
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Decodes a non joker card code.
    ///
    /// Returns `None` for the joker.
    pub fn from_code(code: CardCode) -> Option<Card> {
        if code.is_joker() {
            return None;
        }

        let value = code.value();
        let suit = Suit::from_index(value / Rank::COUNT);
        let rank = Rank::from_index(value % Rank::COUNT);
        Some(Card::new(rank, suit))
    }

    /// The code this card decodes from.
    pub fn code(&self) -> CardCode {
        let value = self.suit as u8 * Rank::COUNT + self.rank as u8 % Rank::COUNT;
        CardCode::from_value(value)
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// Card rank.
///
/// The discriminant is the rank value used by the card codes, the ace is the
/// highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 1,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks in a suit.
    pub const COUNT: u8 = 13;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 1 for a deuce up to 13 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Maps a `code % 13` remainder to a rank, a zero remainder is an ace.
    ///
    /// Panics if index is not 0 <= index < 13.
    fn from_index(index: u8) -> Rank {
        match index {
            0 => Rank::Ace,
            1 => Rank::Deuce,
            2 => Rank::Trey,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("Invalid rank index {index}"),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Panics if index is not 0 <= index < 4.
    fn from_index(index: u8) -> Suit {
        match index {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => panic!("Invalid suit index {index}"),
        }
    }
}

/// A cards Deck without the joker.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Algorithm L from TAOCP 4a, c[0..k] holds the current combination
        // with two sentinels at c[k] and c[k + 1].
        let mut c = (0..k).chain([n, 0]).collect::<Vec<_>>();
        let mut h = vec![Card::new(Rank::Ace, Suit::Spades); k];

        loop {
            for (card, &pos) in h.iter_mut().zip(&c[..k]) {
                *card = self.cards[pos];
            }

            f(&h);

            let mut j = 0;
            while c[j] + 1 == c[j + 1] {
                c[j] = j;
                j += 1;
            }

            if j >= k {
                break;
            }

            c[j] += 1;
        }
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, n: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..n {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = (0..Deck::SIZE as u8)
            .filter_map(|value| Card::from_code(CardCode::from_value(value)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
