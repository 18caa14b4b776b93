// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand patterns.
//!
//! These predicates look at ranks and suits separately, the hand classifier
//! combines them to find the hand category.
use handrole_cards::{Rank, Suit};

/// The ranks distribution shape of a five cards hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// All ranks are different.
    Distinct,
    /// Ranks distributed as 2+1+1+1.
    OnePair,
    /// Ranks distributed as 2+2+1.
    TwoPair,
    /// Ranks distributed as 3+1+1.
    ThreeOfAKind,
    /// Ranks distributed as 3+2.
    FullHouse,
    /// Ranks distributed as 4+1.
    FourOfAKind,
}

impl Multiplicity {
    /// Maps the number of equal rank pairs to a shape.
    ///
    /// Over five cards every shape has a distinct pairs count.
    pub fn from_pair_count(count: u8) -> Multiplicity {
        match count {
            6 => Multiplicity::FourOfAKind,
            4 => Multiplicity::FullHouse,
            3 => Multiplicity::ThreeOfAKind,
            2 => Multiplicity::TwoPair,
            1 => Multiplicity::OnePair,
            _ => Multiplicity::Distinct,
        }
    }

    /// Maps the rank group sizes, sorted in descending order, to a shape.
    pub fn from_groups(groups: &[u8]) -> Multiplicity {
        match groups {
            [4, ..] => Multiplicity::FourOfAKind,
            [3, 2, ..] => Multiplicity::FullHouse,
            [3, ..] => Multiplicity::ThreeOfAKind,
            [2, 2, ..] => Multiplicity::TwoPair,
            [2, ..] => Multiplicity::OnePair,
            _ => Multiplicity::Distinct,
        }
    }
}

/// Counts the pairs of cards with the same rank.
///
/// A group of k cards with the same rank adds `k * (k - 1) / 2` pairs.
pub fn pair_count(ranks: &[Rank; 5]) -> u8 {
    let mut count = 0;
    for (i, r) in ranks.iter().enumerate() {
        count += ranks[i + 1..].iter().filter(|&other| other == r).count() as u8;
    }

    count
}

/// Groups the ranks and returns the group sizes in descending order.
pub fn rank_groups(ranks: &[Rank; 5]) -> Vec<u8> {
    let mut counts = [0u8; Rank::COUNT as usize];
    for r in ranks {
        counts[r.value() as usize - 1] += 1;
    }

    let mut groups = counts.into_iter().filter(|&c| c > 0).collect::<Vec<_>>();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// Checks if all the suits are the same.
pub fn is_flush(suits: &[Suit; 5]) -> bool {
    suits.windows(2).all(|w| w[0] == w[1])
}

/// Checks if ranks sorted in ascending order form a straight.
///
/// The ace sorts high but plays low in the A-2-3-4-5 wheel.
pub fn is_straight(ranks: &[Rank; 5]) -> bool {
    let gap = |i: usize| ranks[i + 1].value() as i16 - ranks[i].value() as i16;

    if !(0..3).all(|i| gap(i) == 1) {
        return false;
    }

    gap(3) == 1 || (ranks[3] == Rank::Five && ranks[4] == Rank::Ace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn count_pairs() {
        assert_eq!(pair_count(&[Ace, Ace, Ace, Ace, King]), 6);
        assert_eq!(pair_count(&[Ten, Ace, Ten, Ace, Ten]), 4);
        assert_eq!(pair_count(&[Six, Six, Six, Deuce, King]), 3);
        assert_eq!(pair_count(&[Six, Six, Deuce, Deuce, King]), 2);
        assert_eq!(pair_count(&[Six, Trey, Deuce, Deuce, King]), 1);
        assert_eq!(pair_count(&[Six, Trey, Deuce, Four, King]), 0);
    }

    #[test]
    fn group_ranks() {
        assert_eq!(rank_groups(&[Ace, Ace, Ace, Ace, King]), [4, 1]);
        assert_eq!(rank_groups(&[Ten, Ace, Ten, Ace, Ten]), [3, 2]);
        assert_eq!(rank_groups(&[Six, Trey, Deuce, Deuce, King]), [2, 1, 1, 1]);
        assert_eq!(rank_groups(&[Six, Trey, Deuce, Four, King]), [1, 1, 1, 1, 1]);
    }

    #[test]
    fn multiplicity_shapes() {
        let shapes: [(Vec<u8>, u8, Multiplicity); 6] = [
            (vec![4, 1], 6, Multiplicity::FourOfAKind),
            (vec![3, 2], 4, Multiplicity::FullHouse),
            (vec![3, 1, 1], 3, Multiplicity::ThreeOfAKind),
            (vec![2, 2, 1], 2, Multiplicity::TwoPair),
            (vec![2, 1, 1, 1], 1, Multiplicity::OnePair),
            (vec![1, 1, 1, 1, 1], 0, Multiplicity::Distinct),
        ];

        for (groups, count, shape) in shapes {
            assert_eq!(Multiplicity::from_groups(&groups), shape);
            assert_eq!(Multiplicity::from_pair_count(count), shape);
        }
    }

    #[test]
    fn flush() {
        assert!(is_flush(&[Suit::Hearts; 5]));
        assert!(!is_flush(&[
            Suit::Clubs,
            Suit::Clubs,
            Suit::Clubs,
            Suit::Clubs,
            Suit::Spades
        ]));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&[Deuce, Trey, Four, Five, Six]));
        assert!(is_straight(&[Ten, Jack, Queen, King, Ace]));
        assert!(is_straight(&[Deuce, Trey, Four, Five, Ace]));

        // No wrap around the ace other than the wheel.
        assert!(!is_straight(&[Deuce, Trey, Four, King, Ace]));
        assert!(!is_straight(&[Deuce, Trey, Queen, King, Ace]));
        assert!(!is_straight(&[Deuce, Trey, Four, Five, Seven]));
        assert!(!is_straight(&[Deuce, Trey, Five, Six, Seven]));
        assert!(!is_straight(&[Deuce, Trey, Four, Six, Ace]));
    }
}
