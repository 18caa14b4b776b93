// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Display labels for categories and cards.
use handrole_eval::{Card, CardCode, Category, Rank, Suit};

/// The category display label.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::RoyalFlush => "ROYAL FLUSH (1)",
        Category::StraightFlush => "STRAIGHT FLUSH (2)",
        Category::FourOfAKind => "FOUR OF A KIND (3)",
        Category::FullHouse => "FULL HOUSE (4)",
        Category::Flush => "FLUSH (5)",
        Category::Straight => "STRAIGHT (6)",
        Category::ThreeOfAKind => "THREE OF A KIND (7)",
        Category::TwoPair => "TWO PAIR (8)",
        Category::OnePair => "PAIR (9)",
        Category::NoPair => "NO PAIR (10)",
    }
}

/// The suit display label.
pub fn suit_label(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "CL",
        Suit::Diamonds => "DM",
        Suit::Hearts => "HT",
        Suit::Spades => "SP",
    }
}

/// The rank display label.
pub fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Deuce => "2",
        Rank::Trey => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// The card display label, for example `HT_10`.
pub fn card_label(card: Card) -> String {
    format!("{}_{}", suit_label(card.suit()), rank_label(card.rank()))
}

/// The card code display label, `JOKER` for the joker.
pub fn code_label(code: CardCode) -> String {
    code.decode()
        .map(card_label)
        .unwrap_or_else(|| "JOKER".to_string())
}
