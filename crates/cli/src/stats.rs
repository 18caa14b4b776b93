// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Categories statistics over many hands.
use rand::prelude::*;
use std::{
    fmt,
    time::{Duration, Instant},
};

use handrole_eval::{Card, Category, Deck, Hand};

use crate::labels;

/// Number of hands per category.
#[derive(Debug, Default)]
pub struct Stats {
    counts: [usize; Category::COUNT],
    elapsed: Duration,
}

impl Stats {
    /// Classifies all five cards hands.
    pub fn all_hands() -> Self {
        let mut stats = Self::default();
        let now = Instant::now();
        Deck::default().for_each(Hand::SIZE, |cards| stats.add(cards));
        stats.elapsed = now.elapsed();
        stats
    }

    /// Classifies `samples` random five cards hands.
    pub fn sample<R: Rng>(samples: usize, rng: &mut R) -> Self {
        let mut stats = Self::default();
        let now = Instant::now();
        Deck::default().sample(samples, Hand::SIZE, rng, |cards| stats.add(cards));
        stats.elapsed = now.elapsed();
        stats
    }

    /// The number of hands for a category.
    pub fn count(&self, category: Category) -> usize {
        self.counts[category as usize]
    }

    /// The total number of hands.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn add(&mut self, cards: &[Card]) {
        if let Ok(hand) = Hand::try_from(cards) {
            self.counts[hand.category() as usize] += 1;
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.elapsed.as_secs_f64();
        let total = self.total();

        writeln!(f, "Total hands         {total}")?;
        writeln!(f, "Elapsed:            {elapsed:.3}s")?;
        if elapsed > 0.0 {
            writeln!(f, "Hands/sec:          {:.0}", total as f64 / elapsed)?;
        }
        writeln!(f)?;

        for category in Category::categories() {
            let label = format!("{}:", labels::category_label(category));
            writeln!(f, "{label:<20}{}", self.count(category))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stats() {
        let mut rng = StdRng::seed_from_u64(42);
        let stats = Stats::sample(1_000, &mut rng);
        assert_eq!(stats.total(), 1_000);

        let output = stats.to_string();
        assert!(output.contains("Total hands         1000"));
        assert!(output.contains("NO PAIR (10):"));
        assert!(output.contains("ROYAL FLUSH (1):"));
    }

    #[test]
    fn all_hands_stats() {
        let stats = Stats::all_hands();
        assert_eq!(stats.total(), 2_598_960);
        assert_eq!(stats.count(Category::RoyalFlush), 4);
        assert_eq!(stats.count(Category::StraightFlush), 36);
        assert_eq!(stats.count(Category::Straight), 10_200);
    }
}
