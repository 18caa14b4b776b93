// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card detector class identifiers.
//!
//! The detector labels are ordered clubs, diamonds, hearts, joker, spades
//! with the background class at 0:
//!
//! ```text
//!   class  0           1..=39              40     41..=53
//!   label  background  clubs to hearts     joker  spades
//!   code   -           0..=38              52     39..=51
//! ```
use handrole_eval::CardCode;

/// The joker class identifier.
const JOKER_CLASS: i32 = 40;

/// Maps a detector class identifier to a card code.
///
/// Returns `None` for the background and unknown classes.
pub fn card_code(class_id: i32) -> Option<i32> {
    match class_id {
        1..=39 => Some(class_id - 1),
        JOKER_CLASS => Some(CardCode::JOKER.value() as i32),
        41..=53 => Some(class_id - 2),
        _ => None,
    }
}

/// Maps detector class identifiers to card codes, dropping unknown classes.
pub fn card_codes(class_ids: &[i32]) -> Vec<i32> {
    class_ids.iter().filter_map(|&id| card_code(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn class_to_code() {
        assert_eq!(card_code(0), None);
        assert_eq!(card_code(1), Some(0));
        assert_eq!(card_code(39), Some(38));
        assert_eq!(card_code(40), Some(52));
        assert_eq!(card_code(41), Some(39));
        assert_eq!(card_code(53), Some(51));
        assert_eq!(card_code(54), None);
        assert_eq!(card_code(-1), None);
    }

    #[test]
    fn classes_cover_all_codes() {
        let codes = (0..=60).filter_map(card_code).collect::<HashSet<_>>();
        assert_eq!(codes.len(), 53);
        assert!((0..=52).all(|c| codes.contains(&c)));
    }

    #[test]
    fn drop_unknown_classes() {
        assert_eq!(card_codes(&[0, 1, 40, 53, 99]), [0, 52, 51]);
        assert!(card_codes(&[]).is_empty());
    }
}
