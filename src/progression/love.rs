//! Weighted love distribution across a 9-slot deck.

use crate::constants::love::{CALC_ORDER, CALC_WEIGHT};

/// Spreads `total` love across the deck using a fixed-priority weighted
/// round-robin: the center slot absorbs up to 5 love per pass, every other
/// slot up to 1, visited center-first then left to right. Each slot is
/// capped at its `max_loves` value.
///
/// The inner pass stops the moment the remaining pool hits zero; the outer
/// loop stops when a full pass makes no progress, discarding any leftover
/// love. Returns the total amount actually distributed.
pub fn distribute_love(loves: &mut [i64; 9], max_loves: &[i64; 9], total: i64) -> i64 {
    let mut remaining = total;
    let mut distributed = 0;

    while remaining > 0 {
        let mut added_this_pass = 0;

        for (&slot, &weight) in CALC_ORDER.iter().zip(CALC_WEIGHT.iter()) {
            let new_love = (loves[slot] + weight.min(remaining)).min(max_loves[slot]);
            let added = new_love - loves[slot];
            loves[slot] = new_love;
            added_this_pass += added;
            remaining -= added;

            if remaining <= 0 {
                break;
            }
        }

        distributed += added_this_pass;
        if added_this_pass == 0 {
            break;
        }
    }

    distributed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_love_is_a_no_op() {
        let mut loves = [3, 0, 0, 0, 7, 0, 0, 0, 1];
        let before = loves;
        let distributed = distribute_love(&mut loves, &[10; 9], 0);
        assert_eq!(distributed, 0);
        assert_eq!(loves, before);
    }

    #[test]
    fn center_absorbs_small_rewards_first() {
        let mut loves = [0; 9];
        let distributed = distribute_love(&mut loves, &[10; 9], 5);
        assert_eq!(distributed, 5);
        assert_eq!(loves, [0, 0, 0, 0, 5, 0, 0, 0, 0]);
    }

    #[test]
    fn second_pass_returns_to_center() {
        // Pass 1: center +5, each outer slot +1 (13 total). Pass 2: center +1.
        let mut loves = [0; 9];
        let distributed = distribute_love(&mut loves, &[10; 9], 14);
        assert_eq!(distributed, 14);
        assert_eq!(loves, [1, 1, 1, 1, 6, 1, 1, 1, 1]);
    }

    #[test]
    fn slot_caps_are_respected() {
        let maxes = [2, 2, 2, 2, 3, 2, 2, 2, 2];
        let mut loves = [0; 9];
        let distributed = distribute_love(&mut loves, &maxes, 1000);
        assert_eq!(distributed, 19);
        assert_eq!(loves, maxes);
        for (love, max) in loves.iter().zip(maxes.iter()) {
            assert!(love <= max);
        }
    }

    #[test]
    fn saturated_deck_discards_overflow() {
        let maxes = [1; 9];
        let mut loves = [1; 9];
        let distributed = distribute_love(&mut loves, &maxes, 50);
        assert_eq!(distributed, 0);
        assert_eq!(loves, [1; 9]);
    }

    #[test]
    fn partial_saturation_stops_after_dead_pass() {
        // Center already capped; outer slots take 1 per pass until full.
        let maxes = [2, 2, 2, 2, 0, 2, 2, 2, 2];
        let mut loves = [0; 9];
        let distributed = distribute_love(&mut loves, &maxes, 100);
        assert_eq!(distributed, 16);
        assert_eq!(loves, maxes);
    }

    #[test]
    fn never_distributes_more_than_requested() {
        let mut loves = [0; 9];
        let distributed = distribute_love(&mut loves, &[1000; 9], 37);
        assert_eq!(distributed, 37);
        assert_eq!(loves.iter().sum::<i64>(), 37);
    }
}
