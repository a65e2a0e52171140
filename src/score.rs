//! Hand scoring.
//!
//! Every consumer of a blackjack total (hit checks, the dealer loop,
//! settlement) goes through [`evaluate`] so no two call sites can disagree
//! about whether a hand busted.

use crate::card::{Card, Rank};

/// Evaluates a set of cards.
///
/// Aces start at 11 and are demoted to 1 one at a time while the total
/// exceeds 21. Returns the final total and whether the hand is soft (an Ace
/// still counted as 11). The total may still exceed 21; the caller decides
/// what a bust means.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card.base_value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    (total, is_soft)
}

/// Returns the blackjack total of a set of cards.
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate(cards).0
}
