//! Renderable snapshots of a round.
//!
//! A view carries everything a presentation layer needs after any mutation:
//! dealer cards with the hole card elided from the score, per-hand state,
//! and which hand is acting. Rendering itself lives outside the crate.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};

/// Snapshot of one player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Current bet riding on the hand.
    pub bet: u64,
    /// Blackjack total.
    pub value: u8,
    /// Whether the hand has finished acting.
    pub is_done: bool,
    /// Whether the hand busted.
    pub is_bust: bool,
    /// Whether the bet was doubled.
    pub is_doubled: bool,
    /// Settlement label, present once the round is settled.
    pub outcome: Option<&'static str>,
}

impl HandView {
    pub(crate) fn of(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            bet: hand.bet(),
            value: hand.value(),
            is_done: hand.is_done(),
            is_bust: hand.is_bust(),
            is_doubled: hand.is_doubled(),
            outcome: hand.outcome().map(crate::result::HandOutcome::label),
        }
    }
}

/// Snapshot of the whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Dealer cards. Before the reveal the hole card (index 0) should be
    /// rendered face down.
    pub dealer_cards: Vec<Card>,
    /// Dealer total, `None` while the hole card is hidden.
    pub dealer_value: Option<u8>,
    /// Player hands in table order.
    pub hands: Vec<HandView>,
    /// Index of the hand currently acting.
    pub active_hand: usize,
    /// Whether the round has reached settlement.
    pub is_over: bool,
}

impl RoundView {
    pub(crate) fn of(
        dealer: &DealerHand,
        hands: &[Hand],
        active_hand: usize,
        is_over: bool,
    ) -> Self {
        Self {
            dealer_cards: dealer.cards().to_vec(),
            dealer_value: dealer.is_hole_revealed().then(|| dealer.value()),
            hands: hands.iter().map(HandView::of).collect(),
            active_hand,
            is_over,
        }
    }
}
