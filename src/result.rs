//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

/// Outcome of a single hand after settlement.
///
/// Every win pays 1:1, a natural two-card 21 included. The table keeps no
/// 3:2 blackjack bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player busted; the bet is lost regardless of the dealer's hand.
    Bust,
    /// Dealer busted; the hand wins.
    DealerBust,
    /// Hand beat the dealer's total.
    Win,
    /// Hand fell short of the dealer's total.
    Lose,
    /// Equal totals; the stake is returned.
    Push,
}

impl HandOutcome {
    /// Returns the display label for the outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bust => "bust",
            Self::DealerBust => "dealer bust",
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
        }
    }

    /// Returns the payout credited for this outcome on the given bet.
    ///
    /// Wins return the stake plus even winnings, a push returns the stake
    /// alone, and losses return nothing.
    #[must_use]
    pub const fn payout(self, bet: u64) -> u64 {
        match self {
            Self::Bust | Self::Lose => 0,
            Self::DealerBust | Self::Win => bet * 2,
            Self::Push => bet,
        }
    }
}

/// Settlement result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (1 for the split sibling).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet amount for this hand (after any double).
    pub bet: u64,
    /// The payout credited to the balance.
    pub payout: u64,
    /// The hand's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each hand, in table order.
    pub hands: Vec<HandResult>,
    /// Total payout credited across all hands.
    pub total_payout: u64,
    /// Total amount wagered across all hands, doubles and splits included.
    pub total_bet: u64,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
