//! Settlement.

use alloc::vec::Vec;

use log::debug;

use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Phase, Round};

/// Classifies one hand against the dealer's final total.
fn outcome_for(hand: &Hand, dealer_value: u8, dealer_bust: bool) -> HandOutcome {
    let player_value = hand.value();

    if hand.is_bust() {
        HandOutcome::Bust
    } else if dealer_bust {
        HandOutcome::DealerBust
    } else if player_value > dealer_value {
        HandOutcome::Win
    } else if player_value < dealer_value {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

impl Round {
    /// Settles every hand against the dealer, credits the total payout to
    /// the balance, and moves the round to its terminal phase.
    ///
    /// Hands settle independently: a busted hand pays nothing even when the
    /// dealer busts too, and each win pays 1:1.
    pub(super) fn settle(&mut self) {
        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();

        let mut results = Vec::with_capacity(self.hands.len());
        let mut total_payout: u64 = 0;
        let mut total_bet: u64 = 0;

        for (hand_index, hand) in self.hands.iter_mut().enumerate() {
            let outcome = outcome_for(hand, dealer_value, dealer_bust);
            let bet = hand.bet();
            let payout = outcome.payout(bet);

            hand.set_outcome(outcome);
            total_payout += payout;
            total_bet += bet;

            results.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value: hand.value(),
                dealer_value,
            });
        }

        self.balance += total_payout;
        self.result = Some(RoundResult {
            hands: results,
            total_payout,
            total_bet,
            dealer_value,
            dealer_bust,
        });
        self.phase = Phase::Settled;
        debug!("round settled: dealer {dealer_value}, payout {total_payout}");
    }
}
