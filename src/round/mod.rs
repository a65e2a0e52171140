//! The round state machine.
//!
//! A [`Round`] is created by dealing and driven to [`Phase::Settled`] by
//! player actions; dealer play and settlement run automatically once the
//! last hand stands. One round is live at a time and every mutation goes
//! through `&mut self`, so actions are serialized by construction.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::{BetError, SourceError};
use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;
use crate::source::{CardSource, DrawRequest, DrawRole, Drawn};
use crate::view::RoundView;

mod actions;
mod dealer;
mod settle;
pub mod state;

pub use state::Phase;

/// A single blackjack round: shoe access, dealer hand, one or two player
/// hands, and the balance the round's bets and payouts move through.
pub struct Round {
    /// Where cards come from.
    source: Box<dyn CardSource>,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Player hands; a second appears only on split.
    hands: Vec<Hand>,
    /// Index of the hand currently acting.
    active: usize,
    /// Current phase.
    phase: Phase,
    /// Balance carried through the round. Bets are deducted up front, so
    /// this never goes negative.
    balance: u64,
    /// Whether a fatal source failure killed the round before settlement.
    aborted: bool,
    /// Settlement result, present once settled.
    result: Option<RoundResult>,
}

impl Round {
    /// Deals a new round.
    ///
    /// Validates the bet before touching anything: zero bets are rejected
    /// with [`BetError::InvalidBet`] and bets above `balance` with
    /// [`BetError::InsufficientBalance`]. On success the bet is deducted
    /// and two cards go to the player and dealer each, interleaved. An
    /// initial 21 auto-stands, which runs dealer play and settlement inside
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is invalid or the card source fails
    /// while dealing.
    pub fn begin(
        bet: u64,
        balance: u64,
        source: Box<dyn CardSource>,
    ) -> Result<Self, BetError> {
        if bet == 0 {
            return Err(BetError::InvalidBet);
        }
        if bet > balance {
            return Err(BetError::InsufficientBalance);
        }

        let mut round = Self {
            source,
            dealer: DealerHand::new(),
            hands: alloc::vec![Hand::new(bet)],
            active: 0,
            phase: Phase::PlayerActing,
            balance: balance - bet,
            aborted: false,
            result: None,
        };

        // Deal order matches the table: player, dealer, player, dealer.
        for _ in 0..2 {
            let card = round.draw_for(DrawRole::Player, round.hands[0].value())?;
            round.hands[0].add_card(card);
            let card = round.draw_for(DrawRole::Dealer, round.dealer.value())?;
            round.dealer.add_card(card);
        }

        debug!(
            "round started: bet {bet}, player {}, dealer shows {}",
            round.hands[0].value(),
            round.dealer.visible_value()
        );

        // An initial 21 is never eligible for hit/double/split.
        if round.hands[0].value() == 21 {
            round.finish_active_hand()?;
        }

        Ok(round)
    }

    /// Draws one card, treating a stop signal outside the dealer loop as a
    /// failed draw. A failed draw aborts the round.
    fn draw_for(&mut self, role: DrawRole, current_value: u8) -> Result<Card, SourceError> {
        let drawn = self.source.draw(DrawRequest {
            role,
            current_value,
        });
        match drawn {
            Ok(Drawn::Card(card)) => Ok(card),
            Ok(Drawn::Stop) => {
                self.abort();
                Err(SourceError::Unavailable)
            }
            Err(err) => {
                self.abort();
                Err(err)
            }
        }
    }

    /// Kills the round after a fatal source failure.
    ///
    /// Nothing was settled, so every outstanding stake goes back to the
    /// balance. An aborted round accepts no further actions; the table
    /// discards it to return to betting.
    pub(super) fn abort(&mut self) {
        if self.aborted {
            return;
        }
        self.aborted = true;
        for hand in &self.hands {
            self.balance += hand.bet();
        }
        debug!("round aborted, stakes refunded");
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the balance as the round sees it.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the player hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand currently acting.
    #[must_use]
    pub fn active_hand(&self) -> &Hand {
        &self.hands[self.active]
    }

    /// Returns the index of the hand currently acting.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns whether the round is settled.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Returns whether the round died to a fatal source failure.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Returns the settlement result once the round is settled.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns a renderable snapshot of the round.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::of(&self.dealer, &self.hands, self.active, self.is_over())
    }
}
