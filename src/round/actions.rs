//! Player actions on the active hand.

use log::debug;

use crate::card::Card;
use crate::error::{ActionError, SourceError};
use crate::hand::Hand;
use crate::source::DrawRole;

use super::{Phase, Round};

impl Round {
    fn ensure_acting(&self) -> Result<(), ActionError> {
        if self.phase == Phase::PlayerActing && !self.is_aborted() {
            Ok(())
        } else {
            Err(ActionError::InvalidPhase)
        }
    }

    /// Marks the active hand done and hands control onward: to the split
    /// sibling if one is still unplayed, otherwise to the dealer.
    pub(super) fn finish_active_hand(&mut self) -> Result<(), SourceError> {
        self.hands[self.active].mark_done();

        if self.active + 1 < self.hands.len() {
            self.active += 1;
            debug!("advancing to hand {}", self.active + 1);
            Ok(())
        } else {
            self.dealer_play()
        }
    }

    /// Player action: hit (draw one card).
    ///
    /// A bust or an exact 21 auto-stands the hand. Anything else leaves the
    /// hand acting; double and split have lapsed regardless, since the hand
    /// no longer holds exactly two cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for player actions or
    /// the card source fails.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_acting()?;

        let value = self.hands[self.active].value();
        let card = self.draw_for(DrawRole::Player, value)?;
        self.hands[self.active].add_card(card);

        let hand = &self.hands[self.active];
        if hand.is_bust() {
            debug!("hand {} busts at {}", self.active + 1, hand.value());
            self.finish_active_hand()?;
        } else if hand.value() == 21 {
            self.finish_active_hand()?;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for player actions or
    /// the card source fails during dealer play.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_acting()?;
        self.finish_active_hand()?;
        Ok(())
    }

    /// Player action: double down (double the bet, draw one forced card,
    /// stand).
    ///
    /// Only available as the first decision on a two-card hand. The hand is
    /// done after the forced card no matter what it scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for player actions, the
    /// hand is not eligible, the balance cannot cover the second bet, or
    /// the card source fails.
    pub fn double(&mut self) -> Result<Card, ActionError> {
        self.ensure_acting()?;

        let hand = &self.hands[self.active];
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        let bet = hand.bet();
        if self.balance < bet {
            return Err(ActionError::InsufficientBalance);
        }

        self.balance -= bet;
        self.hands[self.active].double_bet();
        debug!(
            "hand {} doubles to {}",
            self.active + 1,
            self.hands[self.active].bet()
        );

        let value = self.hands[self.active].value();
        let card = self.draw_for(DrawRole::Player, value)?;
        self.hands[self.active].add_card(card);

        self.finish_active_hand()?;
        Ok(card)
    }

    /// Player action: split a two-card pair of equal value into two hands.
    ///
    /// The second card seeds a sibling hand carrying the same bet, each
    /// hand receives one fresh card, and play resumes on the original hand.
    /// One split per round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for player actions, the
    /// hand is not a splittable pair, the balance cannot cover the second
    /// bet, or the card source fails.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_acting()?;

        let hand = &self.hands[self.active];
        let is_pair = hand.len() == 2
            && hand.cards()[0].base_value() == hand.cards()[1].base_value();
        if !is_pair || self.hands.len() >= 2 {
            return Err(ActionError::CannotSplit);
        }
        let bet = hand.bet();
        if self.balance < bet {
            return Err(ActionError::InsufficientBalance);
        }

        self.balance -= bet;

        let split_card = self.hands[self.active]
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;
        let sibling = Hand::from_split(split_card, bet);
        self.hands.push(sibling);
        debug!("hand split into two, bet {bet} each");

        // One fresh card to the original hand, then one to the sibling.
        let value = self.hands[self.active].value();
        let card = self.draw_for(DrawRole::Player, value)?;
        self.hands[self.active].add_card(card);

        let value = self.hands[1].value();
        let card = self.draw_for(DrawRole::Player, value)?;
        self.hands[1].add_card(card);

        Ok(())
    }

    /// Returns whether the active hand may double down.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.ensure_acting().is_ok() && self.active_hand().can_double(self.balance)
    }

    /// Returns whether the active hand may split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.ensure_acting().is_ok()
            && self.active_hand().can_split(self.balance, self.hands.len())
    }
}
