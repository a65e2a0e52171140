//! Dealer auto-play.

use log::debug;

use crate::error::SourceError;
use crate::source::{DrawRequest, DrawRole, Drawn};

use super::{Phase, Round};

impl Round {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The hole card is revealed first. When every player hand has already
    /// busted the dealer draws nothing; otherwise the dealer draws until
    /// reaching 17, soft 17 included (a soft 17 scores as 17 and stops the
    /// loop). A [`Drawn::Stop`] from the card source halts the loop
    /// regardless of the local count. A failed draw aborts the round.
    pub(super) fn dealer_play(&mut self) -> Result<(), SourceError> {
        self.phase = Phase::DealerActing;
        self.dealer.reveal_hole();

        if self.hands.iter().all(crate::hand::Hand::is_bust) {
            // Nothing left to beat.
            debug!("all hands bust, dealer stands pat");
            self.settle();
            return Ok(());
        }

        loop {
            let value = self.dealer.value();
            if value >= 17 {
                break;
            }

            let drawn = self.source.draw(DrawRequest {
                role: DrawRole::Dealer,
                current_value: value,
            });
            match drawn {
                Err(err) => {
                    self.abort();
                    return Err(err);
                }
                Ok(Drawn::Card(card)) => {
                    self.dealer.add_card(card);
                    debug!("dealer draws to {}", self.dealer.value());
                }
                Ok(Drawn::Stop) => {
                    // The source's word is final for server-driven rounds.
                    debug!("card source stopped the dealer at {value}");
                    break;
                }
            }
        }

        self.settle();
        Ok(())
    }
}
