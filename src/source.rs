//! Pluggable card sources.
//!
//! A round draws every card through [`CardSource`], so the same state
//! machine runs against a locally shuffled [`Shoe`] or a remote drawing
//! service that decides cards server-side. Remote implementations block
//! inside [`CardSource::draw`]; the round never issues two draws
//! concurrently.

use crate::card::Card;
use crate::error::SourceError;
use crate::shoe::Shoe;

/// Which hand a draw is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRole {
    /// Draw for a player hand.
    Player,
    /// Draw for the dealer.
    Dealer,
}

/// Context passed to a card source with each draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    /// Which hand the card is for.
    pub role: DrawRole,
    /// The receiving hand's total before the draw.
    pub current_value: u8,
}

/// Outcome of a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawn {
    /// A card was produced.
    Card(Card),
    /// The source instructs the dealer to stop drawing.
    ///
    /// Only meaningful during dealer play, where it overrides the local
    /// draw-to-17 rule. A stop during a player draw is a source bug and is
    /// treated as a failed draw.
    Stop,
}

/// A source of cards for one round.
///
/// Implementations that do I/O should fall back to a safe default card
/// rather than returning an error for transient failures; the round treats
/// `Err` as fatal.
pub trait CardSource {
    /// Produces the next card, or a stop signal for the dealer loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a card at all.
    fn draw(&mut self, request: DrawRequest) -> Result<Drawn, SourceError>;
}

impl CardSource for Shoe {
    fn draw(&mut self, _request: DrawRequest) -> Result<Drawn, SourceError> {
        self.draw().map(Drawn::Card).ok_or(SourceError::Exhausted)
    }
}
