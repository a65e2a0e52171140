//! Round phase.

/// Phase of a round's life, strictly forward.
///
/// A settled round is terminal; play again by constructing a fresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No cards dealt yet; the table is waiting for a bet.
    Betting,
    /// Waiting for player actions on the active hand.
    PlayerActing,
    /// Dealer plays out their hand.
    DealerActing,
    /// Payouts applied; the round is over.
    Settled,
}
