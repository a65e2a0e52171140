//! Error types for round and table operations.

use thiserror::Error;

/// Errors from a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The shoe ran out of cards mid-round.
    ///
    /// A 52-card shoe cannot be exhausted by the bounded draws of one round,
    /// so this indicates a sizing bug rather than an expected condition.
    #[error("shoe exhausted")]
    Exhausted,
    /// A remote card source could not produce a card.
    #[error("card source unavailable")]
    Unavailable,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is zero or outside the table's configured bounds.
    #[error("bet amount is invalid")]
    InvalidBet,
    /// Bet exceeds the current balance.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// A round is already being played at the table.
    #[error("round already in progress")]
    RoundInProgress,
    /// The card source failed while dealing.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting for player actions.
    #[error("round is not waiting for player actions")]
    InvalidPhase,
    /// No round is currently live at the table.
    #[error("no round in progress")]
    NoRound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient balance for this action.
    #[error("insufficient balance for this action")]
    InsufficientBalance,
    /// The card source failed while drawing.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors from a balance store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("balance store unavailable")]
    Unavailable,
}

/// Errors from an account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The service could not be reached.
    #[error("account service unavailable")]
    Unavailable,
    /// The username or password was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The username is already registered.
    #[error("username already taken")]
    UsernameTaken,
}
