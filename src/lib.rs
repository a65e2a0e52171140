//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow,
//! including betting, player actions (hit, stand, double, split), dealer
//! auto-play, and settlement. Cards come from a pluggable [`CardSource`]
//! (a locally shuffled [`Shoe`] by default), and the balance persists
//! through a pluggable [`BalanceStore`].
//!
//! # Example
//!
//! ```no_run
//! use ventuno::{MemoryStore, Table, TableConfig};
//!
//! let config = TableConfig::default();
//! let table = Table::new(config, MemoryStore::default(), 42);
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod account;
pub mod card;
pub mod config;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
pub mod score;
pub mod shoe;
pub mod source;
pub mod store;
pub mod table;
pub mod view;

// Re-export main types
pub use account::{AccountService, Profile};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use config::TableConfig;
pub use error::{AccountError, ActionError, BetError, SourceError, StoreError};
pub use hand::{DealerHand, Hand};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::{Phase, Round};
pub use shoe::Shoe;
pub use source::{CardSource, DrawRequest, DrawRole, Drawn};
pub use store::{BalanceStore, MemoryStore};
pub use table::Table;
pub use view::{HandView, RoundView};
