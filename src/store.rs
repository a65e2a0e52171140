//! Balance persistence.

use crate::error::StoreError;

/// Persists the table balance between sessions.
///
/// The table saves after every balance-affecting action and tolerates an
/// unavailable store by continuing with its in-memory figure, so
/// implementations may fail freely.
pub trait BalanceStore {
    /// Loads the persisted balance, `Ok(None)` when nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn load(&mut self) -> Result<Option<u64>, StoreError>;

    /// Persists the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn save(&mut self, balance: u64) -> Result<(), StoreError>;
}

/// An in-memory store, the fallback when no durable store exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    balance: Option<u64>,
}

impl MemoryStore {
    /// Creates a store pre-seeded with a balance.
    #[must_use]
    pub const fn with_balance(balance: u64) -> Self {
        Self {
            balance: Some(balance),
        }
    }
}

impl BalanceStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.balance)
    }

    fn save(&mut self, balance: u64) -> Result<(), StoreError> {
        self.balance = Some(balance);
        Ok(())
    }
}
