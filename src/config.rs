//! Table configuration.

/// Configuration for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize:
///
/// ```
/// use ventuno::TableConfig;
///
/// let config = TableConfig::default()
///     .with_starting_balance(5000)
///     .with_max_bet(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Balance granted when no store has one persisted.
    pub starting_balance: u64,
    /// Balance restored by [`Table::reset_balance`](crate::Table::reset_balance).
    pub reset_balance: u64,
    /// Minimum bet (0 = no minimum beyond "positive").
    pub min_bet: u64,
    /// Maximum bet (0 = no maximum).
    pub max_bet: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: 10_000,
            reset_balance: 1_000,
            min_bet: 0,
            max_bet: 0,
        }
    }
}

impl TableConfig {
    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the balance restored by a reset.
    #[must_use]
    pub const fn with_reset_balance(mut self, balance: u64) -> Self {
        self.reset_balance = balance;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, bet: u64) -> Self {
        self.min_bet = bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, bet: u64) -> Self {
        self.max_bet = bet;
        self
    }

    /// Returns whether a bet amount passes the configured bounds.
    #[must_use]
    pub const fn bet_in_bounds(&self, bet: u64) -> bool {
        bet > 0 && bet >= self.min_bet && (self.max_bet == 0 || bet <= self.max_bet)
    }
}
