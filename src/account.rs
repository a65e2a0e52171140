//! Optional remote account service.
//!
//! A table may keep its balance server-side. When signed in, settlement
//! totals are reported and the returned balance is authoritative; when the
//! service errors, the table keeps its locally computed balance and carries
//! on.

extern crate alloc;

use alloc::string::String;

use crate::error::AccountError;

/// A registered account as the service reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Account username.
    pub username: String,
    /// Server-side balance.
    pub balance: u64,
}

/// Remote account service boundary.
pub trait AccountService {
    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is taken or the service is
    /// unreachable.
    fn register(&mut self, username: &str, password: &str) -> Result<Profile, AccountError>;

    /// Logs into an existing account.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the service is
    /// unreachable.
    fn login(&mut self, username: &str, password: &str) -> Result<Profile, AccountError>;

    /// Reports a settled round and returns the authoritative new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable; the caller falls
    /// back to local arithmetic.
    fn report_result(
        &mut self,
        username: &str,
        total_bet: u64,
        total_payout: u64,
    ) -> Result<u64, AccountError>;
}
