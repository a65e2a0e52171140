//! The table controller.
//!
//! [`Table`] owns the session state: the balance, the persistence hook, and
//! the live round, with an explicit lifecycle instead of ambient globals.
//! Every action goes
//! deduct-then-mutate (or mutate-then-settle-then-credit) and persists the
//! balance before returning, so an observer between actions always sees a
//! consistent pair.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::account::AccountService;
use crate::card::Card;
use crate::config::TableConfig;
use crate::error::{AccountError, ActionError, BetError};
use crate::result::RoundResult;
use crate::round::{Phase, Round};
use crate::shoe::Shoe;
use crate::source::CardSource;
use crate::store::BalanceStore;
use crate::view::RoundView;

/// A signed-in account.
struct Account {
    username: String,
    service: Box<dyn AccountService>,
}

/// A single-player blackjack table.
///
/// Rounds are dealt from a freshly shuffled single-deck shoe by default;
/// [`Table::deal_from`] accepts any [`CardSource`] for server-driven play.
pub struct Table<S: BalanceStore> {
    /// Table configuration.
    config: TableConfig,
    /// Balance persistence.
    store: S,
    /// Current balance. Authoritative unless an account service overrides
    /// it at settlement.
    balance: u64,
    /// Seeded generator for shoe shuffles.
    rng: ChaCha8Rng,
    /// The live round, if any.
    round: Option<Round>,
    /// Whether the live round's settlement has been reported.
    reported: bool,
    /// Signed-in account, if any.
    account: Option<Account>,
}

impl<S: BalanceStore> Table<S> {
    /// Creates a table, restoring the balance from the store when one is
    /// persisted and falling back to the configured starting balance.
    pub fn new(config: TableConfig, mut store: S, seed: u64) -> Self {
        let balance = match store.load() {
            Ok(Some(balance)) => balance,
            Ok(None) => config.starting_balance,
            Err(err) => {
                warn!("balance store unavailable ({err}), starting in memory");
                config.starting_balance
            }
        };

        Self {
            config,
            store,
            balance,
            rng: ChaCha8Rng::seed_from_u64(seed),
            round: None,
            reported: false,
            account: None,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the table configuration.
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the current phase, [`Phase::Betting`] when no round is live.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Betting, Round::phase)
    }

    /// Returns a snapshot of the live round.
    #[must_use]
    pub fn view(&self) -> Option<RoundView> {
        self.round.as_ref().map(Round::view)
    }

    /// Returns the live round, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the settlement result of the live round, if it is settled.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.round.as_ref().and_then(Round::result)
    }

    /// Deals a round from a freshly shuffled single-deck shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bet fails
    /// validation, or dealing fails.
    pub fn deal(&mut self, bet: u64) -> Result<(), BetError> {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut self.rng);
        self.deal_from(Box::new(shoe), bet)
    }

    /// Deals a round drawing from the given card source.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bet fails
    /// validation, or dealing fails.
    pub fn deal_from(
        &mut self,
        source: Box<dyn CardSource>,
        bet: u64,
    ) -> Result<(), BetError> {
        if self.round_in_progress() {
            return Err(BetError::RoundInProgress);
        }
        if !self.config.bet_in_bounds(bet) {
            return Err(BetError::InvalidBet);
        }

        let round = Round::begin(bet, self.balance, source)?;
        self.round = Some(round);
        self.reported = false;
        self.after_action();
        Ok(())
    }

    /// Hits the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, the round is not waiting for
    /// player actions, or the card source fails.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::NoRound)?;
        let result = round.hit();
        self.after_action();
        result
    }

    /// Stands the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, the round is not waiting for
    /// player actions, or the card source fails during dealer play.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::NoRound)?;
        let result = round.stand();
        self.after_action();
        result
    }

    /// Doubles down on the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, the hand is not eligible, the
    /// balance cannot cover the second bet, or the card source fails.
    pub fn double(&mut self) -> Result<Card, ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::NoRound)?;
        let result = round.double();
        self.after_action();
        result
    }

    /// Splits the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is live, the hand is not a splittable
    /// pair, the balance cannot cover the second bet, or the card source
    /// fails.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::NoRound)?;
        let result = round.split();
        self.after_action();
        result
    }

    /// Discards a settled or aborted round so a new bet can be placed.
    ///
    /// Returns `false` (and keeps the round) while a round is still being
    /// played.
    pub fn next_round(&mut self) -> bool {
        if self.round_in_progress() {
            false
        } else {
            self.round = None;
            true
        }
    }

    /// Restores the configured reset balance.
    ///
    /// Refused (`false`) while a round is in progress.
    pub fn reset_balance(&mut self) -> bool {
        if self.round_in_progress() {
            return false;
        }
        self.balance = self.config.reset_balance;
        self.persist();
        true
    }

    /// Registers a new account and signs the table in.
    ///
    /// The balance the service reports becomes authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the registration.
    pub fn register(
        &mut self,
        mut service: Box<dyn AccountService>,
        username: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        let profile = service.register(username, password)?;
        self.balance = profile.balance;
        self.account = Some(Account {
            username: profile.username,
            service,
        });
        self.persist();
        Ok(())
    }

    /// Logs into an existing account and signs the table in.
    ///
    /// The balance the service reports becomes authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the credentials.
    pub fn login(
        &mut self,
        mut service: Box<dyn AccountService>,
        username: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        let profile = service.login(username, password)?;
        self.balance = profile.balance;
        self.account = Some(Account {
            username: profile.username,
            service,
        });
        self.persist();
        Ok(())
    }

    /// Returns the signed-in username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.account.as_ref().map(|account| account.username.as_str())
    }

    /// Returns whether a round is live and still playable. Settled and
    /// aborted rounds no longer block the table.
    fn round_in_progress(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| !round.is_over() && !round.is_aborted())
    }

    /// Syncs the balance out of the round, reports a fresh settlement, and
    /// persists.
    fn after_action(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        self.balance = round.balance();

        if round.is_over() && !self.reported {
            self.reported = true;
            if let Some(result) = round.result() {
                let (total_bet, total_payout) = (result.total_bet, result.total_payout);
                self.report_settlement(total_bet, total_payout);
            }
        }

        self.persist();
    }

    /// Reports settlement totals to the account service. On success the
    /// reported balance replaces the local arithmetic; on failure the local
    /// figure stands.
    fn report_settlement(&mut self, total_bet: u64, total_payout: u64) {
        let Some(account) = self.account.as_mut() else {
            return;
        };
        match account
            .service
            .report_result(&account.username, total_bet, total_payout)
        {
            Ok(new_balance) => {
                debug!("account balance updated to {new_balance}");
                self.balance = new_balance;
            }
            Err(err) => {
                warn!("account service unavailable ({err}), keeping local balance");
            }
        }
    }

    /// Persists the balance, warning (not failing) when the store is down.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.balance) {
            warn!("balance store unavailable ({err}), balance kept in memory");
        }
    }
}
