use api::balancer::BalanceResponse;
use api::team::{BalancedTeams, Team};

use balance;

use roster::{Roster, ROSTER_CAPACITY};
use roster::model::Player;

use ::errors::*;

/// Single-flight guard for one action type. `begin_*` moves it to `Pending`, every
/// resolution moves it back to `Idle`, success or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight
{
    Idle,
    Pending,
}

/// Everything one balancing session owns: the roster, the last balanced teams, and the
/// in-flight guards. Operations hand back a new session value instead of mutating, the
/// caller decides where the current value lives and swaps it at each resolution point.
#[derive(Debug, Clone, PartialEq)]
pub struct Session
{
    pub roster: Roster,
    pub teams: Option<BalancedTeams>,
    pub add_flight: Flight,
    pub balance_flight: Flight,
}

impl Session
{
    pub fn new() -> Session
    {
        Session {
            roster: Roster::new(),
            teams: None,
            add_flight: Flight::Idle,
            balance_flight: Flight::Idle,
        }
    }

    /// Starts the add-player flow. Duplicates and a full roster are rejected here, before
    /// any provider call goes out.
    pub fn begin_add(&self, username: &str, tag: &str) -> Result<Session>
    {
        if self.add_flight == Flight::Pending
        {
            bail!(ErrorKind::ActionPending(String::from("add")));
        }
        if self.roster.contains(username, tag)
        {
            bail!(ErrorKind::DuplicateIdentity(format!("{}#{}", username, tag)));
        }
        if self.roster.len() >= ROSTER_CAPACITY
        {
            bail!(ErrorKind::CapacityExceeded(ROSTER_CAPACITY));
        }

        let mut session = self.clone();
        session.add_flight = Flight::Pending;

        Ok(session)
    }

    /// Resolves the add-player flow with the enriched player.
    pub fn finish_add(&self, player: Player) -> Result<Session>
    {
        let mut session = self.clone();
        session.roster = self.roster.add(player)?;
        session.add_flight = Flight::Idle;

        Ok(session)
    }

    /// Resolves the add-player flow without touching the roster.
    pub fn abort_add(&self) -> Session
    {
        let mut session = self.clone();
        session.add_flight = Flight::Idle;

        session
    }

    /// Removing is local and synchronous, it needs no flight.
    pub fn remove_player(&self, index: usize) -> Result<Session>
    {
        let mut session = self.clone();
        session.roster = self.roster.remove(index)?;

        Ok(session)
    }

    /// Starts the balance flow. An empty roster is rejected here, before the engine is asked.
    pub fn begin_balance(&self) -> Result<Session>
    {
        if self.balance_flight == Flight::Pending
        {
            bail!(ErrorKind::ActionPending(String::from("balance")));
        }
        if self.roster.is_empty()
        {
            bail!(ErrorKind::EmptyRoster);
        }

        let mut session = self.clone();
        session.balance_flight = Flight::Pending;

        Ok(session)
    }

    /// Resolves the balance flow, reconciling the engine's partitions against the roster as
    /// it stands now. Cannot fail: identities that no longer resolve are dropped during
    /// reconciliation.
    pub fn finish_balance(&self, response: &BalanceResponse) -> Session
    {
        let (team_a, team_b) = balance::reconcile(response, &self.roster);

        let mut session = self.clone();
        session.teams = Some(BalancedTeams::new(Team::of(&team_a), Team::of(&team_b)));
        session.balance_flight = Flight::Idle;

        session
    }

    /// Resolves the balance flow without touching the previously balanced teams.
    pub fn abort_balance(&self) -> Session
    {
        let mut session = self.clone();
        session.balance_flight = Flight::Idle;

        session
    }
}
