use api::balancer::{BalanceRequest, BalanceResponse, ScoresByRole, Summoner};

use roster::Roster;
use roster::model::{Player, Role};

use std::collections::HashMap;

/// The optimization objective tags the balancing engine accepts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStrategy
{
    #[serde(rename = "role")]
    RoleDifference,
    #[serde(rename = "role_average")]
    RoleAverage,
    #[serde(rename = "overall_average")]
    OverallAverage,
}

impl BalanceStrategy
{
    pub fn from_token(token: &str) -> Option<BalanceStrategy>
    {
        match token
        {
            "role" => Some(BalanceStrategy::RoleDifference),
            "role_average" => Some(BalanceStrategy::RoleAverage),
            "overall_average" => Some(BalanceStrategy::OverallAverage),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str
    {
        match self
        {
            BalanceStrategy::RoleDifference => "role",
            BalanceStrategy::RoleAverage => "role_average",
            BalanceStrategy::OverallAverage => "overall_average",
        }
    }
}

/// Serializes the roster and the chosen strategy into the engine's request payload. One
/// summoner record per roster entry, in roster order. No optimization happens here.
pub fn build_request(roster: &Roster, strategy: BalanceStrategy) -> BalanceRequest
{
    let summoners = roster.players()
        .iter()
        .map(|player| Summoner::new(player.username.clone(), player.tag.clone(), ScoresByRole::of(&player.role_scores)))
        .collect();

    BalanceRequest::new(strategy, summoners)
}

/// A returned identity resolved back to its player, credited with the lane its position
/// in the engine's list implies.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamAssignment
{
    pub player: Player,
    pub role: Role,
}

/// Maps the engine's returned identity lists back onto the current roster
///
/// # Arguments
/// * `response` The two ordered identity lists exactly as the engine returned them
/// * `roster` The roster as it stands now, which may have drifted since the request was built
///
/// # Return
/// * Both teams in the engine's order, not roster order. Each slot's lane comes from its
///   position alone and wraps past the lane count. Identities that no longer resolve are
///   dropped with a diagnostic, never an error.
pub fn reconcile(response: &BalanceResponse, roster: &Roster) -> (Vec<TeamAssignment>, Vec<TeamAssignment>)
{
    let players: HashMap<String, &Player> = roster.players()
        .iter()
        .map(|player| (player.identity(), player))
        .collect();

    (reconcile_team(&response.team_a, &players), reconcile_team(&response.team_b, &players))
}

/* Lookup is exact-match on "username#tag": the engine echoes back the same identity
   strings it was sent. The lowercased key stays a dedup-only concern. */
fn reconcile_team(identities: &Vec<String>, players: &HashMap<String, &Player>) -> Vec<TeamAssignment>
{
    let mut assignments = Vec::with_capacity(identities.len());

    for (position, identity) in identities.iter().enumerate()
    {
        match players.get(identity)
        {
            None => warn!("Identity: {} was not found in the roster, dropping it from the team", identity),
            Some(player) => assignments.push(TeamAssignment::new((*player).clone(), Role::for_position(position))),
        }
    }

    assignments
}
