use balance::TeamAssignment;

use roster::{Roster, ROSTER_CAPACITY};
use roster::model::{Role, RoleScores};

use scores;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamPlayer
{
    pub username: String,
    pub tag: String,
    pub role: Role,
    pub displayed_score: Option<i32>,
    pub role_scores: RoleScores,
    pub overall_average: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Team
{
    pub players: Vec<TeamPlayer>,
    pub role_average: i32,
    pub overall_average: i32,
}

impl Team
{
    /// Builds the display model for one balanced team. The displayed score is whatever the
    /// player has in the lane their slot credits them with, which may well be absent.
    pub fn of(assignments: &Vec<TeamAssignment>) -> Team
    {
        let players: Vec<TeamPlayer> = assignments.iter()
            .map(|assignment| TeamPlayer::new(
                assignment.player.username.clone(),
                assignment.player.tag.clone(),
                assignment.role,
                assignment.player.role_scores.get(assignment.role),
                assignment.player.role_scores,
                scores::overall_average(&assignment.player.role_scores)))
            .collect();

        let role_average = Team::role_average(&players);
        let overall_average = Team::overall_average(&players);

        Team::new(players, role_average, overall_average)
    }

    /* Mean of each member's score in their credited lane, members without one don't count */
    fn role_average(players: &Vec<TeamPlayer>) -> i32
    {
        let scored: Vec<i32> = players.iter()
            .filter_map(|player| player.displayed_score)
            .collect();

        if scored.is_empty()
        {
            return 0;
        }

        let sum: i64 = scored.iter().map(|score| *score as i64).sum();

        ((sum as f64) / (scored.len() as f64)).round() as i32
    }

    /* Mean over every member of their overall average, no data counts as zero */
    fn overall_average(players: &Vec<TeamPlayer>) -> i32
    {
        if players.is_empty()
        {
            return 0;
        }

        let sum: i64 = players.iter()
            .map(|player| player.overall_average.unwrap_or(0) as i64)
            .sum();

        ((sum as f64) / (players.len() as f64)).round() as i32
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct BalancedTeams
{
    pub blue: Team,
    pub red: Team,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct RosterEntry
{
    pub username: String,
    pub tag: String,
    pub role_scores: RoleScores,
    pub overall_average: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct RosterView
{
    pub players: Vec<RosterEntry>,
    pub capacity: usize,
}

impl RosterView
{
    pub fn of(roster: &Roster) -> RosterView
    {
        let players = roster.players()
            .iter()
            .map(|player| RosterEntry::new(
                player.username.clone(),
                player.tag.clone(),
                player.role_scores,
                scores::overall_average(&player.role_scores)))
            .collect();

        RosterView::new(players, ROSTER_CAPACITY)
    }
}
