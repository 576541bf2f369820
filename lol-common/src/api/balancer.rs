use balance::BalanceStrategy;

use roster::model::RoleScores;

/// The five-slot score vector the engine optimizes over. Absent lanes are serialized as
/// explicit `null`s, never omitted, so the engine can tell "no data" from a real zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, new)]
pub struct ScoresByRole
{
    pub top: Option<i32>,
    pub jungle: Option<i32>,
    pub middle: Option<i32>,
    pub bottom: Option<i32>,
    pub utility: Option<i32>,
}

impl ScoresByRole
{
    pub fn of(scores: &RoleScores) -> ScoresByRole
    {
        ScoresByRole::new(scores.top, scores.jungle, scores.middle, scores.bottom, scores.utility)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Summoner
{
    pub name: String,
    pub tag: String,
    pub scores_by_role: ScoresByRole,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct BalanceRequest
{
    pub balance_type: BalanceStrategy,
    pub summoners: Vec<Summoner>,
}

/// The engine's partition of the roster into two ordered identity lists. Neither list is
/// guaranteed to hold five entries, nor to only hold identities the roster still knows.
/// A list the engine left out entirely degrades to empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, new)]
pub struct BalanceResponse
{
    #[serde(default)]
    pub team_a: Vec<String>,
    #[serde(default)]
    pub team_b: Vec<String>,
}
