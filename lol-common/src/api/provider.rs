use chrono::NaiveDateTime;

/// One row of a player's per-role history as the stats provider aggregates it. Only `role`
/// and `avg_score` feed normalization, the rest travels along for display and debugging.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct RoleAggregate
{
    pub role: String,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub total_matches: Option<i64>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct PlayerAggregates
{
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub aggregates: Vec<RoleAggregate>,
}
