
/// The five lanes in positional-assignment order. The order matters: slots in a balanced
/// team are credited lanes by walking this array.
pub const LANE_ORDER: [Role; 5] = [Role::Top, Role::Jungle, Role::Middle, Role::Bottom, Role::Utility];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role
{
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role
{
    /// Case-insensitive lookup of the provider's role tokens. Tokens outside the five
    /// lanes resolve to `None`.
    pub fn from_token(token: &str) -> Option<Role>
    {
        match token.to_lowercase().as_str()
        {
            "top" => Some(Role::Top),
            "jungle" => Some(Role::Jungle),
            "middle" => Some(Role::Middle),
            "bottom" => Some(Role::Bottom),
            "utility" => Some(Role::Utility),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str
    {
        match self
        {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Middle => "middle",
            Role::Bottom => "bottom",
            Role::Utility => "utility",
        }
    }

    /// Lane for a slot in a returned team. `position` may exceed the lane count and wraps
    /// around, an engine that returns seven entries credits slots 5 and 6 with Top and Jungle again.
    pub fn for_position(position: usize) -> Role
    {
        LANE_ORDER[position % LANE_ORDER.len()]
    }
}

/// One score slot per lane, always all five. A lane without qualifying data stays `None`,
/// which is not the same thing as a real score of zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, new)]
pub struct RoleScores
{
    pub top: Option<i32>,
    pub jungle: Option<i32>,
    pub middle: Option<i32>,
    pub bottom: Option<i32>,
    pub utility: Option<i32>,
}

impl RoleScores
{
    pub fn empty() -> RoleScores
    {
        RoleScores::new(None, None, None, None, None)
    }

    pub fn get(&self, role: Role) -> Option<i32>
    {
        match role
        {
            Role::Top => self.top,
            Role::Jungle => self.jungle,
            Role::Middle => self.middle,
            Role::Bottom => self.bottom,
            Role::Utility => self.utility,
        }
    }

    pub fn set(&mut self, role: Role, score: i32)
    {
        match role
        {
            Role::Top => self.top = Some(score),
            Role::Jungle => self.jungle = Some(score),
            Role::Middle => self.middle = Some(score),
            Role::Bottom => self.bottom = Some(score),
            Role::Utility => self.utility = Some(score),
        }
    }

    /// The scores that actually have data, in lane order.
    pub fn present(&self) -> Vec<i32>
    {
        LANE_ORDER.iter()
            .filter_map(|role| self.get(*role))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player
{
    pub username: String,
    pub tag: String,
    pub role_scores: RoleScores,
}

impl Player
{
    pub fn new<S1, S2>(username: S1, tag: S2, role_scores: RoleScores) -> Player
        where S1: Into<String>, S2: Into<String>
    {
        Player {
            username: username.into(),
            tag: tag.into(),
            role_scores,
        }
    }

    /// The canonical "username#tag" identity, exactly as the balancing engine echoes it back.
    pub fn identity(&self) -> String
    {
        format!("{}#{}", self.username, self.tag)
    }

    /// Lowercased identity. Duplicate detection only, reconciliation never uses this.
    pub fn identity_key(&self) -> String
    {
        self.identity().to_lowercase()
    }
}
