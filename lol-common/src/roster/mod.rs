pub mod model;

pub use self::model::Role;
pub use self::model::RoleScores;
pub use self::model::Player;
pub use self::model::LANE_ORDER;

use ::errors::*;

/// Two full teams worth of summoners.
pub const ROSTER_CAPACITY: usize = 10;

/// The ordered, deduplicated list of players one session is balancing. Operations hand
/// back a new roster and leave the old value untouched, so a failed operation cannot be
/// observed as partial state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Roster
{
    players: Vec<Player>,
}

impl Roster
{
    pub fn new() -> Roster
    {
        Roster {
            players: Vec::new(),
        }
    }

    pub fn players(&self) -> &Vec<Player>
    {
        &self.players
    }

    pub fn len(&self) -> usize
    {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.players.is_empty()
    }

    /// Whether any entry already claims this identity, compared case-insensitively.
    pub fn contains(&self, username: &str, tag: &str) -> bool
    {
        let key = format!("{}#{}", username, tag).to_lowercase();

        self.players.iter()
            .any(|player| player.identity_key() == key)
    }

    /// Appends `player`, preserving insertion order.
    pub fn add(&self, player: Player) -> Result<Roster>
    {
        if self.contains(&player.username, &player.tag)
        {
            bail!(ErrorKind::DuplicateIdentity(player.identity()));
        }
        if self.players.len() >= ROSTER_CAPACITY
        {
            bail!(ErrorKind::CapacityExceeded(ROSTER_CAPACITY));
        }

        let mut players = self.players.clone();
        players.push(player);

        Ok(Roster { players })
    }

    /// Removes exactly the entry at `index`, shifting the entries after it.
    pub fn remove(&self, index: usize) -> Result<Roster>
    {
        if index >= self.players.len()
        {
            bail!(ErrorKind::IndexOutOfRange(index, self.players.len()));
        }

        let mut players = self.players.clone();
        players.remove(index);

        Ok(Roster { players })
    }
}
