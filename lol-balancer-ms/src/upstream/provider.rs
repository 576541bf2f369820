use reqwest;

use serde_json;

use lol_common::api::provider::PlayerAggregates;
use lol_common::errors::{ErrorKind, Result};
use lol_common::roster::model::Player;
use lol_common::scores;

/// Looks a summoner up on the stats provider and folds their per-role aggregates into a
/// roster-ready player. A body that does not parse degrades to a player with no qualifying
/// data; only transport trouble or a bad status is an error.
pub fn fetch_player(base_url: &str, username: &str, tag: &str) -> Result<Player>
{
    let url = format!("{}/players/{}/{}", base_url, username, tag);

    let mut response = match reqwest::get(&url)
    {
        Ok(response) => response,
        Err(error) => bail!(ErrorKind::ProviderLookupFailed(format!("{}", error))),
    };
    if !response.status().is_success()
    {
        bail!(ErrorKind::ProviderLookupFailed(format!("bad status: {}", response.status())));
    }

    let body = response.text()?;

    let aggregates: PlayerAggregates = match serde_json::from_str(&body)
    {
        Ok(aggregates) => aggregates,
        Err(error) =>
        {
            warn!("Malformed provider response for player: {}#{} because {}", username, tag, error);
            PlayerAggregates::new(None, Vec::new())
        },
    };

    trace!("Provider returned {} aggregates for player: {}#{}", aggregates.aggregates.len(), username, tag);

    Ok(Player::new(username, tag, scores::normalize(&aggregates.aggregates)))
}
