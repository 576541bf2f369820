use reqwest;

use serde_json;

use lol_common::api::balancer::{BalanceRequest, BalanceResponse};
use lol_common::errors::{ErrorKind, Result};

/// Sends the roster to the balancing engine and hands back its two ordered identity lists.
/// A body without team lists degrades to two empty teams; only transport trouble or a bad
/// status is an error.
pub fn request_balance(base_url: &str, request: &BalanceRequest) -> Result<BalanceResponse>
{
    let url = format!("{}/teams/balance", base_url);

    let client = reqwest::Client::new();
    let mut response = match client.post(&url).json(request).send()
    {
        Ok(response) => response,
        Err(error) => bail!(ErrorKind::EngineRequestFailed(format!("{}", error))),
    };
    if !response.status().is_success()
    {
        bail!(ErrorKind::EngineRequestFailed(format!("bad status: {}", response.status())));
    }

    let body = response.text()?;

    match serde_json::from_str(&body)
    {
        Ok(parsed) => Ok(parsed),
        Err(error) =>
        {
            warn!("Malformed engine response because {}", error);
            Ok(BalanceResponse::default())
        },
    }
}
