#![feature(plugin, decl_macro, custom_derive)]
#![plugin(rocket_codegen)]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate rocket;
extern crate rocket_contrib;

use rocket::State;

use rocket_contrib::Json;

extern crate reqwest;
extern crate serde_json;

extern crate lol_common;

use lol_common::errors::{ErrorKind, Result};

use lol_common::api::team::{BalancedTeams, RosterView};
use lol_common::balance;
use lol_common::balance::BalanceStrategy;
use lol_common::session::Session;

mod upstream;

use std::sync::Mutex;
use std::env;

struct BalancerConfig
{
    session: Mutex<Session>,
    provider_url: String,
    engine_url: String,
}

#[get("/roster")]
fn roster(common: State<BalancerConfig>) -> Result<Json<RosterView>>
{
    match common.session.lock()
    {
        Ok(session) => Ok(Json(RosterView::of(&session.roster))),
        Err(error) => bail!("Failed to acquire session lock because {}", error),
    }
}

///
/// Looks the summoner up on the stats provider and adds them to the roster
///
/// * `common` - the stored common configuration needed to do anything (i.e upstream urls)
#[post("/roster/<username>/<tag>")]
fn add_player(username: String, tag: String, common: State<BalancerConfig>) -> Result<Json<RosterView>>
{
    /* Local validation and the single-flight guard run before the provider is asked anything */
    {
        let mut session = match common.session.lock()
        {
            Ok(session) => session,
            Err(error) => bail!("Failed to acquire session lock because {}", error),
        };

        let pending = session.begin_add(&username, &tag)?;
        *session = pending;
    }

    let outcome = upstream::provider::fetch_player(&common.provider_url, &username, &tag);

    let mut session = match common.session.lock()
    {
        Ok(session) => session,
        Err(error) => bail!("Failed to acquire session lock because {}", error),
    };

    match outcome
    {
        Ok(player) =>
        {
            match session.finish_add(player)
            {
                Ok(next) =>
                {
                    *session = next;
                    info!("Added player: {}#{} to the roster", username, tag);

                    Ok(Json(RosterView::of(&session.roster)))
                },
                Err(error) =>
                {
                    let idle = session.abort_add();
                    *session = idle;

                    Err(error)
                },
            }
        },
        Err(error) =>
        {
            let idle = session.abort_add();
            *session = idle;
            error!("Failed to add player: {}#{} because {}", username, tag, error);

            Err(error)
        },
    }
}

#[delete("/roster/<index>")]
fn remove_player(index: usize, common: State<BalancerConfig>) -> Result<Json<RosterView>>
{
    let mut session = match common.session.lock()
    {
        Ok(session) => session,
        Err(error) => bail!("Failed to acquire session lock because {}", error),
    };

    let next = session.remove_player(index)?;
    *session = next;
    debug!("Removed roster entry: {}", index);

    Ok(Json(RosterView::of(&session.roster)))
}

///
/// Sends the roster off to the balancing engine and reconciles its partitions into the
/// two display teams
///
/// * `strategy` - one of the engine's objective tokens: role, role_average, overall_average
#[post("/teams/balance/<strategy>")]
fn balance_teams(strategy: String, common: State<BalancerConfig>) -> Result<Json<BalancedTeams>>
{
    let strategy = match BalanceStrategy::from_token(&strategy)
    {
        None => bail!(ErrorKind::UnknownStrategy(strategy)),
        Some(strategy) => strategy,
    };

    let request = {
        let mut session = match common.session.lock()
        {
            Ok(session) => session,
            Err(error) => bail!("Failed to acquire session lock because {}", error),
        };

        let pending = session.begin_balance()?;
        *session = pending;

        balance::build_request(&session.roster, strategy)
    };

    let outcome = upstream::engine::request_balance(&common.engine_url, &request);

    let mut session = match common.session.lock()
    {
        Ok(session) => session,
        Err(error) => bail!("Failed to acquire session lock because {}", error),
    };

    match outcome
    {
        Ok(response) =>
        {
            let next = session.finish_balance(&response);
            let teams = next.teams.clone()
                .ok_or("Balanced teams were not stored")?;
            *session = next;
            info!("Balanced {} summoners with strategy: {}", request.summoners.len(), strategy.token());

            Ok(Json(teams))
        },
        Err(error) =>
        {
            let idle = session.abort_balance();
            *session = idle;
            error!("Failed to balance teams because {}", error);

            Err(error)
        },
    }
}

#[get("/teams")]
fn teams(common: State<BalancerConfig>) -> Result<Json<Option<BalancedTeams>>>
{
    match common.session.lock()
    {
        Ok(session) => Ok(Json(session.teams.clone())),
        Err(error) => bail!("Failed to acquire session lock because {}", error),
    }
}

fn main() {
    /* Log */
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    if env::var("RUST_LOG").is_ok() {
        builder.parse(&env::var("RUST_LOG").unwrap());
    }
    builder.init();

    /* Upstream services */
    let provider_url = env::var("PROVIDER_URL")
        .unwrap_or(String::from("http://localhost:8000/api"));
    let engine_url = env::var("ENGINE_URL")
        .unwrap_or(String::from("http://localhost:8000/api"));

    let balancer_config = BalancerConfig {
        session: Mutex::new(Session::new()),
        provider_url,
        engine_url,
    };

    rocket::ignite()
        .mount("/v1", routes![roster, add_player, remove_player, balance_teams, teams])
        .manage(balancer_config)
        .launch();
}
