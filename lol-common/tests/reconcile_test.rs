extern crate lol_common;

use lol_common::api::balancer::BalanceResponse;
use lol_common::balance;
use lol_common::roster::Roster;
use lol_common::roster::model::{Player, Role, RoleScores};

fn player(username: &str, tag: &str) -> Player
{
    Player::new(username, tag, RoleScores::empty())
}

#[test]
fn roles_wrap_around_past_the_fifth_slot()
{
    let usernames = vec!("A", "B", "C", "D", "E", "F", "G");

    let mut roster = Roster::new();
    for username in usernames.iter()
    {
        roster = roster.add(player(username, "EUW")).unwrap();
    }

    let identities = usernames.iter()
        .map(|username| format!("{}#EUW", username))
        .collect();
    let response = BalanceResponse::new(identities, Vec::new());

    let (team_a, team_b) = balance::reconcile(&response, &roster);

    let roles: Vec<Role> = team_a.iter()
        .map(|assignment| assignment.role)
        .collect();

    assert_eq!(vec!(Role::Top, Role::Jungle, Role::Middle, Role::Bottom, Role::Utility, Role::Top, Role::Jungle), roles);
    assert!(team_b.is_empty());
}

#[test]
fn unresolvable_identities_are_dropped_not_fatal()
{
    let roster = Roster::new()
        .add(player("Faker", "KR1")).unwrap();

    let response = BalanceResponse::new(
        vec!(String::from("Faker#KR1"), String::from("Ghost#NA1")),
        Vec::new());

    let (team_a, team_b) = balance::reconcile(&response, &roster);

    assert_eq!(1, team_a.len());
    assert_eq!("Faker#KR1", team_a[0].player.identity());
    assert!(team_b.is_empty());
}

#[test]
fn output_follows_the_engine_order_not_roster_order()
{
    let roster = Roster::new()
        .add(player("First", "EUW")).unwrap()
        .add(player("Second", "EUW")).unwrap();

    let response = BalanceResponse::new(
        vec!(String::from("Second#EUW"), String::from("First#EUW")),
        Vec::new());

    let (team_a, _) = balance::reconcile(&response, &roster);

    assert_eq!("Second", team_a[0].player.username);
    assert_eq!(Role::Top, team_a[0].role);
    assert_eq!("First", team_a[1].player.username);
    assert_eq!(Role::Jungle, team_a[1].role);
}

#[test]
fn reconciliation_matches_identities_exactly_by_case()
{
    /* Dedup is case-insensitive, reconciliation is not: the engine echoes the identities it
       was sent, so anything else is treated as stale */
    let roster = Roster::new()
        .add(player("Faker", "KR1")).unwrap();

    let response = BalanceResponse::new(vec!(String::from("faker#kr1")), Vec::new());

    let (team_a, team_b) = balance::reconcile(&response, &roster);

    assert!(team_a.is_empty());
    assert!(team_b.is_empty());
}

#[test]
fn single_player_team_is_credited_top_with_their_top_score()
{
    let roster = Roster::new()
        .add(Player::new("Faker", "KR1", RoleScores::new(Some(80), None, None, None, None))).unwrap();

    let response = BalanceResponse::new(vec!(String::from("Faker#KR1")), Vec::new());

    let (team_a, team_b) = balance::reconcile(&response, &roster);

    assert_eq!(1, team_a.len());
    assert_eq!("Faker#KR1", team_a[0].player.identity());
    assert_eq!(Role::Top, team_a[0].role);
    assert_eq!(Some(80), team_a[0].player.role_scores.get(team_a[0].role));
    assert!(team_b.is_empty());
}

#[test]
fn an_empty_response_reconciles_to_two_empty_teams()
{
    let roster = Roster::new()
        .add(player("Faker", "KR1")).unwrap();

    let (team_a, team_b) = balance::reconcile(&BalanceResponse::default(), &roster);

    assert!(team_a.is_empty());
    assert!(team_b.is_empty());
}
