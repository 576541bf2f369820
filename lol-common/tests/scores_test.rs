extern crate lol_common;

use lol_common::api::provider::RoleAggregate;
use lol_common::roster::model::{Role, RoleScores};
use lol_common::scores;

fn aggregate(role: &str, avg_score: Option<f64>) -> RoleAggregate
{
    RoleAggregate::new(String::from(role), avg_score, Some(5), None)
}

#[test]
fn normalize_always_yields_all_five_lanes()
{
    let scores = scores::normalize(&vec!(aggregate("top", Some(80.4))));

    assert_eq!(Some(80), scores.get(Role::Top));
    assert_eq!(None, scores.get(Role::Jungle));
    assert_eq!(None, scores.get(Role::Middle));
    assert_eq!(None, scores.get(Role::Bottom));
    assert_eq!(None, scores.get(Role::Utility));
}

#[test]
fn normalize_ignores_unknown_role_tokens()
{
    let scores = scores::normalize(&vec!(
        aggregate("feeder", Some(99.0)),
        aggregate("jungle", Some(55.5))));

    assert_eq!(None, scores.get(Role::Top));
    assert_eq!(Some(56), scores.get(Role::Jungle));
}

#[test]
fn normalize_matches_role_tokens_case_insensitively()
{
    let scores = scores::normalize(&vec!(
        aggregate("ToP", Some(71.0)),
        aggregate("UTILITY", Some(44.9))));

    assert_eq!(Some(71), scores.get(Role::Top));
    assert_eq!(Some(45), scores.get(Role::Utility));
}

#[test]
fn normalize_skips_null_scores()
{
    let scores = scores::normalize(&vec!(aggregate("top", None)));

    assert_eq!(None, scores.get(Role::Top));
}

#[test]
fn normalize_keeps_the_last_record_per_role()
{
    let scores = scores::normalize(&vec!(
        aggregate("top", Some(10.0)),
        aggregate("top", Some(20.0))));

    assert_eq!(Some(20), scores.get(Role::Top));
}

#[test]
fn overall_average_of_all_absent_is_no_data()
{
    assert_eq!(None, scores::overall_average(&RoleScores::empty()));
}

#[test]
fn overall_average_counts_present_lanes_only()
{
    let scores = RoleScores::new(Some(80), None, Some(51), None, None);

    assert_eq!(Some(66), scores::overall_average(&scores));
}

#[test]
fn overall_average_of_a_single_lane_is_that_lane()
{
    let scores = RoleScores::new(None, None, None, Some(42), None);

    assert_eq!(Some(42), scores::overall_average(&scores));
}
