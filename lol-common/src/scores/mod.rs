use api::provider::RoleAggregate;

use roster::model::{Role, RoleScores};

/// Converts the provider's raw per-role aggregates into the fixed five-lane score mapping
///
/// # Arguments
/// * `aggregates` The aggregate records as the stats provider returned them, in no particular order
///
/// # Return
/// * A mapping with exactly one slot per lane; lanes without qualifying data stay absent
pub fn normalize(aggregates: &Vec<RoleAggregate>) -> RoleScores
{
    let mut scores = RoleScores::empty();

    for aggregate in aggregates.iter()
    {
        let role = match Role::from_token(&aggregate.role)
        {
            None =>
            {
                debug!("Ignoring unknown role token: {}", aggregate.role);
                continue;
            },
            Some(role) => role,
        };

        /* Later records overwrite earlier ones, the provider's ordering carries no meaning */
        if let Some(avg_score) = aggregate.avg_score
        {
            scores.set(role, avg_score.round() as i32);
        }
    }

    scores
}

/// # Return
/// * The mean of the lanes that have data, rounded to the nearest integer, or `None` when
///   no lane has any
pub fn overall_average(scores: &RoleScores) -> Option<i32>
{
    let present = scores.present();
    if present.is_empty()
    {
        return None;
    }

    let sum: i64 = present.iter().map(|score| *score as i64).sum();

    Some(((sum as f64) / (present.len() as f64)).round() as i32)
}
