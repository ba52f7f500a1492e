//! Turns the ordered candidates into the final plan response: travel
//! annotations, per-stop reasons, warnings, and the advisory flag.

use chrono::NaiveDate;

use super::ordering::{PlacedCandidate, ProximityAnchor};
use super::travel::{haversine_km, round_km, round_minutes, travel_minutes, GeoPoint};
use super::types::{PlanResponse, PlannedStop, PlannerConfig, StartLocation};

/// Builds the plan response from the ordered stops.
///
/// Travel fields are filled per leg only when both the stop and the previous
/// reference point (the start location for the first stop) have coordinates.
/// An empty plan is still a success; it just carries a warning and does not
/// ask for user validation.
pub fn assemble_plan(
    ordered: Vec<PlacedCandidate>,
    start: Option<&StartLocation>,
    mut warnings: Vec<String>,
    plan_date: NaiveDate,
    config: &PlannerConfig,
) -> PlanResponse {
    if ordered.is_empty() {
        warnings.push(format!("No appointments scheduled on {}", plan_date));
    }

    let mut plan = Vec::with_capacity(ordered.len());
    let mut previous: Option<GeoPoint> = start.map(StartLocation::point);

    for (position, placed) in ordered.into_iter().enumerate() {
        let candidate = placed.candidate;

        let (distance_from_previous_km, estimated_travel_minutes) =
            match (previous, candidate.position) {
                (Some(from), Some(to)) => {
                    let km = haversine_km(from, to);
                    (
                        Some(round_km(km)),
                        Some(round_minutes(travel_minutes(km, config.assumed_speed_kmh))),
                    )
                }
                _ => (None, None),
            };

        let reason = build_reason(candidate.opportunity_score, placed.proximity, start);

        previous = candidate.position;
        plan.push(PlannedStop {
            id: candidate
                .id
                .unwrap_or_else(|| format!("stop-{}", position + 1)),
            title: candidate.title,
            start: candidate.start.to_rfc3339(),
            end: candidate.end.to_rfc3339(),
            latitude: candidate.position.map(|p| p.latitude),
            longitude: candidate.position.map(|p| p.longitude),
            opportunity_score: candidate.opportunity_score,
            distance_from_previous_km,
            estimated_travel_minutes,
            reason,
        });
    }

    let requires_user_validation = !plan.is_empty();
    PlanResponse {
        success: true,
        plan,
        warnings,
        requires_user_validation,
    }
}

/// Templated explanation of why a stop sits where it does. Always names the
/// score (or its absence); mentions proximity only when it actually decided
/// the placement.
fn build_reason(
    score: Option<f64>,
    proximity: Option<ProximityAnchor>,
    start: Option<&StartLocation>,
) -> String {
    let score_part = match score {
        Some(s) => format!("Score {}", format_score(s)),
        None => "No score provided".to_string(),
    };

    match proximity {
        Some(ProximityAnchor::StartLocation) => {
            let anchor = start
                .and_then(|s| s.label.as_deref())
                .unwrap_or("starting point");
            format!("{}, nearest to {}", score_part, anchor)
        }
        Some(ProximityAnchor::PreviousStop) => {
            format!("{}, nearest to previous stop", score_part)
        }
        None => score_part,
    }
}

/// Renders whole scores without a trailing ".0" (Score 9, not Score 9.0)
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}
