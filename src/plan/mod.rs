//! The day-planning pipeline: filter candidates to the requested date, order
//! them by score and proximity, annotate travel legs, and assemble the
//! advisory plan. Every invocation is a pure function of its request; no
//! state survives between calls.

pub mod assemble;
pub mod filter;
pub mod ordering;
pub mod travel;
pub mod types;

use chrono::NaiveDate;
use thiserror::Error;

pub use assemble::assemble_plan;
pub use filter::filter_candidates;
pub use ordering::{order_candidates, PlacedCandidate, ProximityAnchor};
pub use travel::{haversine_km, travel_minutes, GeoPoint};
pub use types::{
    AppointmentInput, Candidate, PlanRequest, PlanResponse, PlannedStop, PlannerConfig,
    StartLocation,
};

/// Request-level failures. Anything per-candidate is a warning instead.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid planning date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Runs the full pipeline for one request.
pub fn plan_day(request: &PlanRequest, config: &PlannerConfig) -> Result<PlanResponse, PlanError> {
    let plan_date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| PlanError::InvalidDate(request.date.clone()))?;

    let (candidates, warnings) = filter_candidates(plan_date, &request.appointments);
    let start_point = request.start_location.as_ref().map(StartLocation::point);
    let ordered = order_candidates(candidates, start_point);

    Ok(assemble_plan(
        ordered,
        request.start_location.as_ref(),
        warnings,
        plan_date,
        config,
    ))
}
