//! Selects the candidates that belong to the requested planning date and
//! screens out entries with unusable data, reporting each drop as a warning.

use chrono::{DateTime, NaiveDate};

use super::travel::GeoPoint;
use super::types::{AppointmentInput, Candidate};

/// Keeps the candidates whose `start` instant falls on `plan_date`.
///
/// Date matching uses the date component of the timestamp as written (the
/// offset carried by the RFC 3339 value), with no conversion to a server
/// timezone. Candidates on other dates are simply excluded; candidates with
/// unusable data are excluded with a warning so one bad entry never fails
/// the whole request.
pub fn filter_candidates(
    plan_date: NaiveDate,
    inputs: &[AppointmentInput],
) -> (Vec<Candidate>, Vec<String>) {
    let mut candidates = Vec::new();
    let mut warnings = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let title = input.title.trim();
        if title.is_empty() {
            warnings.push(format!(
                "Skipped appointment at position {}: title is empty",
                index + 1
            ));
            continue;
        }

        let start = match DateTime::parse_from_rfc3339(&input.start) {
            Ok(ts) => ts,
            Err(_) => {
                warnings.push(format!(
                    "Skipped '{}': start '{}' is not a valid ISO 8601 timestamp",
                    title, input.start
                ));
                continue;
            }
        };
        let end = match DateTime::parse_from_rfc3339(&input.end) {
            Ok(ts) => ts,
            Err(_) => {
                warnings.push(format!(
                    "Skipped '{}': end '{}' is not a valid ISO 8601 timestamp",
                    title, input.end
                ));
                continue;
            }
        };
        if end <= start {
            warnings.push(format!("Skipped '{}': end must be after start", title));
            continue;
        }

        if start.date_naive() != plan_date {
            continue;
        }

        let position = match (input.latitude, input.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            (None, None) => None,
            _ => {
                // Half a coordinate pair is unusable; keep the candidate but
                // plan it as if it had no location
                warnings.push(format!(
                    "'{}': latitude and longitude must be provided together; ignoring the partial coordinates",
                    title
                ));
                None
            }
        };

        candidates.push(Candidate {
            input_index: index,
            id: input.id.clone(),
            title: title.to_string(),
            start,
            end,
            position,
            opportunity_score: input.opportunity_score,
        });
    }

    (candidates, warnings)
}
