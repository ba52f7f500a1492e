//! Orders filtered candidates into a visiting sequence.
//!
//! The policy is greedy nearest-neighbor within descending score bands:
//! the highest remaining score always goes first, and among candidates
//! sharing that score the one closest to the current position wins. This
//! is a deliberate local heuristic, not a traveling-salesman optimum.

use super::travel::{haversine_km, GeoPoint};
use super::types::Candidate;

/// Which reference point proximity was measured against when a stop was
/// picked out of a score band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityAnchor {
    StartLocation,
    PreviousStop,
}

/// A candidate with its placement rationale attached
#[derive(Debug, Clone)]
pub struct PlacedCandidate {
    pub candidate: Candidate,
    /// Present only when proximity actually discriminated between several
    /// candidates of equal score
    pub proximity: Option<ProximityAnchor>,
}

/// Produces the total visiting order for the filtered candidates.
///
/// Placement loop: take the highest remaining score (missing scores rank as
/// zero); among candidates with that score, pick the one nearest to the
/// running reference point. The reference starts at `start` and moves to
/// each placed stop's coordinates. Candidates without coordinates rank as
/// infinitely far within their band; with no reference point at all, band
/// members keep input order. All remaining ties keep input order, so the
/// result is deterministic and stable.
pub fn order_candidates(
    candidates: Vec<Candidate>,
    start: Option<GeoPoint>,
) -> Vec<PlacedCandidate> {
    let mut remaining = candidates;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut reference = start;
    let mut at_start = true;

    while !remaining.is_empty() {
        let top_score = remaining
            .iter()
            .map(Candidate::ranking_score)
            .fold(f64::NEG_INFINITY, f64::max);

        // Current score band, in input order
        let band: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, c)| c.ranking_score() == top_score)
            .map(|(i, _)| i)
            .collect();

        let mut best = band[0];
        let mut best_distance = distance_to(reference, &remaining[best]);
        for &i in &band[1..] {
            let d = distance_to(reference, &remaining[i]);
            // Strict comparison keeps the earliest candidate on ties
            if d < best_distance {
                best = i;
                best_distance = d;
            }
        }

        let proximity = if band.len() > 1 && best_distance.is_finite() {
            Some(if at_start {
                ProximityAnchor::StartLocation
            } else {
                ProximityAnchor::PreviousStop
            })
        } else {
            None
        };

        let chosen = remaining.remove(best);
        reference = chosen.position;
        at_start = false;
        ordered.push(PlacedCandidate {
            candidate: chosen,
            proximity,
        });
    }

    ordered
}

fn distance_to(reference: Option<GeoPoint>, candidate: &Candidate) -> f64 {
    match (reference, candidate.position) {
        (Some(from), Some(to)) => haversine_km(from, to),
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn candidate(
        index: usize,
        title: &str,
        score: Option<f64>,
        position: Option<(f64, f64)>,
    ) -> Candidate {
        Candidate {
            input_index: index,
            id: None,
            title: title.to_string(),
            start: DateTime::parse_from_rfc3339("2025-01-15T09:00:00Z").unwrap(),
            end: DateTime::parse_from_rfc3339("2025-01-15T10:00:00Z").unwrap(),
            position: position.map(|(latitude, longitude)| GeoPoint {
                latitude,
                longitude,
            }),
            opportunity_score: score,
        }
    }

    fn titles(ordered: &[PlacedCandidate]) -> Vec<&str> {
        ordered.iter().map(|p| p.candidate.title.as_str()).collect()
    }

    const START: GeoPoint = GeoPoint {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    #[test]
    fn higher_score_goes_first() {
        let ordered = order_candidates(
            vec![
                candidate(0, "low", Some(2.0), None),
                candidate(1, "high", Some(8.0), None),
            ],
            None,
        );
        assert_eq!(titles(&ordered), vec!["high", "low"]);
    }

    #[test]
    fn within_a_band_the_nearest_to_start_wins() {
        let ordered = order_candidates(
            vec![
                candidate(0, "far", Some(9.0), Some((48.857, 2.40))),
                candidate(1, "near", Some(9.0), Some((48.857, 2.355))),
            ],
            Some(START),
        );
        assert_eq!(titles(&ordered), vec!["near", "far"]);
        assert_eq!(ordered[0].proximity, Some(ProximityAnchor::StartLocation));
    }

    #[test]
    fn next_band_is_anchored_to_the_last_placed_stop_not_the_start() {
        // "top" sits well north of the start; of the two score-5 candidates,
        // "near_top" is close to "top" while "near_start" is close to the
        // start. Greedy anchoring must visit "near_top" second.
        let ordered = order_candidates(
            vec![
                candidate(0, "near_start", Some(5.0), Some((48.857, 2.352))),
                candidate(1, "near_top", Some(5.0), Some((48.901, 2.351))),
                candidate(2, "top", Some(9.0), Some((48.90, 2.35))),
            ],
            Some(START),
        );
        assert_eq!(titles(&ordered), vec!["top", "near_top", "near_start"]);
        assert_eq!(ordered[1].proximity, Some(ProximityAnchor::PreviousStop));
    }

    #[test]
    fn missing_coordinates_rank_last_within_their_band() {
        let ordered = order_candidates(
            vec![
                candidate(0, "blind", Some(10.0), None),
                candidate(1, "located", Some(10.0), Some((48.86, 2.35))),
            ],
            Some(START),
        );
        assert_eq!(titles(&ordered), vec!["located", "blind"]);
        assert_eq!(ordered[1].proximity, None);
    }

    #[test]
    fn without_a_start_location_ties_keep_input_order() {
        let ordered = order_candidates(
            vec![
                candidate(0, "first", Some(9.0), Some((48.90, 2.35))),
                candidate(1, "second", Some(9.0), Some((48.86, 2.35))),
            ],
            None,
        );
        assert_eq!(titles(&ordered), vec!["first", "second"]);
        assert_eq!(ordered[0].proximity, None);
    }

    #[test]
    fn missing_score_ranks_as_zero() {
        let ordered = order_candidates(
            vec![
                candidate(0, "unscored", None, None),
                candidate(1, "negative", Some(-1.0), None),
                candidate(2, "scored", Some(3.0), None),
            ],
            None,
        );
        assert_eq!(titles(&ordered), vec!["scored", "unscored", "negative"]);
    }

    #[test]
    fn identical_candidates_keep_input_order() {
        let ordered = order_candidates(
            vec![
                candidate(0, "twin_a", Some(4.0), Some((48.86, 2.35))),
                candidate(1, "twin_b", Some(4.0), Some((48.86, 2.35))),
                candidate(2, "other", Some(4.0), Some((48.99, 2.35))),
            ],
            Some(START),
        );
        assert_eq!(titles(&ordered), vec!["twin_a", "twin_b", "other"]);
    }
}
