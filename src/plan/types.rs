use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::travel::GeoPoint;

/// Planning request body for a single day
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub date: String,
    pub appointments: Vec<AppointmentInput>,
    #[serde(default)]
    pub start_location: Option<StartLocation>,
}

/// A candidate appointment as it arrives on the wire.
/// Timestamps stay raw strings here so a bad value can be turned into a
/// warning instead of failing the whole request at deserialization time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub opportunity_score: Option<f64>,
}

/// Where the day begins (e.g. the rep's home or office)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl StartLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A candidate that survived parsing, ready for ordering
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Position in the request's appointment list, used for stable tie-breaks
    pub input_index: usize,
    pub id: Option<String>,
    pub title: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub position: Option<GeoPoint>,
    pub opportunity_score: Option<f64>,
}

impl Candidate {
    /// Score used for ranking; a missing score ranks as zero but is kept
    /// distinct from an explicit zero when rendering reasons
    pub fn ranking_score(&self) -> f64 {
        self.opportunity_score.unwrap_or(0.0)
    }
}

/// One stop of the produced day plan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedStop {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_previous_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_travel_minutes: Option<f64>,
    pub reason: String,
}

/// The full planning response. The plan is advisory: a non-empty plan always
/// carries `requires_user_validation = true`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub success: bool,
    pub plan: Vec<PlannedStop>,
    pub warnings: Vec<String>,
    pub requires_user_validation: bool,
}

/// Tuning knobs for the planner
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Average speed used to turn straight-line distance into a travel-time
    /// estimate, in km/h
    pub assumed_speed_kmh: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            assumed_speed_kmh: 30.0,
        }
    }
}
