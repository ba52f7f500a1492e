use crate::plan::{PlanResponse, PlannedStop};

/// Formats the travel annotation of a stop, if it has one
pub fn format_travel(stop: &PlannedStop) -> Option<String> {
    match (stop.distance_from_previous_km, stop.estimated_travel_minutes) {
        (Some(km), Some(minutes)) => Some(format!("{} km, ~{} min", km, minutes)),
        _ => None,
    }
}

/// Prints a day plan in a readable format
pub fn print_day_plan(date: &str, response: &PlanResponse) {
    println!("\n=== Day Plan for {} ===", date);
    println!("Total stops: {}", response.plan.len());

    if !response.warnings.is_empty() {
        println!("⚠️  Warnings ({}):", response.warnings.len());
        for warning in &response.warnings {
            println!("  - {}", warning);
        }
    }

    for (position, stop) in response.plan.iter().enumerate() {
        println!(
            "  {}. {} ({} -> {})",
            position + 1,
            stop.title,
            stop.start,
            stop.end
        );
        println!("     Reason: {}", stop.reason);
        if let Some(travel) = format_travel(stop) {
            println!("     Travel from previous: {}", travel);
        }
    }

    if response.requires_user_validation {
        println!("\nThis plan is a suggestion. Review and confirm it before committing.");
    }
}
