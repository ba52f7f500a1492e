use anyhow::Context;
use tracing_subscriber::EnvFilter;

use visit_planner::display::print_day_plan;
use visit_planner::plan::{plan_day, PlanRequest, PlannerConfig};
use visit_planner::web;

fn planner_config() -> PlannerConfig {
    let mut config = PlannerConfig::default();
    if let Ok(value) = std::env::var("PLANNER_SPEED_KMH") {
        match value.parse::<f64>() {
            Ok(speed) if speed > 0.0 => config.assumed_speed_kmh = speed,
            _ => eprintln!("Ignoring PLANNER_SPEED_KMH={}: expected a positive number", value),
        }
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = planner_config();

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting planning server on port {}...", port);
        println!("POST plan requests to http://localhost:{}/api/plan", port);

        web::start_server(port, config).await?;
        return Ok(());
    }

    // CLI mode: plan a single request loaded from a JSON file
    let Some(path) = args.get(1) else {
        eprintln!("Usage: {} web [port] | {} <request.json>", args[0], args[0]);
        std::process::exit(2);
    };

    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file '{}'", path))?;
    let request: PlanRequest =
        serde_json::from_str(&body).with_context(|| format!("'{}' is not a valid plan request", path))?;

    let response = plan_day(&request, &config)
        .with_context(|| format!("could not plan '{}'", request.date))?;
    print_day_plan(&request.date, &response);

    Ok(())
}
