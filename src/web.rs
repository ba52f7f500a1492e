use actix_web::{error, middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use tracing::info;

use crate::plan::{plan_day, PlanRequest, PlannerConfig};

/// Shared, read-only server state. The planner itself is stateless; the only
/// thing worth sharing is its configuration.
pub struct AppState {
    pub config: PlannerConfig,
}

// Planning endpoint
async fn create_plan(
    request: web::Json<PlanRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match plan_day(&request, &state.config) {
        Ok(response) => {
            info!(
                date = %request.date,
                stops = response.plan.len(),
                warnings = response.warnings.len(),
                "plan produced"
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": { "message": e.to_string(), "code": "invalid_request" }
        }))),
    }
}

// Liveness probe
async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

/// Maps body deserialization failures to the structured error payload so the
/// client never sees a raw framework error
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": { "message": message, "code": "invalid_request" }
        })),
    )
    .into()
}

pub async fn start_server(port: u16, config: PlannerConfig) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState { config });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(middleware::Logger::default())
            .route("/api/health", web::get().to(health))
            .route("/api/plan", web::post().to(create_plan))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
