pub mod health;
pub mod leaderboard;
pub mod scores;
pub mod stats;
pub mod user;

pub use health::health_check;
pub use leaderboard::{get_leaderboard, parse_limit};
pub use scores::submit_score;
pub use stats::get_stats;
pub use user::get_user_score;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{AppState, Config};

/// Build the full application router
///
/// API routes take precedence; every other path is looked up in the static
/// directory holding the game client.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let static_files = ServeDir::new(&state.config.static_dir);
    let log_requests = state.config.log_requests;

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/user/:username", get(get_user_score))
        .route("/api/scores", post(submit_score))
        .route("/api/stats", get(get_stats))
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state);

    if log_requests {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Configure CORS from `ALLOWED_ORIGINS`
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
