use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/leaderboard", get(handlers::leaderboard))
        .route("/api/history/:username", get(handlers::user_history))
        .route("/api/calendar/:username", get(handlers::calendar))
        .route("/api/summary/:username", get(handlers::summary))
        .route("/api/log", post(handlers::save_log))
        .route("/api/log/template", post(handlers::log_from_template))
        .route(
            "/api/log/:username/:date",
            get(handlers::get_log).delete(handlers::delete_log),
        )
        .with_state(state)
}
