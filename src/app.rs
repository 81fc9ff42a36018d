use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/checkin/:mood", post(handlers::checkin_form))
        .route("/api/entries", get(handlers::list_entries))
        .route("/api/moods", post(handlers::submit))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/export", get(handlers::export))
        .route("/api/theme", get(handlers::get_theme))
        .route("/api/theme/toggle", post(handlers::toggle_theme))
        .route("/api/quote", get(handlers::get_quote))
        .with_state(state)
}
