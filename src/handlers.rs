use crate::errors::AppError;
use crate::export::{build_export, export_file_name};
use crate::models::{DashboardResponse, Mood, MoodEntry, StreakResponse, SubmitMoodRequest, ThemeResponse};
use crate::quotes::{random_quote, Quote};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_streak_at};
use crate::submission::submit_mood;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use chrono::Utc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let theme = state.session.lock().await.theme();
    let quote = random_quote(&mut rand::rng());
    Html(render_index(theme, &quote))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    let session = state.session.lock().await;
    Json(session.entries().as_slice().to_vec())
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let mood: Mood = payload.mood.parse()?;
    let entry = submit_mood(&state, mood).await?;
    Ok(Json(entry))
}

pub async fn checkin_form(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> Result<Redirect, AppError> {
    let mood: Mood = mood.parse()?;
    submit_mood(&state, mood).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let session = state.session.lock().await;
    Json(build_dashboard(session.entries().as_slice()))
}

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakResponse> {
    let session = state.session.lock().await;
    Json(build_streak_at(Utc::now(), session.entries().as_slice()))
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let document = {
        let session = state.session.lock().await;
        build_export(session.entries().as_slice(), now)?
    };
    let body = serde_json::to_string_pretty(&document).map_err(AppError::internal)?;
    info!(total = document.total_entries, "exported wellness data");

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_file_name(now)),
        ),
    ];
    Ok((headers, body))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.session.lock().await.theme();
    Json(ThemeResponse { theme })
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = state
        .with_session(|session| session.toggle_theme())
        .await
        .map_err(AppError::internal)??;
    Ok(Json(ThemeResponse { theme }))
}

pub async fn get_quote() -> Json<Quote> {
    Json(random_quote(&mut rand::rng()))
}
