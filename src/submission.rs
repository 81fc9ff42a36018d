use crate::errors::AppError;
use crate::models::{Mood, MoodEntry};
use crate::state::AppState;
use chrono::Utc;
use tokio::{task::JoinError, time::sleep};
use tracing::info;

/// Waits out the processing delay, then commits one entry. The work runs in
/// its own task so a dropped request still commits.
pub async fn submit_mood(state: &AppState, mood: Mood) -> Result<MoodEntry, AppError> {
    let state = state.clone();

    let task = tokio::spawn(async move {
        sleep(state.submit_delay).await;
        let entry = MoodEntry::new(mood, Utc::now());
        let committed = entry.clone();
        let total = state
            .with_session(move |session| {
                session.commit(committed);
                session.entries().len()
            })
            .await?;
        info!(mood = %mood, total, "mood recorded");
        Ok::<_, JoinError>(entry)
    });

    task.await
        .map_err(AppError::internal)?
        .map_err(AppError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    fn state(delay_ms: u64) -> AppState {
        AppState::new(Box::new(MemoryStore::new()), Duration::from_millis(delay_ms))
    }

    #[tokio::test(start_paused = true)]
    async fn entry_is_hidden_until_delay_elapses() {
        let state = state(1500);
        let pending = tokio::spawn({
            let state = state.clone();
            async move { submit_mood(&state, Mood::Stressed).await }
        });

        sleep(Duration::from_millis(1000)).await;
        assert!(state.session.lock().await.entries().is_empty());

        let entry = pending.await.unwrap().unwrap();
        assert_eq!(entry.sentiment(), Sentiment::Negative);
        assert_eq!(state.session.lock().await.entries().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_request_still_commits() {
        let state = state(1500);
        let pending = tokio::spawn({
            let state = state.clone();
            async move { submit_mood(&state, Mood::Happy).await }
        });

        sleep(Duration::from_millis(10)).await;
        pending.abort();
        sleep(Duration::from_millis(2000)).await;
        for _ in 0..100 {
            if !state.session.lock().await.entries().is_empty() {
                break;
            }
            sleep(Duration::from_millis(50)).await;
        }

        let session = state.session.lock().await;
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries().as_slice()[0].mood(), Mood::Happy);
    }
}
