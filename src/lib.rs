pub mod app;
pub mod classifier;
pub mod config;
pub mod entries;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod quotes;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod submission;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::FileStore;
