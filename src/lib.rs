pub mod app;
pub mod auth;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod templates;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{JsonFileStore, resolve_data_path};
