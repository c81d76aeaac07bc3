use crate::storage::{CredentialStore, LogStore};
use std::sync::Arc;

/// Request-scoped handle to the storage backends. Both trait objects
/// usually point at the same store instance.
#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<dyn LogStore>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(logs: Arc<dyn LogStore>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { logs, credentials }
    }
}
