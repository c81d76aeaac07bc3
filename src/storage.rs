use crate::errors::StoreError;
use crate::models::{LogRecord, StoreData, StoredLog};
use async_trait::async_trait;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// Day-log persistence. Keyed by (username, date); at most one record per
/// key survives any sequence of upserts.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn get(&self, username: &str, date: &str) -> Result<Option<LogRecord>, StoreError>;
    /// Whole-table scan, all users. Feeds the leaderboard and history views.
    async fn list_all(&self) -> Result<Vec<LogRecord>, StoreError>;
    /// Full replace of whatever the key held before, never a merge.
    async fn upsert(&self, record: LogRecord) -> Result<(), StoreError>;
    /// No-op when the record is absent.
    async fn delete(&self, username: &str, date: &str) -> Result<(), StoreError>;
}

/// Username to password-hash mapping.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn password_hash(&self, username: &str) -> Result<Option<String>, StoreError>;
    /// Check-and-insert in one step; returns false when the username is
    /// already present (case-sensitive match).
    async fn try_insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError>;
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Single-JSON-document store. Every mutation rewrites the document while
/// holding the lock, so upsert and delete for the same key are linearizable.
pub struct JsonFileStore {
    path: PathBuf,
    data: Mutex<StoreData>,
}

impl JsonFileStore {
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        }
        let data = load_data(&path).await;
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    async fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(data)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        fs::write(&self.path, payload)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(())
    }
}

async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreData::default()
        }
    }
}

#[async_trait]
impl LogStore for JsonFileStore {
    async fn get(&self, username: &str, date: &str) -> Result<Option<LogRecord>, StoreError> {
        let data = self.data.lock().await;
        Ok(get_record(&data, username, date))
    }

    async fn list_all(&self) -> Result<Vec<LogRecord>, StoreError> {
        let data = self.data.lock().await;
        Ok(all_records(&data))
    }

    async fn upsert(&self, record: LogRecord) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        insert_record(&mut data, record);
        self.persist(&data).await
    }

    async fn delete(&self, username: &str, date: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        if remove_record(&mut data, username, date) {
            self.persist(&data).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for JsonFileStore {
    async fn password_hash(&self, username: &str) -> Result<Option<String>, StoreError> {
        let data = self.data.lock().await;
        Ok(data.users.get(username).cloned())
    }

    async fn try_insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut data = self.data.lock().await;
        if data.users.contains_key(username) {
            return Ok(false);
        }
        data.users
            .insert(username.to_string(), password_hash.to_string());
        self.persist(&data).await?;
        Ok(true)
    }
}

/// In-memory store with the same semantics as the file store, minus the
/// file. Used by unit tests and usable as a throwaway backend.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<StoreData>,
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn get(&self, username: &str, date: &str) -> Result<Option<LogRecord>, StoreError> {
        let data = self.data.lock().await;
        Ok(get_record(&data, username, date))
    }

    async fn list_all(&self) -> Result<Vec<LogRecord>, StoreError> {
        let data = self.data.lock().await;
        Ok(all_records(&data))
    }

    async fn upsert(&self, record: LogRecord) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        insert_record(&mut data, record);
        Ok(())
    }

    async fn delete(&self, username: &str, date: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().await;
        remove_record(&mut data, username, date);
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn password_hash(&self, username: &str) -> Result<Option<String>, StoreError> {
        let data = self.data.lock().await;
        Ok(data.users.get(username).cloned())
    }

    async fn try_insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut data = self.data.lock().await;
        if data.users.contains_key(username) {
            return Ok(false);
        }
        data.users
            .insert(username.to_string(), password_hash.to_string());
        Ok(true)
    }
}

fn get_record(data: &StoreData, username: &str, date: &str) -> Option<LogRecord> {
    data.logs.get(username).and_then(|days| {
        days.get(date).map(|stored| LogRecord {
            username: username.to_string(),
            date: date.to_string(),
            log_type: stored.log_type.clone(),
            exercises: stored.exercises.clone(),
        })
    })
}

fn all_records(data: &StoreData) -> Vec<LogRecord> {
    let mut records = Vec::new();
    for (username, days) in &data.logs {
        for (date, stored) in days {
            records.push(LogRecord {
                username: username.clone(),
                date: date.clone(),
                log_type: stored.log_type.clone(),
                exercises: stored.exercises.clone(),
            });
        }
    }
    records
}

fn insert_record(data: &mut StoreData, record: LogRecord) {
    data.logs.entry(record.username).or_default().insert(
        record.date,
        StoredLog {
            log_type: record.log_type,
            exercises: record.exercises,
        },
    );
}

fn remove_record(data: &mut StoreData, username: &str, date: &str) -> bool {
    let Some(days) = data.logs.get_mut(username) else {
        return false;
    };
    let removed = days.remove(date).is_some();
    if days.is_empty() {
        data.logs.remove(username);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, date: &str, log_type: &str) -> LogRecord {
        LogRecord {
            username: username.to_string(),
            date: date.to_string(),
            log_type: log_type.to_string(),
            exercises: "[]".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_replaces_instead_of_duplicating() {
        let store = MemoryStore::default();
        store
            .upsert(record("ali", "2024-03-01", "Anterior A"))
            .await
            .unwrap();
        store
            .upsert(record("ali", "2024-03-01", "Rest"))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].log_type, "Rest");

        let found = store.get("ali", "2024-03-01").await.unwrap().unwrap();
        assert_eq!(found.log_type, "Rest");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::default();
        store
            .upsert(record("ali", "2024-03-01", "Rest"))
            .await
            .unwrap();

        store.delete("ali", "2024-03-01").await.unwrap();
        store.delete("ali", "2024-03-01").await.unwrap();

        assert!(store.get("ali", "2024-03-01").await.unwrap().is_none());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = MemoryStore::default();
        assert!(store.try_insert_user("ali", "h1").await.unwrap());
        assert!(!store.try_insert_user("ali", "h2").await.unwrap());
        assert_eq!(
            store.password_hash("ali").await.unwrap().as_deref(),
            Some("h1")
        );
    }
}
