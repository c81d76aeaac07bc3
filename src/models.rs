use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of an editable workout table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// What a user did on one date. `log_type` is either "Rest" or the name of
/// the template the workout was started from; a rest day has no exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLog {
    pub log_type: String,
    pub exercises: Vec<ExerciseEntry>,
}

/// Derived classification of a calendar date. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    Workout,
    Rest,
    Missed,
}

/// Persisted form of a day log. Exercises stay a serialized JSON array so
/// one corrupt row can be skipped at load time without failing the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredLog {
    pub log_type: String,
    pub exercises: String,
}

/// A stored log together with its key, as returned by store scans.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub username: String,
    pub date: String,
    pub log_type: String,
    pub exercises: String,
}

/// The whole persisted document: credentials plus logs keyed by username
/// then by ISO date. The nested map makes one-log-per-(user, date)
/// structural rather than something upsert has to re-check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub users: BTreeMap<String, String>,
    pub logs: BTreeMap<String, BTreeMap<String, StoredLog>>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveLogRequest {
    pub username: String,
    pub date: String,
    pub log_type: String,
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateLogRequest {
    pub username: String,
    pub date: String,
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub workout_days: u32,
}

#[derive(Debug, Serialize)]
pub struct MonthCell {
    pub date: String,
    pub day: u32,
    pub weekday: String,
    pub state: DayState,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<MonthCell>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ConsistencySummary {
    pub workouts: u32,
    pub rest: u32,
    pub missed: u32,
    pub total_days: u32,
    pub range_start: String,
    pub range_end: String,
}
