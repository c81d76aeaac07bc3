use crate::auth;
use crate::errors::AppError;
use crate::history;
use crate::models::{
    CalendarResponse, ConsistencySummary, CredentialsRequest, DayLog, LeaderboardEntry, LogRecord,
    LoginResponse, MonthQuery, SaveLogRequest, TemplateLogRequest,
};
use crate::state::AppState;
use crate::stats;
use crate::templates;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::BTreeMap;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<StatusCode, AppError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::bad_request(
            "username and password must not be empty",
        ));
    }

    auth::register(
        state.credentials.as_ref(),
        &payload.username,
        &payload.password,
    )
    .await?;
    Ok(StatusCode::CREATED)
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let ok = auth::authenticate(
        state.credentials.as_ref(),
        &payload.username,
        &payload.password,
    )
    .await?;
    if !ok {
        return Err(AppError::invalid_credentials());
    }

    Ok(Json(LoginResponse {
        username: payload.username,
    }))
}

pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let records = state.logs.list_all().await?;
    Ok(Json(stats::leaderboard(&records)))
}

pub async fn user_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<BTreeMap<String, DayLog>>, AppError> {
    let records = state.logs.list_all().await?;
    Ok(Json(history::user_history(&records, &username)))
}

pub async fn calendar(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    if !(1..=12).contains(&month) {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let records = state.logs.list_all().await?;
    let user_logs = history::user_history(&records, &username);
    Ok(Json(CalendarResponse {
        year,
        month,
        cells: history::month_grid(&user_logs, year, month),
    }))
}

pub async fn summary(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Option<ConsistencySummary>>, AppError> {
    let records = state.logs.list_all().await?;
    let user_logs = history::user_history(&records, &username);
    Ok(Json(stats::consistency_summary(&user_logs)))
}

pub async fn get_log(
    State(state): State<AppState>,
    Path((username, date)): Path<(String, String)>,
) -> Result<Json<Option<DayLog>>, AppError> {
    let Some(record) = state.logs.get(&username, &date).await? else {
        return Ok(Json(None));
    };

    // A corrupt record reads as absent, matching the history-load rule.
    let log = serde_json::from_str(&record.exercises)
        .ok()
        .map(|exercises| DayLog {
            log_type: record.log_type,
            exercises,
        });
    Ok(Json(log))
}

pub async fn save_log(
    State(state): State<AppState>,
    Json(payload): Json<SaveLogRequest>,
) -> Result<Json<DayLog>, AppError> {
    validate_save(&payload)?;

    let exercises = serde_json::to_string(&payload.exercises).map_err(AppError::internal)?;
    state
        .logs
        .upsert(LogRecord {
            username: payload.username,
            date: payload.date,
            log_type: payload.log_type.clone(),
            exercises,
        })
        .await?;

    Ok(Json(DayLog {
        log_type: payload.log_type,
        exercises: payload.exercises,
    }))
}

pub async fn log_from_template(
    State(state): State<AppState>,
    Json(payload): Json<TemplateLogRequest>,
) -> Result<Json<DayLog>, AppError> {
    if payload.username.is_empty() {
        return Err(AppError::bad_request("username must not be empty"));
    }
    parse_date(&payload.date)?;
    let exercises = history::apply_template(&payload.template)?;

    let serialized = serde_json::to_string(&exercises).map_err(AppError::internal)?;
    state
        .logs
        .upsert(LogRecord {
            username: payload.username,
            date: payload.date,
            log_type: payload.template.clone(),
            exercises: serialized,
        })
        .await?;

    Ok(Json(DayLog {
        log_type: payload.template,
        exercises,
    }))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path((username, date)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    state.logs.delete(&username, &date).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_save(payload: &SaveLogRequest) -> Result<(), AppError> {
    if payload.username.is_empty() {
        return Err(AppError::bad_request("username must not be empty"));
    }
    parse_date(&payload.date)?;

    if payload.log_type == templates::REST {
        if !payload.exercises.is_empty() {
            return Err(AppError::bad_request("a rest day cannot have exercises"));
        }
        return Ok(());
    }
    if !templates::is_template(&payload.log_type) {
        return Err(AppError::bad_request(
            "log type must be 'Rest' or a known template name",
        ));
    }

    for entry in &payload.exercises {
        if entry.name.is_empty() {
            return Err(AppError::bad_request("exercise name must not be empty"));
        }
        if !(1..=10).contains(&entry.sets) {
            return Err(AppError::bad_request("sets must be between 1 and 10"));
        }
        if !(1..=100).contains(&entry.reps) {
            return Err(AppError::bad_request("reps must be between 1 and 100"));
        }
        if !(0.0..=500.0).contains(&entry.weight) {
            return Err(AppError::bad_request("weight must be between 0 and 500"));
        }
    }
    Ok(())
}

fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseEntry;

    fn request(log_type: &str, exercises: Vec<ExerciseEntry>) -> SaveLogRequest {
        SaveLogRequest {
            username: "ali".to_string(),
            date: "2024-03-01".to_string(),
            log_type: log_type.to_string(),
            exercises,
        }
    }

    fn entry(sets: u32, reps: u32, weight: f64) -> ExerciseEntry {
        ExerciseEntry {
            name: "Hack Squat".to_string(),
            sets,
            reps,
            weight,
        }
    }

    #[test]
    fn rest_day_must_be_empty() {
        assert!(validate_save(&request("Rest", Vec::new())).is_ok());
        assert!(validate_save(&request("Rest", vec![entry(3, 10, 10.0)])).is_err());
    }

    #[test]
    fn unknown_log_type_is_rejected() {
        assert!(validate_save(&request("Leg Day", Vec::new())).is_err());
    }

    #[test]
    fn exercise_bounds_are_enforced() {
        assert!(validate_save(&request("Anterior A", vec![entry(3, 10, 10.0)])).is_ok());
        assert!(validate_save(&request("Anterior A", vec![entry(0, 10, 10.0)])).is_err());
        assert!(validate_save(&request("Anterior A", vec![entry(11, 10, 10.0)])).is_err());
        assert!(validate_save(&request("Anterior A", vec![entry(3, 0, 10.0)])).is_err());
        assert!(validate_save(&request("Anterior A", vec![entry(3, 101, 10.0)])).is_err());
        assert!(validate_save(&request("Anterior A", vec![entry(3, 10, -1.0)])).is_err());
        assert!(validate_save(&request("Anterior A", vec![entry(3, 10, 500.5)])).is_err());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut payload = request("Rest", Vec::new());
        payload.date = "03/01/2024".to_string();
        assert!(validate_save(&payload).is_err());
    }
}
