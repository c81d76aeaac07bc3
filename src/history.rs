use crate::errors::AppError;
use crate::models::{DayLog, DayState, ExerciseEntry, LogRecord, MonthCell};
use crate::templates;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::warn;

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One user's logs keyed by date. A record whose exercise payload fails to
/// parse is skipped so the rest of the calendar still loads.
pub fn user_history(records: &[LogRecord], username: &str) -> BTreeMap<String, DayLog> {
    let mut history = BTreeMap::new();
    for record in records.iter().filter(|r| r.username == username) {
        match serde_json::from_str::<Vec<ExerciseEntry>>(&record.exercises) {
            Ok(exercises) => {
                history.insert(
                    record.date.clone(),
                    DayLog {
                        log_type: record.log_type.clone(),
                        exercises,
                    },
                );
            }
            Err(err) => warn!(
                "skipping corrupt log for {} on {}: {err}",
                record.username, record.date
            ),
        }
    }
    history
}

/// Total over any date string: absent means Missed.
pub fn day_state(history: &BTreeMap<String, DayLog>, date: &str) -> DayState {
    match history.get(date) {
        Some(log) if log.log_type == templates::REST => DayState::Rest,
        Some(_) => DayState::Workout,
        None => DayState::Missed,
    }
}

/// One cell per calendar date of the month, logged or not.
pub fn month_grid(history: &BTreeMap<String, DayLog>, year: i32, month: u32) -> Vec<MonthCell> {
    let mut cells = Vec::new();
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return cells;
    };

    let mut current = first;
    while current.year() == year && current.month() == month {
        let date = date_key(current);
        let (state, label) = match history.get(&date) {
            None => (DayState::Missed, String::new()),
            Some(log) if log.log_type == templates::REST => {
                (DayState::Rest, "\u{1f4a4}".to_string())
            }
            Some(log) => (DayState::Workout, short_label(&log.log_type)),
        };
        cells.push(MonthCell {
            date,
            day: current.day(),
            weekday: current.format("%a").to_string(),
            state,
            label,
        });
        current = current + Duration::days(1);
    }
    cells
}

fn short_label(log_type: &str) -> String {
    log_type
        .replace("Anterior", "Ant")
        .replace("Posterior", "Post")
}

/// Pre-populate a workout from a fixed template. An unknown name fails
/// loudly instead of producing an empty log.
pub fn apply_template(name: &str) -> Result<Vec<ExerciseEntry>, AppError> {
    let names = templates::exercise_names(name).ok_or_else(|| AppError::unknown_template(name))?;
    Ok(names
        .iter()
        .map(|exercise| ExerciseEntry {
            name: (*exercise).to_string(),
            sets: templates::DEFAULT_SETS,
            reps: templates::DEFAULT_REPS,
            weight: templates::DEFAULT_WEIGHT,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest_log() -> DayLog {
        DayLog {
            log_type: "Rest".to_string(),
            exercises: Vec::new(),
        }
    }

    fn workout_log(log_type: &str) -> DayLog {
        DayLog {
            log_type: log_type.to_string(),
            exercises: apply_template(log_type).unwrap(),
        }
    }

    fn record(username: &str, date: &str, log_type: &str, exercises: &str) -> LogRecord {
        LogRecord {
            username: username.to_string(),
            date: date.to_string(),
            log_type: log_type.to_string(),
            exercises: exercises.to_string(),
        }
    }

    #[test]
    fn day_state_covers_all_cases() {
        let mut history = BTreeMap::new();
        history.insert("2024-03-01".to_string(), workout_log("Anterior A"));
        history.insert("2024-03-02".to_string(), rest_log());

        assert_eq!(day_state(&history, "2024-03-01"), DayState::Workout);
        assert_eq!(day_state(&history, "2024-03-02"), DayState::Rest);
        assert_eq!(day_state(&history, "2024-03-03"), DayState::Missed);
    }

    #[test]
    fn month_grid_covers_every_date() {
        let mut history = BTreeMap::new();
        history.insert("2024-02-05".to_string(), workout_log("Posterior B"));
        history.insert("2024-02-11".to_string(), rest_log());

        let cells = month_grid(&history, 2024, 2);
        assert_eq!(cells.len(), 29);
        assert_eq!(cells[0].date, "2024-02-01");
        assert_eq!(cells[28].date, "2024-02-29");

        let workout = cells.iter().find(|c| c.date == "2024-02-05").unwrap();
        assert_eq!(workout.state, DayState::Workout);
        assert_eq!(workout.label, "Post B");

        let rest = cells.iter().find(|c| c.date == "2024-02-11").unwrap();
        assert_eq!(rest.state, DayState::Rest);
        assert_eq!(rest.label, "\u{1f4a4}");

        let missed = cells.iter().find(|c| c.date == "2024-02-01").unwrap();
        assert_eq!(missed.state, DayState::Missed);
        assert!(missed.label.is_empty());
    }

    #[test]
    fn apply_template_uses_defaults() {
        let exercises = apply_template("Anterior A").unwrap();
        assert_eq!(exercises.len(), 8);
        for entry in &exercises {
            assert_eq!(entry.sets, 3);
            assert_eq!(entry.reps, 10);
            assert!((entry.weight - 10.0).abs() < f64::EPSILON);
        }
        assert_eq!(exercises[0].name, "Incline Chest Press (DB)");
    }

    #[test]
    fn apply_template_rejects_unknown_name() {
        let err = apply_template("Leg Day").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn corrupt_record_is_skipped() {
        let records = vec![
            record("ali", "2024-03-01", "Rest", "[]"),
            record("ali", "2024-03-02", "Anterior A", "not json"),
            record("bob", "2024-03-01", "Rest", "[]"),
        ];

        let history = user_history(&records, "ali");
        assert_eq!(history.len(), 1);
        assert!(history.contains_key("2024-03-01"));
    }
}
