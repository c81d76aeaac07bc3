use crate::history::{date_key, day_state};
use crate::models::{ConsistencySummary, DayLog, DayState, LeaderboardEntry, LogRecord};
use crate::templates;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Rank users by logged workout days, descending. Rest days never count,
/// but a rest-only user still shows up with zero. Ties keep the order users
/// were first seen in the scan, so output is deterministic for a fixed
/// input order.
pub fn leaderboard(records: &[LogRecord]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.username.clone()).or_insert_with(|| {
            entries.push(LeaderboardEntry {
                username: record.username.clone(),
                workout_days: 0,
            });
            entries.len() - 1
        });
        if record.log_type != templates::REST {
            entries[slot].workout_days += 1;
        }
    }

    entries.sort_by(|a, b| b.workout_days.cmp(&a.workout_days));
    entries
}

/// Classify every date between the first and last logged date, inclusive.
/// None when the user has no history at all; total_days == 0 is not a thing.
pub fn consistency_summary(history: &BTreeMap<String, DayLog>) -> Option<ConsistencySummary> {
    let mut dates = history
        .keys()
        .filter_map(|key| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok());
    let start = dates.next()?;
    let end = dates.last().unwrap_or(start);

    let mut workouts = 0;
    let mut rest = 0;
    let mut missed = 0;
    let mut current = start;
    while current <= end {
        match day_state(history, &date_key(current)) {
            DayState::Workout => workouts += 1,
            DayState::Rest => rest += 1,
            DayState::Missed => missed += 1,
        }
        current = current + Duration::days(1);
    }

    Some(ConsistencySummary {
        workouts,
        rest,
        missed,
        total_days: ((end - start).num_days() + 1) as u32,
        range_start: date_key(start),
        range_end: date_key(end),
    })
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

    fn log(log_type: &str) -> DayLog {
        DayLog {
            log_type: log_type.to_string(),
            exercises: Vec::new(),
        }
    }

    #[test]
    fn leaderboard_counts_only_workout_days() {
        let records = vec![
            record("ali", "2024-03-01", "Anterior A"),
            record("ali", "2024-03-02", "Rest"),
            record("ali", "2024-03-03", "Posterior B"),
            record("bob", "2024-03-01", "Rest"),
        ];

        let board = leaderboard(&records);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].username, "ali");
        assert_eq!(board[0].workout_days, 2);
        assert_eq!(board[1].username, "bob");
        assert_eq!(board[1].workout_days, 0);
    }

    #[test]
    fn leaderboard_ties_keep_encounter_order() {
        let records = vec![
            record("ali", "2024-03-01", "Anterior A"),
            record("bob", "2024-03-01", "Anterior B"),
            record("cem", "2024-03-01", "Posterior A"),
            record("cem", "2024-03-02", "Posterior B"),
        ];

        let board = leaderboard(&records);
        assert_eq!(board[0].username, "cem");
        assert_eq!(board[1].username, "ali");
        assert_eq!(board[2].username, "bob");
    }

    #[test]
    fn summary_classifies_every_day_in_range() {
        let mut history = BTreeMap::new();
        history.insert("2024-03-01".to_string(), log("Anterior A"));
        history.insert("2024-03-03".to_string(), log("Rest"));

        let summary = consistency_summary(&history).unwrap();
        assert_eq!(summary.range_start, "2024-03-01");
        assert_eq!(summary.range_end, "2024-03-03");
        assert_eq!(summary.total_days, 3);
        assert_eq!(summary.workouts, 1);
        assert_eq!(summary.rest, 1);
        assert_eq!(summary.missed, 1);
        assert_eq!(
            summary.workouts + summary.rest + summary.missed,
            summary.total_days
        );
    }

    #[test]
    fn summary_single_day() {
        let mut history = BTreeMap::new();
        history.insert("2024-03-01".to_string(), log("Anterior A"));

        let summary = consistency_summary(&history).unwrap();
        assert_eq!(summary.total_days, 1);
        assert_eq!(summary.workouts, 1);
        assert_eq!(summary.rest, 0);
        assert_eq!(summary.missed, 0);
    }

    #[test]
    fn summary_absent_for_empty_history() {
        let history = BTreeMap::new();
        assert!(consistency_summary(&history).is_none());
    }
}
