use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four board columns, in the order the board renders them.
///
/// Tasks store their status as a plain string; this enum is the closed set
/// the board knows how to place. A task whose status string matches none of
/// these is kept in storage but has no column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "Work In Progress")]
    WorkInProgress,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Completed")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status: {0}")]
pub struct UnknownStatus(pub String);

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToDo,
        TaskStatus::WorkInProgress,
        TaskStatus::UnderReview,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::WorkInProgress => "Work In Progress",
            TaskStatus::UnderReview => "Under Review",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Exact, case-sensitive match. "to do" is not a column.
impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("to do".parse::<TaskStatus>().is_err());
        assert!("Completed ".parse::<TaskStatus>().is_err());
        assert!("Blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&TaskStatus::WorkInProgress).unwrap();
        assert_eq!(json, "\"Work In Progress\"");
    }
}
