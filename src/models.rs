use serde::Serialize;
use serde_json::Value;

use crate::error::PollError;

/// Review states the API can report for a homework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    // Exact, case-sensitive match on the API's status code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Work reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "Work taken for review by the reviewer.",
            HomeworkStatus::Rejected => "Work reviewed: the reviewer has comments.",
        }
    }
}

/// The two fields of a `homeworks` entry the notifier cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Pulls name and status out of one raw entry. Absent (or null) keys are
    /// `MissingField`; a status that is not one of the catalog's codes, string
    /// or not, is `UnknownStatus`.
    pub fn from_value(homework: &Value) -> Result<Self, PollError> {
        let name = match present(homework, "homework_name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
            None => return Err(PollError::MissingField("homework_name")),
        };

        let status = match present(homework, "status") {
            Some(Value::String(code)) => HomeworkStatus::from_code(code)
                .ok_or_else(|| PollError::UnknownStatus(code.clone()))?,
            Some(other) => return Err(PollError::UnknownStatus(other.to_string())),
            None => return Err(PollError::MissingField("status")),
        };

        Ok(HomeworkRecord { name, status })
    }
}

fn present<'a>(homework: &'a Value, key: &str) -> Option<&'a Value> {
    homework.get(key).filter(|value| !value.is_null())
}

/// Query string of the homework-status request.
#[derive(Debug, Serialize)]
pub struct StatusQuery {
    pub from_date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_codes_round_trip_through_catalog() {
        for status in HomeworkStatus::ALL {
            assert_eq!(HomeworkStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(HomeworkStatus::from_code("Approved"), None);
        assert_eq!(HomeworkStatus::from_code("pending"), None);
        assert_eq!(HomeworkStatus::from_code(""), None);
    }

    #[test]
    fn record_ignores_extra_fields() {
        let record = HomeworkRecord::from_value(&json!({
            "id": 123,
            "homework_name": "proj1",
            "status": "reviewing",
            "lesson_name": "Final project",
            "date_updated": "2022-02-02T13:02:35Z"
        }))
        .unwrap();
        assert_eq!(
            record,
            HomeworkRecord { name: "proj1".to_string(), status: HomeworkStatus::Reviewing }
        );
    }

    #[test]
    fn non_string_status_is_unknown() {
        let err = HomeworkRecord::from_value(&json!({"homework_name": "proj1", "status": 3}))
            .unwrap_err();
        assert_eq!(err, PollError::UnknownStatus("3".to_string()));
    }

    #[test]
    fn absent_or_null_keys_are_missing() {
        assert_eq!(
            HomeworkRecord::from_value(&json!({"status": "approved"})).unwrap_err(),
            PollError::MissingField("homework_name")
        );
        assert_eq!(
            HomeworkRecord::from_value(&json!({"homework_name": "proj1", "status": null}))
                .unwrap_err(),
            PollError::MissingField("status")
        );
        assert_eq!(
            HomeworkRecord::from_value(&json!("proj1")).unwrap_err(),
            PollError::MissingField("homework_name")
        );
    }

    #[test]
    fn non_string_name_is_rendered_as_is() {
        let record =
            HomeworkRecord::from_value(&json!({"homework_name": 7, "status": "rejected"})).unwrap();
        assert_eq!(record.name, "7");
    }
}
