use serde_json::Value;

use crate::error::PollError;
use crate::models::HomeworkRecord;

/// Renders the chat message for one raw `homeworks` entry.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let record = HomeworkRecord::from_value(homework)?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        record.name,
        record.status.verdict()
    ))
}

/// Failure notice sent in place of a status message.
pub fn failure_message(error: &PollError) -> String {
    format!("Process failure: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HomeworkStatus;
    use serde_json::json;

    #[test]
    fn approved_homework_renders_template() {
        let message = parse_status(&json!({"homework_name": "proj1", "status": "approved"})).unwrap();
        assert_eq!(
            message,
            "Changed review status for \"proj1\". Work reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn every_known_status_uses_its_verdict() {
        for status in HomeworkStatus::ALL {
            let message =
                parse_status(&json!({"homework_name": "hw05_final", "status": status.code()}))
                    .unwrap();
            assert_eq!(
                message,
                format!("Changed review status for \"hw05_final\". {}", status.verdict())
            );
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = parse_status(&json!({"homework_name": "proj1", "status": "on_hold"})).unwrap_err();
        assert_eq!(err, PollError::UnknownStatus("on_hold".to_string()));

        let err = parse_status(&json!({"homework_name": "proj1", "status": 3})).unwrap_err();
        assert_eq!(err, PollError::UnknownStatus("3".to_string()));
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        assert_eq!(
            parse_status(&json!({"status": "approved"})).unwrap_err(),
            PollError::MissingField("homework_name")
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "proj1"})).unwrap_err(),
            PollError::MissingField("status")
        );
    }

    #[test]
    fn failure_message_wraps_error() {
        let message = failure_message(&PollError::EndpointUnavailable { status: 503 });
        assert_eq!(message, "Process failure: review API endpoint unavailable (HTTP 503)");
    }
}
