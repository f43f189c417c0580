use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::PollError;
use crate::models::StatusQuery;
use crate::providers::HomeworkSource;

/// Client for the Practicum homework-status endpoint.
pub struct Practicum {
    endpoint: String,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl Practicum {
    /// `authorization` is the full `OAuth <token>` header value.
    pub fn new(endpoint: &str, authorization: HeaderValue, timeout: Duration) -> Result<Self, PollError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PollError::Transport(e.to_string()))?;

        Ok(Practicum {
            endpoint: endpoint.to_string(),
            headers,
            client,
        })
    }

    /// Fetches every status change since `since` (Unix seconds) and returns the
    /// decoded body untouched. Shape checks are left to `check_response`.
    pub async fn get_api_answer(&self, since: i64) -> Result<Value, PollError> {
        tracing::debug!(endpoint = %self.endpoint, from_date = since, "requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .headers(self.headers.clone())
            .query(&StatusQuery { from_date: since })
            .send()
            .await
            .map_err(|e| PollError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "review endpoint unavailable");
            return Err(PollError::EndpointUnavailable { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PollError::Transport(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| PollError::Schema(format!("body is not valid JSON: {}", e)))
    }
}

impl HomeworkSource for Practicum {
    async fn fetch_updates(&self, since: i64) -> Result<Value, PollError> {
        self.get_api_answer(since).await
    }
}

/// Checks the payload shape and returns the raw `homeworks` entries. Entries
/// are not inspected here; only the one that gets formatted has to be sound.
pub fn check_response(response: &Value) -> Result<&[Value], PollError> {
    let object = response
        .as_object()
        .ok_or_else(|| PollError::Schema("response is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| PollError::Schema("no `homeworks` key in response".to_string()))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| PollError::Schema("`homeworks` is not a list".to_string()))
}
