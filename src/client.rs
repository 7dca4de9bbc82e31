use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::types::application::{Application, EventType};
use crate::types::attempt::Attempt;
use crate::types::endpoint::Endpoint;
use crate::types::message::Message;

/// Thin client for the delivery server's management API. All webhook
/// delivery, retry scheduling, and persistence live server-side; this only
/// reads the surfaces the console renders.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: crate::config::normalize_base_url(&config.server_url),
            token: config.token.clone(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str, limit: u32) -> Result<serde_json::Value, String> {
        let url = self.api_url(path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| format!("Failed to reach {}: {}", url, e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err("Authentication failed: check the API token".to_string());
        }
        if !status.is_success() {
            return Err(format!("Server error from {}: {}", url, status));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response from {}: {}", url, e))
    }

    async fn fetch_list<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        limit: u32,
    ) -> Result<Vec<T>, String> {
        let envelope = self.get_json(path, limit).await?;
        parse_list(&envelope, path)
    }

    pub async fn health(&self) -> Result<(), String> {
        let url = self.api_url("/health");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| format!("Failed to reach {}: {}", url, e))?;
        if !response.status().is_success() {
            return Err(format!("Server unhealthy: {}", response.status()));
        }
        Ok(())
    }

    pub async fn list_applications(&self, limit: u32) -> Result<Vec<Application>, String> {
        self.fetch_list("/app", limit).await
    }

    pub async fn list_event_types(&self, limit: u32) -> Result<Vec<EventType>, String> {
        self.fetch_list("/event-type", limit).await
    }

    pub async fn list_endpoints(&self, app_id: &str, limit: u32) -> Result<Vec<Endpoint>, String> {
        self.fetch_list(&format!("/app/{}/endpoint", app_id), limit)
            .await
    }

    pub async fn list_messages(&self, app_id: &str, limit: u32) -> Result<Vec<Message>, String> {
        self.fetch_list(&format!("/app/{}/msg", app_id), limit).await
    }

    pub async fn list_attempts_by_msg(
        &self,
        app_id: &str,
        msg_id: &str,
        limit: u32,
    ) -> Result<Vec<Attempt>, String> {
        self.fetch_list(&format!("/app/{}/attempt/msg/{}", app_id, msg_id), limit)
            .await
    }

    pub async fn list_attempts_by_endpoint(
        &self,
        app_id: &str,
        endpoint_id: &str,
        limit: u32,
    ) -> Result<Vec<Attempt>, String> {
        self.fetch_list(
            &format!("/app/{}/attempt/endpoint/{}", app_id, endpoint_id),
            limit,
        )
        .await
    }

    /// The server has no app-wide attempt listing, so fan out per message
    /// and flatten. A failed per-message fetch degrades to an empty list
    /// rather than failing the whole aggregation.
    pub async fn list_all_attempts(
        &self,
        app_id: &str,
        msg_limit: u32,
        per_msg_limit: u32,
    ) -> Result<Vec<Attempt>, String> {
        let messages = self.list_messages(app_id, msg_limit).await?;
        let mut attempts = Vec::new();
        for message in &messages {
            match self
                .list_attempts_by_msg(app_id, &message.id, per_msg_limit)
                .await
            {
                Ok(mut batch) => attempts.append(&mut batch),
                Err(e) => warn!(msg_id = %message.id, "Skipping attempts for message: {}", e),
            }
        }
        Ok(attempts)
    }
}

/// Pull the `data` array out of the server's pagination envelope. A missing
/// or non-list `data` field is a shape error; a malformed record inside the
/// list degrades to a defaulted record.
fn parse_list<T: DeserializeOwned + Default>(
    envelope: &serde_json::Value,
    path: &str,
) -> Result<Vec<T>, String> {
    let data = envelope.get("data").unwrap_or(&serde_json::Value::Null);
    let items = data
        .as_array()
        .ok_or_else(|| format!("Invalid response from {}: data is not a list", path))?;
    Ok(items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(&ConsoleConfig {
            server_url: "http://localhost:8071/".to_string(),
            token: "testtoken".to_string(),
        })
    }

    #[test]
    fn api_url_joins_without_double_slash() {
        let client = client();
        assert_eq!(
            client.api_url("/app/app_1/msg"),
            "http://localhost:8071/api/v1/app/app_1/msg"
        );
    }

    #[test]
    fn parse_list_reads_pagination_envelope() {
        let envelope = json!({
            "data": [
                {"id": "msg_1", "eventType": "a.b", "timestamp": "2024-01-01T00:00:00Z"},
                {"id": "msg_2", "eventType": "a.c", "timestamp": "2024-01-01T01:00:00Z"}
            ],
            "iterator": "iter_xyz",
            "done": false
        });
        let messages: Vec<Message> = parse_list(&envelope, "/app/app_1/msg").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].event_type, "a.c");
    }

    #[test]
    fn parse_list_rejects_non_list_data() {
        let envelope = json!({"data": {"id": "msg_1"}});
        let result: Result<Vec<Message>, String> = parse_list(&envelope, "/app/app_1/msg");
        assert!(result.unwrap_err().contains("not a list"));
    }

    #[test]
    fn parse_list_rejects_missing_data_field() {
        let envelope = json!({"detail": "boom"});
        let result: Result<Vec<Message>, String> = parse_list(&envelope, "/app/app_1/msg");
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_defaults_malformed_records() {
        let envelope = json!({"data": [{"id": "msg_1"}, 42]});
        let messages: Vec<Message> = parse_list(&envelope, "/app/app_1/msg").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, "msg_1");
        assert_eq!(messages[1].id, "");
    }
}
