use serde::{Deserialize, Serialize};

pub const SERVER_URL_VAR: &str = "HOOKWATCH_SERVER_URL";
pub const API_TOKEN_VAR: &str = "HOOKWATCH_API_TOKEN";

/// Connection settings for the delivery server's management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub server_url: String,
    pub token: String,
}

impl ConsoleConfig {
    /// Read config from the environment. The binary loads `.env` first via
    /// dotenvy, so either source works.
    pub fn from_env() -> Result<Self, String> {
        let server_url = std::env::var(SERVER_URL_VAR)
            .map_err(|_| format!("{} not set. Point it at the delivery server.", SERVER_URL_VAR))?;
        let token = std::env::var(API_TOKEN_VAR)
            .map_err(|_| format!("{} not set. Generate a management token first.", API_TOKEN_VAR))?;
        Ok(Self {
            server_url: normalize_base_url(&server_url),
            token,
        })
    }
}

/// Trim trailing slashes so path joins never produce `//`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
