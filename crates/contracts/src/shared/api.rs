use serde::{Deserialize, Serialize};

/// Error body returned by every failing API call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response of `GET /api/config`, lets the client discover the API address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfigResponse {
    pub port: u16,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
}

impl ServerConfigResponse {
    pub fn for_port(port: u16) -> Self {
        Self {
            port,
            base_url: format!("http://localhost:{}", port),
        }
    }
}
