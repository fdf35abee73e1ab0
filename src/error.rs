use thiserror::Error;

/// raclaunch 統一エラー型
#[derive(Debug, Error)]
pub enum RacError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Invalid page number: {0}. Pages start at 1")]
    InvalidPage(u32),

    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, RacError>;

impl RacError {
    /// 認証エラー（401/403）かどうか
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RacError::Api { status: 401 | 403, .. })
    }

    /// テーブルのエラー行に表示する短いメッセージ
    pub fn table_message(&self) -> String {
        match self {
            RacError::Api { status, .. } if self.is_unauthorized() => {
                format!("Not authorized to list endpoints (status: {})", status)
            }
            RacError::Api { status, .. } => format!("Failed to load endpoints (status: {})", status),
            RacError::Network(_) => "Failed to reach the server".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
