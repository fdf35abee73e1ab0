//! HTTP設定・認証プロバイダー・コンソール設定

use crate::env::{EnvVar, CONFIG_VAR, TOKEN_VAR, URL_VAR};
use crate::error::{RacError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "raclaunch-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 認証プロバイダー
///
/// コンソールAPIのトークンを保持する。
#[derive(Debug, Clone, Default)]
pub struct AuthProvider {
    token: Option<String>,
}

impl AuthProvider {
    /// 新しいAuthProviderを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// トークンを設定
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// トークンを取得
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// 認証ヘッダーを生成
    pub fn header(&self) -> Option<(&'static str, String)> {
        self.token
            .as_deref()
            .map(|t| ("Authorization", format!("Bearer {}", t)))
    }
}

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// TOML文字列から読み込み
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// ファイルから読み込み（存在しなければデフォルト）
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// 設定ファイルのデフォルトパス
///
/// `$RACLAUNCH_CONFIG` があればそれを、なければ `$HOME/.config/raclaunch/config.toml`。
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = EnvVar::get(CONFIG_VAR) {
        return Some(PathBuf::from(path));
    }
    EnvVar::get("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("raclaunch")
            .join("config.toml")
    })
}

/// コマンドラインで指定された上書き値
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub token: Option<String>,
}

/// 接続先コンソールの解決済み設定
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// ベースURL（末尾スラッシュなし）
    pub base_url: String,
    pub http: HttpConfig,
    pub auth: AuthProvider,
}

impl ConsoleConfig {
    /// 設定を解決
    ///
    /// 優先順位: コマンドライン > 環境変数 > 設定ファイル
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let base_url = overrides
            .url
            .or_else(|| EnvVar::get(URL_VAR))
            .or(file.url)
            .ok_or_else(|| {
                RacError::Config(format!(
                    "console URL is not set (use --url, {} or the config file)",
                    URL_VAR
                ))
            })?;

        let token = overrides
            .token
            .or_else(|| EnvVar::get(TOKEN_VAR))
            .or(file.token);

        let mut http = HttpConfig::default();
        if let Some(secs) = file.timeout_secs {
            http.timeout = Some(Duration::from_secs(secs));
        }

        let mut auth = AuthProvider::new();
        if let Some(token) = token {
            auth = auth.with_token(token);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            auth,
        })
    }

    /// デフォルトの設定ファイルを読み込んで解決
    pub fn load(overrides: Overrides) -> Result<Self> {
        let file = match default_config_path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(overrides, file)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
