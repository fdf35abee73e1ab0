//! コンソールAPIクライアント
//!
//! RAC エンドポイント一覧とアプリケーション取得のための型と trait。

pub mod rac;

pub use rac::RacClient;

use crate::error::{RacError, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// API 呼び出しの戻り値
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// アプリケーション
///
/// ピッカーが参照するのは `provider` と `open_in_new_tab` のみ。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub pk: String,
    pub name: String,
    pub slug: String,
    /// 紐づくプロバイダーID
    #[serde(default)]
    pub provider: Option<u32>,
    #[serde(default)]
    pub open_in_new_tab: bool,
    #[serde(default)]
    pub meta_launch_url: String,
}

impl Application {
    /// プロバイダーIDのみを持つアプリケーションを作成
    pub fn with_provider(provider: u32) -> Self {
        Self {
            provider: Some(provider),
            ..Default::default()
        }
    }

    /// 新しいタブで開くかどうかを設定
    pub fn open_in_new_tab(mut self, open_in_new_tab: bool) -> Self {
        self.open_in_new_tab = open_in_new_tab;
        self
    }
}

/// RAC エンドポイント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub pk: String,
    pub name: String,
    #[serde(default)]
    pub provider: u32,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub host: String,
    pub launch_url: String,
    #[serde(default)]
    pub maximum_connections: i32,
}

impl Endpoint {
    /// 名前と起動URLだけを持つエンドポイントを作成
    pub fn new(name: impl Into<String>, launch_url: impl Into<String>) -> Self {
        Self {
            pk: String::new(),
            name: name.into(),
            provider: 0,
            protocol: String::new(),
            host: String::new(),
            launch_url: launch_url.into(),
            maximum_connections: 0,
        }
    }
}

/// ページネーション情報
///
/// `next` / `previous` はページがなければ 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub next: u32,
    pub previous: u32,
    pub count: u32,
    pub current: u32,
    pub total_pages: u32,
    pub start_index: u32,
    pub end_index: u32,
}

impl Pagination {
    /// 1ページだけの結果を表すページネーション
    pub fn single(count: u32) -> Self {
        Self {
            next: 0,
            previous: 0,
            count,
            current: 1,
            total_pages: 1,
            start_index: if count > 0 { 1 } else { 0 },
            end_index: count,
        }
    }
}

/// 1ページ分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// 1ページだけの結果を作成
    pub fn single(results: Vec<T>) -> Self {
        Self {
            pagination: Pagination::single(results.len() as u32),
            results,
        }
    }
}

/// エンドポイント一覧クエリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointQuery {
    provider: u32,
    page: u32,
}

impl EndpointQuery {
    /// クエリを作成（ページは1始まり）
    pub fn new(provider: u32, page: u32) -> Result<Self> {
        if page == 0 {
            return Err(RacError::InvalidPage(page));
        }
        Ok(Self { provider, page })
    }

    pub fn provider(&self) -> u32 {
        self.provider
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// クエリ文字列のペア
    pub fn to_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("provider", self.provider.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// エンドポイント API trait
pub trait EndpointApi: Send + Sync {
    /// プロバイダーで絞り込んだエンドポイントを1ページ取得
    fn list_endpoints(&self, query: EndpointQuery) -> ApiFuture<'_, Page<Endpoint>>;

    /// slug からアプリケーションを取得
    fn get_application<'a>(&'a self, slug: &'a str) -> ApiFuture<'a, Application>;
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
