//! RAC API クライアント

use crate::api::{ApiFuture, Application, Endpoint, EndpointApi, EndpointQuery, Page};
use crate::config::{AuthProvider, ConsoleConfig};
use crate::error::{RacError, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const API_PREFIX: &str = "/api/v3";

/// RAC API クライアント
pub struct RacClient {
    http: Client,
    base_url: String,
    auth: AuthProvider,
}

impl RacClient {
    /// 新しいRacClientを作成
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            http: config.http.build_client(),
            base_url: config.base_url.clone(),
            auth: config.auth.clone(),
        }
    }

    /// エンドポイント一覧URL
    fn endpoints_url(&self) -> String {
        format!("{}{}/rac/endpoints/", self.base_url, API_PREFIX)
    }

    /// アプリケーションURL
    fn application_url(&self, slug: &str) -> String {
        format!("{}{}/core/applications/{}/", self.base_url, API_PREFIX, slug)
    }

    /// リクエストを送信し、JSONとしてデコード
    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let mut req = req.header("Accept", "application/json");

        if let Some((name, value)) = self.auth.header() {
            req = req.header(name, value);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RacError::Api { status, message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl EndpointApi for RacClient {
    fn list_endpoints(&self, query: EndpointQuery) -> ApiFuture<'_, Page<Endpoint>> {
        Box::pin(async move {
            let url = self.endpoints_url();
            tracing::debug!(
                provider = query.provider(),
                page = query.page(),
                "listing RAC endpoints"
            );

            let req = self.http.get(&url).query(&query.to_pairs());
            let page: Page<Endpoint> = self.send_json(req).await?;

            tracing::debug!(
                count = page.results.len(),
                total_pages = page.pagination.total_pages,
                "received endpoint page"
            );
            Ok(page)
        })
    }

    fn get_application<'a>(&'a self, slug: &'a str) -> ApiFuture<'a, Application> {
        Box::pin(async move {
            let url = self.application_url(slug);
            tracing::debug!(slug, "fetching application");

            let result: Result<Application> = self.send_json(self.http.get(&url)).await;
            match result {
                Err(RacError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                    Err(RacError::ApplicationNotFound(slug.to_string()))
                }
                other => other,
            }
        })
    }
}

#[cfg(test)]
#[path = "rac_test.rs"]
mod tests;
