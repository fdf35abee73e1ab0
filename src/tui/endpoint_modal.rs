//! RAC エンドポイント選択モーダル
//!
//! アプリケーションのプロバイダーに属するエンドポイントを一覧し、
//! 選択された行の起動URLへ遷移する。

use crate::api::{Application, Endpoint, EndpointApi, EndpointQuery};
use crate::navigate::Navigation;
use crate::tui::modal::{Effect, Msg, TableModal};
use crate::tui::table::{FetchFuture, FetchTicket, TableColumn, TableSource};
use ratatui::prelude::*;
use std::sync::Arc;

/// モーダルのタイトル
pub const TITLE: &str = "Select endpoint to connect to";

/// エンドポイント一覧のデータ源
pub struct EndpointSource {
    api: Arc<dyn EndpointApi>,
    app: Option<Application>,
}

impl EndpointSource {
    pub fn new(api: Arc<dyn EndpointApi>, app: Option<Application>) -> Self {
        Self { api, app }
    }

    /// 絞り込みに使うプロバイダー（アプリ未設定なら 0）
    pub fn provider(&self) -> u32 {
        self.app.as_ref().and_then(|a| a.provider).unwrap_or(0)
    }

    /// 新しいタブで開くかどうか（アプリ未設定なら同じタブ）
    pub fn open_in_new_tab(&self) -> bool {
        self.app.as_ref().is_some_and(|a| a.open_in_new_tab)
    }

    /// 行が選択されたときのナビゲーション
    pub fn on_row_selected(&self, endpoint: &Endpoint) -> Navigation {
        if self.open_in_new_tab() {
            Navigation::NewContext(endpoint.launch_url.clone())
        } else {
            Navigation::CurrentContext(endpoint.launch_url.clone())
        }
    }
}

impl TableSource for EndpointSource {
    type Item = Endpoint;

    fn fetch_page(&self, page: u32) -> FetchFuture<Endpoint> {
        let api = Arc::clone(&self.api);
        let provider = self.provider();
        Box::pin(async move {
            let query = EndpointQuery::new(provider, page)?;
            api.list_endpoints(query).await
        })
    }

    fn columns(&self) -> Vec<TableColumn> {
        vec![TableColumn::new("Name")]
    }

    fn row(&self, item: &Endpoint) -> Vec<String> {
        vec![item.name.clone()]
    }
}

/// ピッカーの update() 結果
#[derive(Debug, PartialEq, Eq)]
pub enum PickerEffect {
    None,
    Fetch(FetchTicket),
    Navigate(Navigation),
    Closed,
}

/// エンドポイント選択モーダル
pub struct EndpointPicker {
    modal: TableModal<EndpointSource>,
}

impl EndpointPicker {
    /// 閉じた状態のピッカーを作成
    pub fn new(api: Arc<dyn EndpointApi>, app: Option<Application>) -> Self {
        Self {
            modal: TableModal::new(EndpointSource::new(api, app), TITLE, true),
        }
    }

    pub fn modal(&self) -> &TableModal<EndpointSource> {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// モーダルを開く
    pub fn show(&mut self) -> FetchTicket {
        self.modal.show()
    }

    /// アプリケーションを差し替える
    ///
    /// 変更があれば取得済みのページは破棄され、1ページ目の要求を返す。
    pub fn set_app(&mut self, app: Option<Application>) -> Option<FetchTicket> {
        if self.modal.source().app == app {
            return None;
        }
        tracing::debug!(
            provider = app.as_ref().and_then(|a| a.provider).unwrap_or(0),
            "application rebound, refetching endpoints"
        );
        self.modal.source_mut().app = app;
        Some(self.modal.invalidate())
    }

    /// 要求に対応するページ取得を開始
    pub fn fetch(&self, ticket: FetchTicket) -> FetchFuture<Endpoint> {
        self.modal.source().fetch_page(ticket.page)
    }

    /// メッセージに応じて状態を更新
    pub fn update(&mut self, msg: Msg<Endpoint>) -> PickerEffect {
        match self.modal.update(msg) {
            Effect::None => PickerEffect::None,
            Effect::Fetch(ticket) => PickerEffect::Fetch(ticket),
            Effect::Selected(endpoint) => {
                PickerEffect::Navigate(self.modal.source().on_row_selected(&endpoint))
            }
            Effect::Closed => PickerEffect::Closed,
        }
    }

    /// 描画
    pub fn view(&mut self, f: &mut Frame) {
        self.modal.view(f);
    }
}

#[cfg(test)]
#[path = "endpoint_modal_test.rs"]
mod tests;
