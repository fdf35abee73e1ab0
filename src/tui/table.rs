//! ページ付き選択テーブル
//!
//! データ源（`TableSource`）から1ページずつ取得した項目を表示する汎用テーブル。
//! 取得状態・ページ送り・クリック時の選択はテーブル側が持つ。

use crate::api::{Page, Pagination};
use crate::error::{RacError, Result};
use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use std::future::Future;
use std::pin::Pin;

/// ページ取得の戻り値
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Page<T>>> + Send + 'static>>;

/// 列の定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub title: String,
}

impl TableColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// テーブルのデータ源
pub trait TableSource {
    type Item: Clone + Send + 'static;

    /// 指定ページ（1始まり）を取得
    fn fetch_page(&self, page: u32) -> FetchFuture<Self::Item>;

    /// 列の定義
    fn columns(&self) -> Vec<TableColumn>;

    /// 1行分のセル
    fn row(&self, item: &Self::Item) -> Vec<String>;
}

/// 発行済みのページ取得要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
}

/// ページ付き選択テーブルの状態
#[derive(Debug)]
pub struct PaginatedTable<T> {
    items: Vec<T>,
    pagination: Option<Pagination>,
    page: u32,
    loading: bool,
    error: Option<String>,
    state: TableState,
    clickable: bool,
    seq: u64,
}

impl<T: Clone> PaginatedTable<T> {
    /// 新しいテーブルを作成
    pub fn new(clickable: bool) -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            page: 1,
            loading: false,
            error: None,
            state: TableState::default(),
            clickable,
            seq: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// ページ取得を要求
    ///
    /// 以前の要求への応答はこれ以降すべて破棄される。
    pub fn request(&mut self, page: u32) -> Result<FetchTicket> {
        if page == 0 {
            return Err(RacError::InvalidPage(page));
        }
        self.seq += 1;
        self.page = page;
        self.loading = true;
        Ok(FetchTicket {
            seq: self.seq,
            page,
        })
    }

    /// 取得済みの内容を破棄し、1ページ目を要求し直す
    pub fn invalidate(&mut self) -> FetchTicket {
        self.items.clear();
        self.pagination = None;
        self.error = None;
        self.state.select(None);
        self.seq += 1;
        self.page = 1;
        self.loading = true;
        FetchTicket {
            seq: self.seq,
            page: 1,
        }
    }

    /// 取得結果を反映
    ///
    /// 最新の要求以外への応答は無視し、`false` を返す。
    pub fn apply(&mut self, seq: u64, result: Result<Page<T>>) -> bool {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "dropping stale page response");
            return false;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.items = page.results;
                self.pagination = Some(page.pagination);
                self.error = None;
                self.state
                    .select(if self.items.is_empty() { None } else { Some(0) });
            }
            Err(e) => {
                tracing::warn!(page = self.page, error = %e, "failed to fetch page");
                self.items.clear();
                self.error = Some(e.table_message());
                self.state.select(None);
            }
        }
        true
    }

    /// 選択を上に移動
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some(current.saturating_sub(1)));
    }

    /// 選択を下に移動
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = self
            .state
            .selected()
            .map_or(0, |i| (i + 1).min(self.items.len() - 1));
        self.state.select(Some(next));
    }

    /// 選択中の項目
    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    /// 選択中の行をクリック（clickable のときのみ）
    pub fn activate(&self) -> Option<T> {
        if !self.clickable {
            return None;
        }
        self.selected().cloned()
    }

    /// 全ページ数（不明なら現在ページまで）
    fn total_pages(&self) -> u32 {
        self.pagination
            .map(|p| p.total_pages)
            .unwrap_or(self.page)
            .max(1)
    }

    /// 次のページを要求
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if self.page >= self.total_pages() {
            return None;
        }
        self.request(self.page + 1).ok()
    }

    /// 前のページを要求
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        if self.page <= 1 {
            return None;
        }
        self.request(self.page - 1).ok()
    }

    /// ページ表示用の文字列
    pub fn status_line(&self) -> String {
        let mut status = match &self.pagination {
            Some(p) => format!("Page {} of {} ({} items)", self.page, self.total_pages(), p.count),
            None => format!("Page {}", self.page),
        };
        if self.loading {
            status.push_str("  loading...");
        }
        status
    }

    /// テーブルを描画
    pub fn view<S>(&mut self, f: &mut Frame, area: Rect, source: &S)
    where
        S: TableSource<Item = T>,
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(area);

        let columns = source.columns();
        let header = Row::new(
            columns
                .iter()
                .map(|c| Cell::from(c.title.clone()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .items
            .iter()
            .map(|item| Row::new(source.row(item).into_iter().map(Cell::from).collect::<Vec<_>>()))
            .collect();

        let widths = vec![Constraint::Fill(1); columns.len().max(1)];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(table, chunks[0], &mut self.state);

        // 行がないときはヘッダー直下にメッセージ行を表示
        if self.items.is_empty() {
            let message = match &self.error {
                Some(error) => Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
                None if self.loading => {
                    Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray))
                }
                None => Paragraph::new("No objects found.").style(Style::default().fg(Color::DarkGray)),
            };
            let area = chunks[0];
            if area.height > 1 {
                let row_area = Rect::new(area.x, area.y + 1, area.width, 1);
                f.render_widget(message, row_area);
            }
        }

        let status = Paragraph::new(self.status_line()).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, chunks[1]);
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
