//! テーブル付きモーダルダイアログの Model/Msg/update/view
//!
//! ヘッダー（タイトル）・ページ付きテーブル・フッター（Cancel ボタン）で構成される。
//! 開閉状態はこのモーダルが持つが、開くのは呼び出し側の責務。

use crate::api::Page;
use crate::error::Result;
use crate::tui::common::dialog_rect;
use crate::tui::table::{FetchTicket, PaginatedTable, TableSource};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// フッターのボタンラベル
pub const CANCEL_LABEL: &str = "Cancel";

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// モーダルへのメッセージ
pub enum Msg<T> {
    Up,
    Down,
    NextPage,
    PrevPage,
    /// 選択中の行をクリック
    Activate,
    /// Cancel ボタン
    Cancel,
    /// ページ取得の完了
    Loaded { seq: u64, result: Result<Page<T>> },
}

/// キーコードをメッセージに変換
pub fn key_to_msg<T>(key: KeyCode) -> Option<Msg<T>> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Some(Msg::NextPage),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(Msg::PrevPage),
        KeyCode::Enter => Some(Msg::Activate),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => Some(Msg::Cancel),
        _ => None,
    }
}

// ============================================================================
// Effect（update() の戻り値）
// ============================================================================

/// update() の結果として呼び出し側が行うこと
#[derive(Debug, PartialEq, Eq)]
pub enum Effect<T> {
    None,
    /// ページを取得する
    Fetch(FetchTicket),
    /// 行がクリックされた
    Selected(T),
    /// モーダルが閉じられた
    Closed,
}

// ============================================================================
// Model（モーダル状態）
// ============================================================================

/// テーブル付きモーダル
pub struct TableModal<S: TableSource> {
    source: S,
    table: PaginatedTable<S::Item>,
    title: String,
    open: bool,
}

impl<S: TableSource> TableModal<S> {
    /// 閉じた状態のモーダルを作成
    pub fn new(source: S, title: impl Into<String>, clickable: bool) -> Self {
        Self {
            source,
            table: PaginatedTable::new(clickable),
            title: title.into(),
            open: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn table(&self) -> &PaginatedTable<S::Item> {
        &self.table
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// モーダルを開き、1ページ目を要求
    pub fn show(&mut self) -> FetchTicket {
        self.open = true;
        self.table.invalidate()
    }

    /// 取得済みの内容を破棄して1ページ目を要求し直す
    pub fn invalidate(&mut self) -> FetchTicket {
        self.table.invalidate()
    }

    /// メッセージに応じて状態を更新
    pub fn update(&mut self, msg: Msg<S::Item>) -> Effect<S::Item> {
        match msg {
            Msg::Loaded { seq, result } => {
                self.table.apply(seq, result);
                Effect::None
            }
            Msg::Cancel => {
                self.open = false;
                Effect::Closed
            }
            _ if !self.open => Effect::None,
            Msg::Up => {
                self.table.select_prev();
                Effect::None
            }
            Msg::Down => {
                self.table.select_next();
                Effect::None
            }
            Msg::NextPage => self.table.next_page().map_or(Effect::None, Effect::Fetch),
            Msg::PrevPage => self.table.prev_page().map_or(Effect::None, Effect::Fetch),
            Msg::Activate => self
                .table
                .activate()
                .map_or(Effect::None, Effect::Selected),
        }
    }

    /// モーダルを描画（閉じていれば何も描画しない）
    pub fn view(&mut self, f: &mut Frame) {
        if !self.open {
            return;
        }

        let dialog_area = dialog_rect(72, 20, f.area());
        f.render_widget(Clear, dialog_area);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // ヘッダー
                Constraint::Min(3),    // テーブル
                Constraint::Length(1), // フッター
                Constraint::Length(1), // ヘルプ
            ])
            .split(inner);

        // ヘッダー
        let title = Paragraph::new(self.title.as_str()).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(title, chunks[0]);

        // テーブル
        self.table.view(f, chunks[1], &self.source);

        // フッター
        let cancel = Paragraph::new(format!("[ {} ]", CANCEL_LABEL))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(cancel, chunks[2]);

        // ヘルプ
        let help = Paragraph::new("↑/↓: move  ←/→: page  enter: connect  esc: cancel")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[3]);
    }
}

#[cfg(test)]
#[path = "modal_test.rs"]
mod tests;
