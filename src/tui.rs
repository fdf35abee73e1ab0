//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したエンドポイント選択モーダルを提供する。
//!
//! ## モジュール構成
//!
//! - `table`: ページ付き選択テーブル
//! - `modal`: テーブル付きモーダル（Model/Msg/update/view）
//! - `endpoint_modal`: RAC エンドポイント選択モーダル

mod common;
pub mod endpoint_modal;
pub mod modal;
pub mod table;

#[cfg(test)]
mod test_support;

pub use endpoint_modal::{EndpointPicker, PickerEffect};

use crate::api::{Endpoint, Page};
use crate::error::{RacError, Result};
use crate::navigate::Navigator;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use modal::{key_to_msg, Msg};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use table::FetchTicket;
use tokio::sync::mpsc::{self, UnboundedSender};

/// ピッカーの終了理由
#[derive(Debug, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Cancel で閉じられた
    Cancelled,
    /// 現在のコンテキストを離れて遷移した
    Navigated(String),
}

type Loaded = (u64, Result<Page<Endpoint>>);

/// ページ取得をバックグラウンドで開始
fn spawn_fetch(picker: &EndpointPicker, ticket: FetchTicket, tx: &UnboundedSender<Loaded>) {
    let fetch = picker.fetch(ticket);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetch.await;
        // 受信側が閉じていれば結果は不要
        let _ = tx.send((ticket.seq, result));
    });
}

/// update() の結果を処理
///
/// ピッカーを終了すべきときは `Some` を返す。
fn handle_effect(
    effect: PickerEffect,
    picker: &EndpointPicker,
    navigator: &dyn Navigator,
    tx: &UnboundedSender<Loaded>,
) -> Option<PickerOutcome> {
    match effect {
        PickerEffect::None => None,
        PickerEffect::Fetch(ticket) => {
            spawn_fetch(picker, ticket, tx);
            None
        }
        PickerEffect::Navigate(nav) if nav.leaves_current() => {
            Some(PickerOutcome::Navigated(nav.url().to_string()))
        }
        PickerEffect::Navigate(nav) => {
            navigator.navigate(&nav);
            None
        }
        PickerEffect::Closed => Some(PickerOutcome::Cancelled),
    }
}

/// ピッカーを開いて実行
///
/// 新しいコンテキストへの遷移はその場で行い、ピッカーは開いたまま。
/// 現在のコンテキストへの遷移はターミナルを復元した後に行う。
pub async fn run_picker(
    mut picker: EndpointPicker,
    navigator: &dyn Navigator,
) -> Result<PickerOutcome> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(&mut picker, navigator).await;

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    let outcome = result?;
    if let PickerOutcome::Navigated(url) = &outcome {
        navigator.assign(url);
    }
    Ok(outcome)
}

/// メインループ
async fn event_loop(
    picker: &mut EndpointPicker,
    navigator: &dyn Navigator,
) -> Result<PickerOutcome> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Loaded>();

    let ticket = picker.show();
    spawn_fetch(picker, ticket, &tx);

    loop {
        while let Ok((seq, result)) = rx.try_recv() {
            picker.update(Msg::Loaded { seq, result });
        }

        terminal
            .draw(|f| picker.view(f))
            .map_err(|e| RacError::Tui(e.to_string()))?;

        // 取得結果を拾うため、キー入力は短いタイムアウトで待つ
        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(msg) = key_to_msg(key.code) else {
                continue;
            };
            let effect = picker.update(msg);
            if let Some(outcome) = handle_effect(effect, picker, navigator, &tx) {
                return Ok(outcome);
            }
        }
    }
}
