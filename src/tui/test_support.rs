//! TUI テスト用ヘルパー

use crate::api::{Page, Pagination};
use crate::tui::table::{FetchFuture, TableColumn, TableSource};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

/// バッファを行ごとの文字列に変換
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// 描画してバッファの各行を返す
pub fn render_lines<F>(width: u16, height: u16, draw: F) -> Vec<String>
where
    F: FnOnce(&mut Frame),
{
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_lines(terminal.backend().buffer())
}

/// 文字列を項目とする2列のテスト用データ源
pub struct WordSource {
    pub words: Vec<String>,
}

impl WordSource {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl TableSource for WordSource {
    type Item = String;

    fn fetch_page(&self, page: u32) -> FetchFuture<String> {
        let words = self.words.clone();
        Box::pin(async move {
            Ok(Page {
                pagination: Pagination {
                    current: page,
                    ..Pagination::single(words.len() as u32)
                },
                results: words,
            })
        })
    }

    fn columns(&self) -> Vec<TableColumn> {
        vec![TableColumn::new("Word"), TableColumn::new("Length")]
    }

    fn row(&self, item: &String) -> Vec<String> {
        vec![item.clone(), item.len().to_string()]
    }
}

/// ページ情報付きのページを作成
pub fn page_of<T>(results: Vec<T>, current: u32, total_pages: u32, count: u32) -> Page<T> {
    Page {
        pagination: Pagination {
            next: if current < total_pages { current + 1 } else { 0 },
            previous: current.saturating_sub(1),
            count,
            current,
            total_pages,
            start_index: 0,
            end_index: 0,
        },
        results,
    }
}
