//! raclaunch endpoints コマンド
//!
//! アプリケーションのエンドポイントを1ページ分表示する。

use crate::api::{Endpoint, EndpointApi, EndpointQuery, Page, RacClient};
use crate::cli::ConnectionArgs;
use crate::commands::{load_config, resolve_application};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Application slug (without it, endpoints of provider 0 are listed)
    pub app: Option<String>,

    /// Use this provider ID instead of looking the application up
    #[arg(long)]
    pub provider: Option<u32>,

    /// Page number (starting at 1)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, connection: &ConnectionArgs) -> Result<(), String> {
    let config = load_config(connection).map_err(|e| e.to_string())?;
    let client = RacClient::new(&config);

    let app = resolve_application(&client, args.app.as_deref(), args.provider, false)
        .await
        .map_err(|e| e.to_string())?;
    let provider = app.as_ref().and_then(|a| a.provider).unwrap_or(0);
    let query = EndpointQuery::new(provider, args.page).map_err(|e| e.to_string())?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} Fetching endpoints...") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.list_endpoints(query).await;
    spinner.finish_and_clear();
    let page = result.map_err(|e| e.to_string())?;

    if args.json {
        print_json(&page)
    } else {
        print_table(&page);
        Ok(())
    }
}

fn print_json(page: &Page<Endpoint>) -> Result<(), String> {
    serde_json::to_string_pretty(page)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize endpoints: {}", e))
}

fn print_table(page: &Page<Endpoint>) {
    if page.results.is_empty() {
        println!("No endpoints found");
        return;
    }

    println!("{}", render_table(page));
    println!(
        "Page {} of {} ({} endpoint(s))",
        page.pagination.current,
        page.pagination.total_pages.max(1),
        page.pagination.count
    );
}

/// エンドポイント一覧のテーブル
fn render_table(page: &Page<Endpoint>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Protocol", "Host", "Launch URL"]);

    for endpoint in &page.results {
        table.add_row(vec![
            endpoint.name.as_str(),
            endpoint.protocol.as_str(),
            endpoint.host.as_str(),
            endpoint.launch_url.as_str(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_contains_endpoints() {
        let mut endpoint = Endpoint::new("rdp-host-1", "https://x/rac/1");
        endpoint.protocol = "rdp".to_string();
        endpoint.host = "10.0.0.1".to_string();
        let page = Page::single(vec![endpoint, Endpoint::new("rdp-host-2", "https://x/rac/2")]);

        let output = render_table(&page).to_string();

        assert!(output.contains("Launch URL"));
        assert!(output.contains("rdp-host-1"));
        assert!(output.contains("10.0.0.1"));
        assert!(output.contains("https://x/rac/2"));
    }
}
