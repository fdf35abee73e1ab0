//! raclaunch launch コマンド
//!
//! エンドポイント選択モーダルを開き、選択されたエンドポイントへ接続する。

use crate::api::{EndpointApi, RacClient};
use crate::cli::ConnectionArgs;
use crate::commands::{load_config, resolve_application};
use crate::error::RacError;
use crate::navigate::BrowserNavigator;
use crate::tui::{self, EndpointPicker, PickerOutcome};
use clap::Parser;
use owo_colors::OwoColorize;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    /// Application slug (without it, endpoints of provider 0 are listed)
    pub app: Option<String>,

    /// Use this provider ID instead of looking the application up
    #[arg(long)]
    pub provider: Option<u32>,

    /// Open endpoints in a new browser tab and keep the picker open
    #[arg(long)]
    pub new_tab: bool,
}

pub async fn run(args: Args, connection: &ConnectionArgs) -> Result<(), String> {
    let config = load_config(connection).map_err(|e| e.to_string())?;
    let api: Arc<dyn EndpointApi> = Arc::new(RacClient::new(&config));

    let app = resolve_application(api.as_ref(), args.app.as_deref(), args.provider, args.new_tab)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!(
        app = app.as_ref().map(|a| a.slug.as_str()).unwrap_or("-"),
        provider = app.as_ref().and_then(|a| a.provider).unwrap_or(0),
        "opening endpoint picker"
    );

    let picker = EndpointPicker::new(api, app);
    let navigator = BrowserNavigator;

    match tui::run_picker(picker, &navigator)
        .await
        .map_err(|e| e.to_string())?
    {
        PickerOutcome::Navigated(_) => Ok(()),
        PickerOutcome::Cancelled => {
            eprintln!("{}", RacError::Cancelled.to_string().yellow());
            Ok(())
        }
    }
}
