use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{endpoints, launch};
use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "raclaunch")]
#[command(about = "Remote access connection launcher", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// 接続先の指定
#[derive(Debug, Clone, ClapArgs)]
pub struct ConnectionArgs {
    /// Console base URL (overrides RACLAUNCH_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// API token (overrides RACLAUNCH_TOKEN and the config file)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

impl ConnectionArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            token: self.token.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick an endpoint of an application and connect to it
    Launch(launch::Args),

    /// List the endpoints of an application
    Endpoints(endpoints::Args),
}

impl Command {
    /// 対話的（TUIを使う）コマンドかどうか
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Launch(_))
    }
}
