use crate::api::{Application, EndpointApi};
use crate::cli::{Command, ConnectionArgs};
use crate::config::ConsoleConfig;
use crate::error::Result;

pub mod endpoints;
pub mod launch;

pub async fn dispatch(cli: crate::cli::Cli) -> std::result::Result<(), String> {
    match cli.command {
        Command::Launch(args) => launch::run(args, &cli.connection).await,
        Command::Endpoints(args) => endpoints::run(args, &cli.connection).await,
    }
}

/// 接続設定を解決
fn load_config(connection: &ConnectionArgs) -> Result<ConsoleConfig> {
    ConsoleConfig::load(connection.overrides())
}

/// ピッカーに渡すアプリケーションを解決
///
/// `--provider` が指定されていればAPIを呼ばずに合成する。
async fn resolve_application(
    api: &dyn EndpointApi,
    slug: Option<&str>,
    provider: Option<u32>,
    new_tab: bool,
) -> Result<Option<Application>> {
    if let Some(provider) = provider {
        let mut app = Application::with_provider(provider).open_in_new_tab(new_tab);
        if let Some(slug) = slug {
            app.slug = slug.to_string();
            app.name = slug.to_string();
        }
        return Ok(Some(app));
    }

    match slug {
        Some(slug) => {
            let mut app = api.get_application(slug).await?;
            if new_tab {
                app.open_in_new_tab = true;
            }
            Ok(Some(app))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
