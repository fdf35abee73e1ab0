use super::*;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    std::env::remove_var(URL_VAR);
    std::env::remove_var(TOKEN_VAR);
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "raclaunch-cli");
    assert!(config.timeout.is_some());
}

#[test]
fn test_auth_provider_builder() {
    let auth = AuthProvider::new().with_token("secret");

    assert_eq!(auth.token(), Some("secret"));
    assert_eq!(
        auth.header(),
        Some(("Authorization", "Bearer secret".to_string()))
    );
}

#[test]
fn test_auth_provider_without_token_has_no_header() {
    assert_eq!(AuthProvider::new().header(), None);
}

#[test]
fn test_file_config_parse() {
    let config = FileConfig::parse(
        r#"
url = "https://console.example.com"
token = "abc"
timeout_secs = 5
"#,
    )
    .unwrap();

    assert_eq!(config.url.as_deref(), Some("https://console.example.com"));
    assert_eq!(config.token.as_deref(), Some("abc"));
    assert_eq!(config.timeout_secs, Some(5));
}

#[test]
fn test_file_config_parse_invalid() {
    let result = FileConfig::parse("url = [");
    assert!(matches!(result, Err(RacError::ConfigParse(_))));
}

#[test]
fn test_file_config_load_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = FileConfig::load(&dir.path().join("missing.toml")).unwrap();
    assert!(config.url.is_none());
    assert!(config.token.is_none());
}

#[test]
fn test_file_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "url = \"https://from-file\"").unwrap();

    let config = FileConfig::load(file.path()).unwrap();
    assert_eq!(config.url.as_deref(), Some("https://from-file"));
}

#[test]
#[serial]
fn test_resolve_override_wins_over_env_and_file() {
    clear_env();
    std::env::set_var(URL_VAR, "https://from-env");

    let file = FileConfig {
        url: Some("https://from-file".to_string()),
        ..Default::default()
    };
    let overrides = Overrides {
        url: Some("https://from-flag/".to_string()),
        token: None,
    };

    let config = ConsoleConfig::resolve(overrides, file).unwrap();
    assert_eq!(config.base_url, "https://from-flag");

    clear_env();
}

#[test]
#[serial]
fn test_resolve_env_wins_over_file() {
    clear_env();
    std::env::set_var(URL_VAR, "https://from-env");
    std::env::set_var(TOKEN_VAR, "env-token");

    let file = FileConfig {
        url: Some("https://from-file".to_string()),
        token: Some("file-token".to_string()),
        timeout_secs: None,
    };

    let config = ConsoleConfig::resolve(Overrides::default(), file).unwrap();
    assert_eq!(config.base_url, "https://from-env");
    assert_eq!(config.auth.token(), Some("env-token"));

    clear_env();
}

#[test]
#[serial]
fn test_resolve_falls_back_to_file() {
    clear_env();

    let file = FileConfig {
        url: Some("https://from-file".to_string()),
        token: Some("file-token".to_string()),
        timeout_secs: Some(7),
    };

    let config = ConsoleConfig::resolve(Overrides::default(), file).unwrap();
    assert_eq!(config.base_url, "https://from-file");
    assert_eq!(config.auth.token(), Some("file-token"));
    assert_eq!(config.http.timeout, Some(Duration::from_secs(7)));
}

#[test]
#[serial]
fn test_resolve_without_url_is_error() {
    clear_env();

    let result = ConsoleConfig::resolve(Overrides::default(), FileConfig::default());
    assert!(matches!(result, Err(RacError::Config(_))));
}
