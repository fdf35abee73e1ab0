/// 環境変数ユーティリティ
pub struct EnvVar;

/// コンソールのベースURL
pub const URL_VAR: &str = "RACLAUNCH_URL";
/// APIトークン
pub const TOKEN_VAR: &str = "RACLAUNCH_TOKEN";
/// 設定ファイルのパス
pub const CONFIG_VAR: &str = "RACLAUNCH_CONFIG";
/// ログフィルタ（EnvFilter 形式）
pub const LOG_VAR: &str = "RACLAUNCH_LOG";

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_existing_var() {
        std::env::set_var("RACLAUNCH_TEST_VAR", "test_value");
        assert_eq!(
            EnvVar::get("RACLAUNCH_TEST_VAR"),
            Some("test_value".to_string())
        );
        std::env::remove_var("RACLAUNCH_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_get_empty_var() {
        std::env::set_var("RACLAUNCH_TEST_EMPTY", "");
        assert_eq!(EnvVar::get("RACLAUNCH_TEST_EMPTY"), None);
        std::env::remove_var("RACLAUNCH_TEST_EMPTY");
    }

    #[test]
    fn test_get_nonexistent_var() {
        assert_eq!(EnvVar::get("RACLAUNCH_NONEXISTENT_12345"), None);
    }
}
