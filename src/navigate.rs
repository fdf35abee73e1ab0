//! 起動URLへのナビゲーション
//!
//! ピッカーはナビゲーションの種類だけを決め、実際の遷移は `Navigator` に委ねる。

/// ナビゲーションの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// 新しいブラウジングコンテキストで開く（モーダルは開いたまま）
    NewContext(String),
    /// 現在のコンテキストを置き換える
    CurrentContext(String),
}

impl Navigation {
    pub fn url(&self) -> &str {
        match self {
            Navigation::NewContext(url) | Navigation::CurrentContext(url) => url,
        }
    }

    /// 現在のコンテキストを離れるかどうか
    pub fn leaves_current(&self) -> bool {
        matches!(self, Navigation::CurrentContext(_))
    }
}

/// ナビゲーション先のプラットフォーム
///
/// 失敗は呼び出し元に返さない（投げっぱなし）。
pub trait Navigator {
    /// 新しいコンテキストでURLを開く
    fn open_new(&self, url: &str);

    /// 現在のコンテキストをURLへ遷移させる
    fn assign(&self, url: &str);

    /// ナビゲーションを実行
    fn navigate(&self, navigation: &Navigation) {
        match navigation {
            Navigation::NewContext(url) => self.open_new(url),
            Navigation::CurrentContext(url) => self.assign(url),
        }
    }
}

/// システムのブラウザを使う Navigator
///
/// ターミナルには「現在のページ」がないため、`assign` は
/// ピッカー終了後に呼ばれ、URLを表示してからブラウザで開く。
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn open(url: &str) {
        if let Err(e) = webbrowser::open(url) {
            tracing::warn!(url, error = %e, "failed to open browser");
        }
    }
}

impl Navigator for BrowserNavigator {
    fn open_new(&self, url: &str) {
        tracing::info!(url, "opening endpoint in new browser tab");
        Self::open(url);
    }

    fn assign(&self, url: &str) {
        tracing::info!(url, "navigating to endpoint");
        println!("{}", url);
        Self::open(url);
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingNavigator;
    use super::*;

    #[test]
    fn test_navigation_url() {
        assert_eq!(Navigation::NewContext("https://a".into()).url(), "https://a");
        assert_eq!(
            Navigation::CurrentContext("https://b".into()).url(),
            "https://b"
        );
    }

    #[test]
    fn test_leaves_current() {
        assert!(!Navigation::NewContext("u".into()).leaves_current());
        assert!(Navigation::CurrentContext("u".into()).leaves_current());
    }

    #[test]
    fn test_navigate_dispatches_new_context() {
        let navigator = RecordingNavigator::default();
        navigator.navigate(&Navigation::NewContext("https://x/rac/1".into()));
        assert_eq!(
            *navigator.calls.borrow(),
            vec![Navigation::NewContext("https://x/rac/1".into())]
        );
    }

    #[test]
    fn test_navigate_dispatches_current_context() {
        let navigator = RecordingNavigator::default();
        navigator.navigate(&Navigation::CurrentContext("https://x/rac/2".into()));
        assert_eq!(
            *navigator.calls.borrow(),
            vec![Navigation::CurrentContext("https://x/rac/2".into())]
        );
    }
}
