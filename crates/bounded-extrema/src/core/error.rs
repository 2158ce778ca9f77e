//! # エラー処理モジュール
//!
//! 全順序を持つ要素に対する問い合わせは失敗しません。
//! エラーになり得るのは、半順序しか持たない要素（NaNを含む浮動小数点数など）を
//! 拒否ポリシーで扱った場合と、設定やJSONの変換に失敗した場合だけです。

use thiserror::Error;

/// 結果型のエイリアス
pub type Result<T, E = ExtremaError> = std::result::Result<T, E>;

/// 問い合わせと設定のエラー
#[derive(Error, Debug)]
pub enum ExtremaError {
    /// 自分自身とも比較できない要素（NaNなど）を検出した
    #[error("比較できない要素があります: インデックス {index}")]
    Unordered {
        /// 入力コレクション内での位置
        index: usize,
    },

    #[error("無効なオプション: {0}")]
    InvalidOption(String),

    #[error("設定の解析エラー: {0}")]
    Config(#[from] toml::de::Error),

    #[error("設定の出力エラー: {0}")]
    Ser(#[from] toml::ser::Error),

    #[error("JSON変換エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("不正な結果データ: {0}")]
    InvalidReport(String),
}

impl ExtremaError {
    /// 順序付けできない要素が原因のエラーかどうか
    pub fn is_unordered(&self) -> bool {
        matches!(self, ExtremaError::Unordered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_message_names_index() {
        let error = ExtremaError::Unordered { index: 4 };
        assert!(error.is_unordered());
        assert!(error.to_string().contains('4'));
    }

    #[test]
    fn test_invalid_option_is_not_unordered() {
        let error = ExtremaError::InvalidOption("sometimes".to_string());
        assert!(!error.is_unordered());
        assert!(error.to_string().contains("sometimes"));
    }
}
