//! 問い合わせ設定モジュール
//!
//! 半順序しか持たない要素（浮動小数点数のNaNなど）をどう扱うかを決めるオプションを提供します。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{ExtremaError, Result};

/// 比較できない要素の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnorderedPolicy {
    /// エラーとして入力全体を拒否する
    #[default]
    Reject,
    /// 比較できない要素を無視して残りの要素で極値を求める
    Skip,
}

impl FromStr for UnorderedPolicy {
    type Err = ExtremaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(UnorderedPolicy::Reject),
            "skip" => Ok(UnorderedPolicy::Skip),
            _ => Err(ExtremaError::InvalidOption(format!("未知のポリシー: {}", s))),
        }
    }
}

impl fmt::Display for UnorderedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnorderedPolicy::Reject => write!(f, "reject"),
            UnorderedPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// 問い合わせのオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOptions {
    /// 比較できない要素の扱い
    pub unordered: UnorderedPolicy,
}

impl QueryOptions {
    /// 既定値のオプションを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 比較できない要素の扱いを設定
    pub fn with_unordered(mut self, policy: UnorderedPolicy) -> Self {
        self.unordered = policy;
        self
    }

    /// TOML文字列に変換
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl FromStr for QueryOptions {
    type Err = ExtremaError;

    fn from_str(s: &str) -> Result<Self> {
        let options: QueryOptions = toml::from_str(s)?;
        Ok(options)
    }
}
