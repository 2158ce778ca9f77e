//! # コアモジュール
//!
//! 極値の計算、プローブ集合の抽象化、問い合わせ本体とその結果型を提供します。

/// 基本的なデータ型の定義モジュール
pub mod types;

/// エラー処理関連の機能を提供するモジュール
pub mod error;

/// 最小値・最大値の計算モジュール
pub mod extrema;

/// プローブ集合の所属判定モジュール
pub mod probe;

/// 問い合わせ本体
pub mod query;

/// スライス向けの拡張トレイト
pub mod ext;

// 型の再エクスポート
pub use self::types::{Extrema, ExtremaReport, Extremum};

// エラー関連の再エクスポート
pub use self::error::{ExtremaError, Result};

pub use self::ext::ExtremaExt;
pub use self::extrema::{extrema, partial_extrema, ExtremaAccumulator};
pub use self::probe::Probe;
pub use self::query::{query, query_partial, query_partial_report, query_report};
