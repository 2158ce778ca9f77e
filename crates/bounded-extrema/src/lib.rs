//! コレクションの極値所属問い合わせライブラリ
//!
//! 比較可能な要素からなるコレクションの最小値と最大値を求め、
//! そのうち別のコレクション（プローブ集合）にも含まれるものを
//! 「最小値、最大値」の順で報告します。
//!
//! ```
//! use bounded_extrema::{query, ExtremaExt};
//!
//! let greetings = ["Hello", "Hey", "Hi", "Goodbye", "Bye"];
//! assert_eq!(query(greetings, &["Goodbye", "Hi", "What's up?"]), vec!["Hi"]);
//! assert_eq!(greetings.extrema_in(&["Bye", "HI"]), vec!["Bye"]);
//! ```

/// コアモジュール：極値の計算と問い合わせ
pub mod core;

/// 問い合わせ設定モジュール
pub mod config;

pub use crate::config::{QueryOptions, UnorderedPolicy};
pub use crate::core::{
    extrema, partial_extrema, query, query_partial, query_partial_report, query_report,
    Extrema, ExtremaAccumulator, ExtremaError, ExtremaExt, ExtremaReport, Extremum, Probe,
    Result,
};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
