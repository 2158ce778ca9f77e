//! # 極値計算モジュール
//!
//! コレクションを1回走査して最小値と最大値を同時に求めます。
//! 全順序（`Ord`）を持つ要素用の計算と、半順序（`PartialOrd`）しか持たない要素用の計算があります。

use log::{trace, warn};

use crate::config::UnorderedPolicy;
use crate::core::error::{ExtremaError, Result};
use crate::core::types::Extrema;

/// 最小値と最大値を逐次更新するアキュムレータ
#[derive(Debug, Clone)]
pub struct ExtremaAccumulator<T> {
    extrema: Option<Extrema<T>>,
}

impl<T: PartialOrd + Clone> ExtremaAccumulator<T> {
    /// 空のアキュムレータを作成
    pub fn new() -> Self {
        Self { extrema: None }
    }

    /// 値を1つ取り込む
    ///
    /// 同値の要素は最初に見つかったものが残ります。
    pub fn add_value(&mut self, value: T) {
        if let Some(extrema) = self.extrema.as_mut() {
            if value < extrema.minimum {
                extrema.minimum = value;
            } else if value > extrema.maximum {
                extrema.maximum = value;
            }
        } else {
            self.extrema = Some(Extrema::new(value.clone(), value));
        }
    }

    /// まだ値を1つも取り込んでいないかどうか
    pub fn is_empty(&self) -> bool {
        self.extrema.is_none()
    }

    /// 現在の極値を取得
    pub fn current(&self) -> Option<&Extrema<T>> {
        self.extrema.as_ref()
    }

    /// 取り込みを終えて極値を取り出す（値がなければ `None`）
    pub fn finish(self) -> Option<Extrema<T>> {
        self.extrema
    }
}

impl<T: PartialOrd + Clone> Default for ExtremaAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Clone> Extend<T> for ExtremaAccumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_value(value);
        }
    }
}

/// 全順序を持つコレクションの最小値と最大値を求める
///
/// 空のコレクションでは `None` を返します。
pub fn extrema<I>(collection: I) -> Option<Extrema<I::Item>>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    let mut accumulator = ExtremaAccumulator::new();
    accumulator.extend(collection);
    accumulator.finish()
}

/// 半順序しか持たないコレクションの最小値と最大値を求める
///
/// 自分自身と比較できない要素（`x.partial_cmp(&x)` が `None` になるもの、つまりNaN）は
/// `policy` に従って扱います。`Reject` なら最初に見つかった位置で
/// [`ExtremaError::Unordered`] を返し、`Skip` なら無視します。
///
/// 自分自身とは比較できるが互いに比較できない要素の組がある場合、
/// 比較できない側は現在の極値を置き換えません。結果は走査順に依存します。
pub fn partial_extrema<I>(
    collection: I,
    policy: UnorderedPolicy,
) -> Result<Option<Extrema<I::Item>>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    let mut accumulator = ExtremaAccumulator::new();
    let mut skipped = 0usize;

    for (index, value) in collection.into_iter().enumerate() {
        if value.partial_cmp(&value).is_none() {
            match policy {
                UnorderedPolicy::Reject => return Err(ExtremaError::Unordered { index }),
                UnorderedPolicy::Skip => {
                    warn!("比較できない要素をスキップしました: インデックス {}", index);
                    skipped += 1;
                    continue;
                }
            }
        }
        accumulator.add_value(value);
    }

    if skipped > 0 {
        trace!("スキップした要素数: {}", skipped);
    }

    Ok(accumulator.finish())
}
