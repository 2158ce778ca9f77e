//! # 極値所属問い合わせモジュール
//!
//! コレクションの最小値と最大値を求め、そのうちプローブ集合にも含まれているものを
//! 「最小値、最大値」の順で報告します。
//!
//! - コレクションが空なら結果も空です。
//! - 最小値と最大値が等しい場合、その値は一度だけ報告されます。
//! - どの入力に対してもエラーにはなりません（半順序版を除く）。

use log::{debug, trace};

use crate::config::QueryOptions;
use crate::core::error::Result;
use crate::core::extrema::{extrema, partial_extrema};
use crate::core::probe::Probe;
use crate::core::types::{Extrema, ExtremaReport, Extremum};

/// コレクションの極値のうちプローブ集合に含まれるものを返す
///
/// ```
/// use bounded_extrema::query;
/// use std::collections::HashSet;
///
/// let primes = [3, 7, 5, 19, 11, 13];
/// assert_eq!(query(primes, &[5, 11, 23]), Vec::<i32>::new());
///
/// let both: HashSet<i32> = [3, 17, 19].into_iter().collect();
/// assert_eq!(query(primes, &both), vec![3, 19]);
/// ```
pub fn query<I, P>(collection: I, probe: &P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
    P: Probe<I::Item> + ?Sized,
{
    query_report(collection, probe).into_vec()
}

/// [`query`] と同じ判定を行い、極値そのものも含む詳細な結果を返す
pub fn query_report<I, P>(collection: I, probe: &P) -> ExtremaReport<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
    P: Probe<I::Item> + ?Sized,
{
    report_from(extrema(collection), |value| probe.contains_value(value))
}

/// 半順序しか持たない要素（浮動小数点数など）に対する [`query`]
///
/// NaNのように自分自身とも比較できない要素は `options.unordered` に従って
/// 拒否するかスキップします。
pub fn query_partial<I, P>(
    collection: I,
    probe: &P,
    options: &QueryOptions,
) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
    P: Probe<I::Item> + ?Sized,
{
    Ok(query_partial_report(collection, probe, options)?.into_vec())
}

/// 半順序版の詳細な結果を返す
pub fn query_partial_report<I, P>(
    collection: I,
    probe: &P,
    options: &QueryOptions,
) -> Result<ExtremaReport<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
    P: Probe<I::Item> + ?Sized,
{
    let extrema = partial_extrema(collection, options.unordered)?;
    Ok(report_from(extrema, |value| probe.contains_value(value)))
}

/// 極値とプローブ判定関数から結果を組み立てる
pub(crate) fn report_from<T, F>(extrema: Option<Extrema<T>>, in_probe: F) -> ExtremaReport<T>
where
    T: PartialEq,
    F: Fn(&T) -> bool,
{
    let Some(extrema) = extrema else {
        trace!("空のコレクション: 極値なし");
        return ExtremaReport::empty();
    };

    let singular = extrema.is_singular();
    let minimum_in_probe = in_probe(&extrema.minimum);
    // 単一値なら最大値は最小値と同じ判定になるので調べない
    let maximum_in_probe = !singular && in_probe(&extrema.maximum);

    debug!("{}", membership_summary(singular, minimum_in_probe, maximum_in_probe));

    ExtremaReport::new(extrema, minimum_in_probe, maximum_in_probe)
}

/// 所属判定のログ用の要約
///
/// 単一値では最小値と最大値を1行にまとめ、最小値側の判定を使う。
fn membership_summary(singular: bool, minimum_in_probe: bool, maximum_in_probe: bool) -> String {
    let describe = |found: bool| if found { "含まれる" } else { "含まれない" };
    if singular {
        format!(
            "{}={}: プローブ集合に{}",
            Extremum::Minimum,
            Extremum::Maximum,
            describe(minimum_in_probe)
        )
    } else {
        format!(
            "{}: プローブ集合に{}, {}: プローブ集合に{}",
            Extremum::Minimum,
            describe(minimum_in_probe),
            Extremum::Maximum,
            describe(maximum_in_probe)
        )
    }
}
