//! # 拡張トレイトモジュール
//!
//! スライス（と、参照外しで `Vec` や配列）に極値の問い合わせメソッドを追加します。

use crate::core::extrema::extrema;
use crate::core::probe::Probe;
use crate::core::query::report_from;
use crate::core::types::{Extrema, ExtremaReport};

/// 全順序を持つ要素のスライスに対する極値操作
pub trait ExtremaExt<T> {
    /// 最小値と最大値（空なら `None`）
    fn bounds(&self) -> Option<Extrema<&T>>;

    /// 極値のうちプローブ集合に含まれるものを最小値、最大値の順で返す
    fn extrema_in<P>(&self, probe: &P) -> Vec<T>
    where
        P: Probe<T> + ?Sized;

    /// [`ExtremaExt::extrema_in`] の詳細な結果
    fn extrema_report_in<P>(&self, probe: &P) -> ExtremaReport<T>
    where
        P: Probe<T> + ?Sized;
}

impl<T: Ord + Clone> ExtremaExt<T> for [T] {
    fn bounds(&self) -> Option<Extrema<&T>> {
        extrema(self.iter())
    }

    fn extrema_in<P>(&self, probe: &P) -> Vec<T>
    where
        P: Probe<T> + ?Sized,
    {
        self.extrema_report_in(probe).into_vec()
    }

    fn extrema_report_in<P>(&self, probe: &P) -> ExtremaReport<T>
    where
        P: Probe<T> + ?Sized,
    {
        // 比較は参照のまま行い、報告する値だけを複製する
        report_from(self.bounds(), |value: &&T| probe.contains_value(*value)).cloned()
    }
}
