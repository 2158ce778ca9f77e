//! # 基本データ型
//!
//! 極値（最小値・最大値）の組と、プローブ集合に対する問い合わせ結果を表す型を定義します。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{ExtremaError, Result};

/// 極値の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    /// 最小値
    Minimum,
    /// 最大値
    Maximum,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extremum::Minimum => write!(f, "minimum"),
            Extremum::Maximum => write!(f, "maximum"),
        }
    }
}

/// 空でないコレクションの最小値と最大値の組
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extrema<T> {
    pub minimum: T,
    pub maximum: T,
}

impl<T> Extrema<T> {
    /// 新しい極値の組を作成
    pub fn new(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    /// 指定した種類の極値を取得
    pub fn get(&self, kind: Extremum) -> &T {
        match kind {
            Extremum::Minimum => &self.minimum,
            Extremum::Maximum => &self.maximum,
        }
    }

    /// 最小値と最大値が同じ値かどうか（異なる値が1つしかないコレクション）
    pub fn is_singular(&self) -> bool
    where
        T: PartialEq,
    {
        self.minimum == self.maximum
    }

    /// `(最小値, 最大値)` のタプルに変換
    pub fn into_pair(self) -> (T, T) {
        (self.minimum, self.maximum)
    }
}

/// 問い合わせの詳細な結果
///
/// コレクションの極値と、そのうちプローブ集合に含まれていたものを保持します。
/// 報告順は常に「最小値、最大値」です。最小値と最大値が等しい場合、
/// その値は最小値として一度だけ報告されます。
///
/// デシリアライズ時にもこの性質を検査します（[`RawReport`] を参照）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawReport<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialEq")
)]
pub struct ExtremaReport<T> {
    extrema: Option<Extrema<T>>,
    minimum_in_probe: bool,
    maximum_in_probe: bool,
}

/// 検査前の結果データ
///
/// [`ExtremaReport`] はこの形で読み込まれてから検査されます。
/// 極値がないのにフラグが立っているものは拒否し、
/// 単一値なのに最大値側のフラグが立っているものは最小値側にまとめます。
#[derive(Debug, Deserialize)]
pub struct RawReport<T> {
    extrema: Option<Extrema<T>>,
    #[serde(default)]
    minimum_in_probe: bool,
    #[serde(default)]
    maximum_in_probe: bool,
}

impl<T: PartialEq> TryFrom<RawReport<T>> for ExtremaReport<T> {
    type Error = ExtremaError;

    fn try_from(raw: RawReport<T>) -> Result<Self> {
        match raw.extrema {
            None if raw.minimum_in_probe || raw.maximum_in_probe => Err(
                ExtremaError::InvalidReport("極値がないのに所属フラグが立っています".to_string()),
            ),
            None => Ok(Self::empty()),
            Some(extrema) => {
                // 単一値では最大値も最小値と同じ値なので、どちらのフラグも最小値側として扱う
                let minimum_in_probe = raw.minimum_in_probe
                    || (extrema.is_singular() && raw.maximum_in_probe);
                Ok(Self::new(extrema, minimum_in_probe, raw.maximum_in_probe))
            }
        }
    }
}

impl<T> ExtremaReport<T> {
    /// 空のコレクションに対する結果
    pub fn empty() -> Self {
        Self {
            extrema: None,
            minimum_in_probe: false,
            maximum_in_probe: false,
        }
    }

    /// 極値とプローブ判定から結果を組み立てる
    ///
    /// 単一値のコレクションでは最大値側の判定を無視し、値を一度だけ報告します。
    pub(crate) fn new(
        extrema: Extrema<T>,
        minimum_in_probe: bool,
        maximum_in_probe: bool,
    ) -> Self
    where
        T: PartialEq,
    {
        let singular = extrema.is_singular();
        Self {
            extrema: Some(extrema),
            minimum_in_probe,
            maximum_in_probe: maximum_in_probe && !singular,
        }
    }

    /// コレクションの極値（空のコレクションでは `None`）
    pub fn extrema(&self) -> Option<&Extrema<T>> {
        self.extrema.as_ref()
    }

    /// 指定した極値がプローブ集合に含まれていたかどうか
    ///
    /// 最小値と最大値が等しい場合、どちらを問い合わせても同じ答えになります。
    pub fn contains_extremum(&self, kind: Extremum) -> bool
    where
        T: PartialEq,
    {
        match kind {
            Extremum::Minimum => self.minimum_in_probe,
            Extremum::Maximum => {
                self.maximum_in_probe || (self.minimum_in_probe && self.is_singular())
            }
        }
    }

    /// 極値が1つの値に縮退しているかどうか（空のコレクションでは `false`）
    pub fn is_singular(&self) -> bool
    where
        T: PartialEq,
    {
        self.extrema.as_ref().is_some_and(Extrema::is_singular)
    }

    /// 報告された値への参照（0〜2個、最小値が先）
    pub fn matches(&self) -> Vec<&T> {
        let mut matches = Vec::with_capacity(2);
        if let Some(extrema) = &self.extrema {
            if self.minimum_in_probe {
                matches.push(&extrema.minimum);
            }
            if self.maximum_in_probe {
                matches.push(&extrema.maximum);
            }
        }
        matches
    }

    /// 報告された値の個数（0〜2）
    pub fn len(&self) -> usize {
        usize::from(self.minimum_in_probe) + usize::from(self.maximum_in_probe)
    }

    /// 報告された値がないかどうか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 報告された値を所有権ごと取り出す
    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(2);
        if let Some(Extrema { minimum, maximum }) = self.extrema {
            if self.minimum_in_probe {
                values.push(minimum);
            }
            if self.maximum_in_probe {
                values.push(maximum);
            }
        }
        values
    }

    /// JSON文字列に変換
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: Clone> ExtremaReport<&T> {
    /// 参照で持っている結果を所有する結果に変換
    pub fn cloned(self) -> ExtremaReport<T> {
        ExtremaReport {
            extrema: self
                .extrema
                .map(|extrema| Extrema::new(extrema.minimum.clone(), extrema.maximum.clone())),
            minimum_in_probe: self.minimum_in_probe,
            maximum_in_probe: self.maximum_in_probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report: ExtremaReport<i32> = ExtremaReport::empty();
        assert!(report.is_empty());
        assert!(report.extrema().is_none());
        assert!(!report.contains_extremum(Extremum::Minimum));
        assert!(!report.contains_extremum(Extremum::Maximum));
        assert_eq!(report.into_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_report_order_is_minimum_first() {
        let report = ExtremaReport::new(Extrema::new(3, 19), true, true);
        assert_eq!(report.len(), 2);
        assert_eq!(report.matches(), vec![&3, &19]);
        assert_eq!(report.into_vec(), vec![3, 19]);
    }

    #[test]
    fn test_singular_report_reports_once() {
        let report = ExtremaReport::new(Extrema::new(7, 7), true, true);
        assert_eq!(report.len(), 1);
        assert!(report.contains_extremum(Extremum::Minimum));
        assert!(report.contains_extremum(Extremum::Maximum));
        assert_eq!(report.into_vec(), vec![7]);
    }

    #[test]
    fn test_extrema_accessors() {
        let extrema = Extrema::new("Bye", "Hi");
        assert_eq!(*extrema.get(Extremum::Minimum), "Bye");
        assert_eq!(*extrema.get(Extremum::Maximum), "Hi");
        assert!(!extrema.is_singular());
        assert_eq!(extrema.into_pair(), ("Bye", "Hi"));
    }

    #[test]
    fn test_report_to_json() {
        let report = ExtremaReport::new(Extrema::new(3, 19), true, false);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["extrema"]["minimum"], 3);
        assert_eq!(value["extrema"]["maximum"], 19);
        assert_eq!(value["minimum_in_probe"], true);
        assert_eq!(value["maximum_in_probe"], false);
        assert!(value.get("singular").is_none());
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = ExtremaReport::new(Extrema::new(3, 19), false, true);
        let json = report.to_json().unwrap();
        let restored: ExtremaReport<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
        assert_eq!(restored.into_vec(), vec![19]);

        let empty: ExtremaReport<i32> = ExtremaReport::empty();
        let restored: ExtremaReport<i32> = serde_json::from_str(&empty.to_json().unwrap()).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_singular_payload_is_reported_once() {
        let json = r#"{
            "extrema": {"minimum": 5, "maximum": 5},
            "minimum_in_probe": true,
            "maximum_in_probe": true
        }"#;
        let report: ExtremaReport<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.contains_extremum(Extremum::Maximum));
        assert_eq!(report.into_vec(), vec![5]);

        // 最大値側だけ立っていても最小値として一度だけ報告する
        let json = r#"{
            "extrema": {"minimum": 5, "maximum": 5},
            "minimum_in_probe": false,
            "maximum_in_probe": true
        }"#;
        let report: ExtremaReport<i32> = serde_json::from_str(json).unwrap();
        assert!(report.contains_extremum(Extremum::Minimum));
        assert_eq!(report.into_vec(), vec![5]);
    }

    #[test]
    fn test_flags_without_extrema_are_rejected() {
        let json = r#"{"extrema":null,"minimum_in_probe":true,"maximum_in_probe":false}"#;
        let result = serde_json::from_str::<ExtremaReport<i32>>(json);
        assert!(result.unwrap_err().to_string().contains("所属フラグ"));

        let json = r#"{"extrema":null,"minimum_in_probe":false,"maximum_in_probe":false}"#;
        let report: ExtremaReport<i32> = serde_json::from_str(json).unwrap();
        assert!(report.is_empty());
        assert!(report.into_vec().is_empty());
    }

    #[test]
    fn test_extremum_display() {
        assert_eq!(Extremum::Minimum.to_string(), "minimum");
        assert_eq!(Extremum::Maximum.to_string(), "maximum");
    }
}
