//! # プローブ集合モジュール
//!
//! 極値が含まれているかを調べる相手側のコレクションを抽象化します。
//! 所属判定は順序ではなく等価性で行います。
//!
//! 列（スライス、配列、`Vec`）は要素型 `Q` が `PartialEq<T>` を実装していれば使え、
//! 線形探索で判定します。集合（`HashSet`、`BTreeSet`）は `T: Borrow<Q>` のとき使え、
//! それぞれのルックアップで判定します。

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// 値の所属判定ができるコレクション
pub trait Probe<T: ?Sized> {
    /// `value` と等しい要素を含むかどうか
    fn contains_value(&self, value: &T) -> bool;
}

impl<T, Q> Probe<T> for [Q]
where
    T: ?Sized,
    Q: PartialEq<T>,
{
    fn contains_value(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T, Q, const N: usize> Probe<T> for [Q; N]
where
    T: ?Sized,
    Q: PartialEq<T>,
{
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains_value(value)
    }
}

impl<T, Q> Probe<T> for Vec<Q>
where
    T: ?Sized,
    Q: PartialEq<T>,
{
    fn contains_value(&self, value: &T) -> bool {
        self.as_slice().contains_value(value)
    }
}

impl<T, Q, S> Probe<T> for HashSet<Q, S>
where
    T: Borrow<Q> + ?Sized,
    Q: Hash + Eq,
    S: BuildHasher,
{
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value.borrow())
    }
}

impl<T, Q> Probe<T> for BTreeSet<Q>
where
    T: Borrow<Q> + ?Sized,
    Q: Ord,
{
    fn contains_value(&self, value: &T) -> bool {
        self.contains(value.borrow())
    }
}

impl<T, P> Probe<T> for &P
where
    T: ?Sized,
    P: Probe<T> + ?Sized,
{
    fn contains_value(&self, value: &T) -> bool {
        (**self).contains_value(value)
    }
}
