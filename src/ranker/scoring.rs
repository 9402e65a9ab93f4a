use std::fmt::Debug;

use num::Float;
use serde::{Deserialize, Serialize};

/// One ranked candidate: opaque key plus its similarity score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Ranked result list. Construction order matches the candidate input order;
/// call `sort_by_score_desc` for descending-score order with stable ties.
#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Pair keys with their scores, preserving input order.
    pub fn from_scores<I>(keys: I, scores: &[f64]) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let list = keys
            .into_iter()
            .zip(scores.iter().copied())
            .map(|(key, score)| HitEntry { key, score })
            .collect();
        Hits { list }
    }

    /// Sort by descending score. The sort is stable, so equal scores keep
    /// their original relative order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|e| !e.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep at most `limit` entries.
    pub fn truncate(&mut self, limit: usize) -> &mut Self {
        self.list.truncate(limit);
        self
    }

    /// Entry with the highest score; ties resolve to the earliest entry.
    pub fn best(&self) -> Option<&HitEntry<K>> {
        self.list.iter().reduce(|best, e| {
            if e.score > best.score {
                e
            } else {
                best
            }
        })
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drop scores, keeping ranked keys.
    pub fn into_keys(self) -> Vec<K> {
        self.list.into_iter().map(|e| e.key).collect()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for entry in &self.list {
                writeln!(f, "    {:?}: {:.6}", entry.key, entry.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Dot product of two equal-length vectors. Both sides are unit-norm (or
/// zero) here, so this is cosine similarity directly; a zero vector on
/// either side gives 0.
#[inline]
pub fn dot<N: Float>(a: &[N], b: &[N]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
        .to_f64()
        .unwrap_or(f64::NAN)
}
