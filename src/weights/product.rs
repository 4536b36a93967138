use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The `{weights, neighbors}` mapping produced by a read, keyed by dense
/// zero-based index. For every index both lists have the same length and
/// element `k` of `weights` belongs to element `k` of `neighbors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightsProduct {
    pub weights: BTreeMap<usize, Vec<f64>>,
    pub neighbors: BTreeMap<usize, Vec<usize>>,
}

impl WeightsProduct {
    /// Build from dense per-index lists; index `i` is the position in the slice.
    pub fn from_dense(neighbors: &[Vec<usize>], weights: &[Vec<f64>]) -> Self {
        Self {
            weights: weights.iter().cloned().enumerate().collect(),
            neighbors: neighbors.iter().cloned().enumerate().collect(),
        }
    }

    /// Number of observations.
    #[inline] pub fn len(&self) -> usize { self.neighbors.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.neighbors.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dense_keys_by_position() {
        let p = WeightsProduct::from_dense(&[vec![1], vec![0]], &[vec![0.5], vec![2.0]]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.neighbors[&0], vec![1]);
        assert_eq!(p.weights[&1], vec![2.0]);
    }

    #[test]
    fn serializes_with_two_keys() {
        let p = WeightsProduct::from_dense(&[vec![1], vec![0]], &[vec![0.5], vec![2.0]]);
        let value = serde_json::to_value(&p).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(value["neighbors"]["0"], serde_json::json!([1]));
        assert_eq!(value["weights"]["1"], serde_json::json!([2.0]));

        let back: WeightsProduct = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }
}
