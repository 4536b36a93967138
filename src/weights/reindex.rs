use std::sync::Arc;

use ahash::AHashMap;

use crate::{
    error::{Result, WeightsError},
    weights::{RawAdjacency, WeightsProduct},
};

/// Bijection between original ids and the dense range `0..len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relabeling {
    new_ids: Vec<Arc<str>>,           // new index -> original id
    old_ids: AHashMap<Arc<str>, usize>, // original id -> new index
}

impl Relabeling {
    /// Build the relabeling for an ordering in one pass: each id's new index
    /// is its position in `ids`. Fails on the first repeated id.
    pub fn from_ordering(ids: &[Arc<str>]) -> Result<Self> {
        let mut old_ids = AHashMap::with_capacity(ids.len());
        for (new_i, id) in ids.iter().enumerate() {
            if old_ids.insert(id.clone(), new_i).is_some() {
                return Err(WeightsError::DuplicateId(id.clone()));
            }
        }
        Ok(Self { new_ids: ids.to_vec(), old_ids })
    }

    #[inline] pub fn len(&self) -> usize { self.new_ids.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.new_ids.is_empty() }

    /// Original id for a new index.
    pub fn id(&self, new_i: usize) -> Option<&Arc<str>> { self.new_ids.get(new_i) }

    /// New index for an original id.
    pub fn index(&self, id: &str) -> Option<usize> { self.old_ids.get(id).copied() }

    /// Original ids ordered by new index.
    #[inline] pub fn ids(&self) -> &[Arc<str>] { &self.new_ids }

    /// Map from original id to new index.
    #[inline] pub fn original_ids(&self) -> &AHashMap<Arc<str>, usize> { &self.old_ids }
}

/// Adjacency rewritten onto dense zero-based indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reindexed {
    pub relabeling: Relabeling,
    pub neighbors: Vec<Vec<usize>>,
    pub weights: Vec<Vec<f64>>,
}

impl Reindexed {
    /// Package the dense adjacency as a `{weights, neighbors}` product.
    pub fn to_product(&self) -> WeightsProduct {
        WeightsProduct::from_dense(&self.neighbors, &self.weights)
    }
}

/// Zero-offset the ids of `raw`.
///
/// With no explicit ordering, or an empty one, the origin ids are numbered in
/// order of first appearance. With a non-empty `Some(ids)`, every id must be
/// an origin in `raw` and appear once; origins left out of the ordering get
/// no index.
///
/// Every neighbor must itself have an index, otherwise the whole call fails
/// with `DanglingReference`. Weights are carried over unchanged.
pub fn reindex(raw: &RawAdjacency, original_ids: Option<&[Arc<str>]>) -> Result<Reindexed> {
    let ordering = original_ids.filter(|ids| !ids.is_empty()).unwrap_or(raw.ids());
    let relabeling = Relabeling::from_ordering(ordering)?;

    let mut neighbors = Vec::with_capacity(ordering.len());
    let mut weights = Vec::with_capacity(ordering.len());
    for id in ordering {
        let (Some(nbrs), Some(wts)) = (raw.neighbors(id), raw.weights(id)) else {
            return Err(WeightsError::UnknownId(id.clone()));
        };

        let new_nbrs = nbrs.iter()
            .map(|j| relabeling.index(j).ok_or_else(|| WeightsError::DanglingReference {
                origin: id.clone(),
                neighbor: j.clone(),
            }))
            .collect::<Result<Vec<usize>>>()?;

        neighbors.push(new_nbrs);
        weights.push(wts.to_vec());
    }

    Ok(Reindexed { relabeling, neighbors, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(xs: &[&str]) -> Vec<Arc<str>> {
        xs.iter().map(|&x| Arc::from(x)).collect()
    }

    fn make_raw() -> RawAdjacency {
        let mut raw = RawAdjacency::new();
        raw.push("10", "20", 1.0);
        raw.push("20", "10", 1.0);
        raw.push("20", "30", 0.5);
        raw.push("30", "20", 0.5);
        raw
    }

    #[test]
    fn first_appearance_order_defines_indices() {
        let out = reindex(&make_raw(), None).unwrap();

        assert_eq!(out.relabeling.len(), 3);
        assert_eq!(out.relabeling.original_ids().len(), 3);
        assert_eq!(out.relabeling.ids(), ids(&["10", "20", "30"]).as_slice());
        assert_eq!(out.neighbors, vec![vec![1], vec![0, 2], vec![1]]);
        assert_eq!(out.weights, vec![vec![1.0], vec![1.0, 0.5], vec![0.5]]);
    }

    #[test]
    fn relabeling_is_a_bijection() {
        let out = reindex(&make_raw(), None).unwrap();
        let rl = &out.relabeling;

        for id in make_raw().ids() {
            let k = rl.index(id).unwrap();
            assert_eq!(rl.id(k).unwrap(), id);
            assert_eq!(rl.index(rl.id(k).unwrap()), Some(k));
        }
        for k in 0..rl.len() {
            assert_eq!(rl.index(rl.id(k).unwrap()), Some(k));
        }
    }

    #[test]
    fn explicit_ordering_is_respected() {
        let order = ids(&["30", "10", "20"]);
        let out = reindex(&make_raw(), Some(&order)).unwrap();

        assert_eq!(out.relabeling.index("30"), Some(0));
        assert_eq!(out.relabeling.index("10"), Some(1));
        assert_eq!(out.relabeling.index("20"), Some(2));
        assert_eq!(out.neighbors, vec![vec![2], vec![2], vec![1, 0]]);
        assert_eq!(out.weights, vec![vec![0.5], vec![1.0], vec![1.0, 0.5]]);
    }

    #[test]
    fn empty_ordering_falls_back_to_first_appearance() {
        let raw = make_raw();
        let out = reindex(&raw, Some(&[] as &[Arc<str>])).unwrap();
        assert_eq!(out, reindex(&raw, None).unwrap());
        assert_eq!(out.relabeling.len(), 3);
    }

    #[test]
    fn reindexing_is_deterministic() {
        let raw = make_raw();
        let first = reindex(&raw, None).unwrap();
        let second = reindex(&raw, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dangling_neighbor_is_rejected() {
        let mut raw = RawAdjacency::new();
        raw.push("a", "b", 1.0);
        raw.push("b", "a", 1.0);
        raw.push("b", "c", 0.5);

        match reindex(&raw, None) {
            Err(WeightsError::DanglingReference { origin, neighbor }) => {
                assert_eq!(origin.as_ref(), "b");
                assert_eq!(neighbor.as_ref(), "c");
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
    }

    #[test]
    fn neighbor_excluded_by_ordering_is_dangling() {
        let order = ids(&["10", "20"]);
        let err = reindex(&make_raw(), Some(&order)).unwrap_err();
        assert!(matches!(err, WeightsError::DanglingReference { ref neighbor, .. } if neighbor.as_ref() == "30"));
    }

    #[test]
    fn duplicate_in_ordering_is_rejected() {
        let order = ids(&["10", "20", "10"]);
        let err = reindex(&make_raw(), Some(&order)).unwrap_err();
        assert!(matches!(err, WeightsError::DuplicateId(ref id) if id.as_ref() == "10"));
    }

    #[test]
    fn unknown_id_in_ordering_is_rejected() {
        let order = ids(&["10", "20", "30", "40"]);
        let err = reindex(&make_raw(), Some(&order)).unwrap_err();
        assert!(matches!(err, WeightsError::UnknownId(ref id) if id.as_ref() == "40"));
    }

    #[test]
    fn weights_are_carried_bit_for_bit() {
        let mut raw = RawAdjacency::new();
        raw.push("x", "y", 0.1 + 0.2);
        raw.push("y", "x", 1e-300);
        let out = reindex(&raw, None).unwrap();
        assert_eq!(out.weights[0][0].to_bits(), (0.1f64 + 0.2).to_bits());
        assert_eq!(out.weights[1][0].to_bits(), 1e-300f64.to_bits());
    }

    #[test]
    fn empty_adjacency_reindexes_to_empty() {
        let out = reindex(&RawAdjacency::new(), None).unwrap();
        assert!(out.relabeling.is_empty());
        assert!(out.neighbors.is_empty());
        assert!(out.weights.is_empty());
    }

    #[test]
    fn self_loops_are_kept() {
        let mut raw = RawAdjacency::new();
        raw.push("a", "a", 2.0);
        let out = reindex(&raw, None).unwrap();
        assert_eq!(out.neighbors, vec![vec![0]]);
    }
}
