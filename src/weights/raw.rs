use std::sync::Arc;

use ahash::AHashMap;

/// Adjacency lists keyed by original (textual) ids, in order of first
/// appearance as an origin.
///
/// `ids[k]` is the k-th distinct origin id; `neighbors[k]` and `weights[k]`
/// are its edges in file order. `index` maps each origin id back to `k`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAdjacency {
    ids: Vec<Arc<str>>,
    index: AHashMap<Arc<str>, usize>,
    neighbors: Vec<Vec<Arc<str>>>,
    weights: Vec<Vec<f64>>,
}

impl RawAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the edge `origin -> target` with weight `weight`, creating the
    /// origin's entry on first occurrence.
    pub fn push(&mut self, origin: &str, target: &str, weight: f64) {
        let k = match self.index.get(origin) {
            Some(&k) => k,
            None => {
                let id: Arc<str> = Arc::from(origin);
                let k = self.ids.len();
                self.index.insert(id.clone(), k);
                self.ids.push(id);
                self.neighbors.push(Vec::new());
                self.weights.push(Vec::new());
                k
            }
        };

        // Reuse the interned origin Arc when a target names a known id.
        let target = match self.index.get_key_value(target) {
            Some((id, _)) => id.clone(),
            None => Arc::from(target),
        };
        self.neighbors[k].push(target);
        self.weights[k].push(weight);
    }

    /// Number of distinct origin ids.
    #[inline] pub fn len(&self) -> usize { self.ids.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Total number of edges across all origins.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Origin ids in first-appearance order.
    #[inline] pub fn ids(&self) -> &[Arc<str>] { &self.ids }

    #[inline] pub fn contains(&self, id: &str) -> bool { self.index.contains_key(id) }

    /// Neighbor ids of `id` in file order.
    pub fn neighbors(&self, id: &str) -> Option<&[Arc<str>]> {
        self.index.get(id).map(|&k| self.neighbors[k].as_slice())
    }

    /// Edge weights of `id` in file order.
    pub fn weights(&self, id: &str) -> Option<&[f64]> {
        self.index.get(id).map(|&k| self.weights[k].as_slice())
    }

    /// Iterate `(origin, neighbors, weights)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &[Arc<str>], &[f64])> + '_ {
        self.ids.iter()
            .zip(self.neighbors.iter().zip(self.weights.iter()))
            .map(|(id, (nbrs, wts))| (id, nbrs.as_slice(), wts.as_slice()))
    }
}
