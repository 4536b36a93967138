use crate::{
    error::{Result, WeightsError},
    weights::WeightsProduct,
};

/// Spatial weights in compressed sparse row format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weights {
    size: usize,
    offsets: Vec<u32>,
    neighbors: Vec<u32>,
    weights: Vec<f64>,
}

impl Weights {
    /// Construct from per-observation neighbor and weight lists.
    pub fn new(neighbors: &[Vec<usize>], weights: &[Vec<f64>]) -> Result<Self> {
        if neighbors.len() != weights.len() {
            return Err(WeightsError::Shape(format!(
                "neighbors len ({}) != weights len ({})", neighbors.len(), weights.len()
            )));
        }

        let size = neighbors.len();
        Self::check_capacity(size, neighbors.iter().map(Vec::len).sum())?;
        for (i, (nbrs, wts)) in neighbors.iter().zip(weights).enumerate() {
            if nbrs.len() != wts.len() {
                return Err(WeightsError::Shape(format!(
                    "row {i}: neighbors len ({}) != weights len ({})", nbrs.len(), wts.len()
                )));
            }
            if let Some(&j) = nbrs.iter().find(|&&j| j >= size) {
                return Err(WeightsError::Shape(format!("row {i}: neighbor {j} out of range 0..{size}")));
            }
        }

        Ok(Self {
            size,
            offsets: std::iter::once(0u32).chain(
                neighbors.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            neighbors: neighbors.iter().flatten().map(|&j| j as u32).collect(),
            weights: weights.iter().flatten().copied().collect(),
        })
    }

    /// Offsets and neighbor ids are stored as `u32`.
    fn check_capacity(size: usize, edges: usize) -> Result<()> {
        if size > u32::MAX as usize || edges > u32::MAX as usize {
            return Err(WeightsError::Shape(format!(
                "{size} observations and {edges} edges exceed the u32 index range"
            )));
        }
        Ok(())
    }

    /// Construct from a `{weights, neighbors}` product. Both maps must cover
    /// exactly the indices `0..n`.
    pub fn from_product(product: &WeightsProduct) -> Result<Self> {
        if product.weights.len() != product.neighbors.len() {
            return Err(WeightsError::Shape(format!(
                "{} weight rows but {} neighbor rows", product.weights.len(), product.neighbors.len()
            )));
        }

        let n = product.neighbors.len();
        let (neighbors, weights): (Vec<Vec<usize>>, Vec<Vec<f64>>) = (0..n)
            .map(|i| match (product.neighbors.get(&i), product.weights.get(&i)) {
                (Some(nbrs), Some(wts)) => Ok((nbrs.clone(), wts.clone())),
                _ => Err(WeightsError::Shape(format!("indices are not dense: missing row {i}"))),
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unzip();

        Self::new(&neighbors, &weights)
    }

    /// Number of observations.
    #[inline] pub fn node_count(&self) -> usize { self.size }

    /// Number of directed edges.
    #[inline] pub fn edge_count(&self) -> usize { self.neighbors.len() }

    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Number of neighbors of `node`.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Neighbors of `node` in file order.
    #[inline]
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.neighbors[v] as usize)
    }

    /// Edge weights of `node`, parallel to `neighbors(node)`.
    #[inline]
    pub fn weights(&self, node: usize) -> &[f64] { &self.weights[self.range(node)] }

    #[inline]
    pub fn edges_with_weights(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.range(node).map(move |v| (self.neighbors[v] as usize, self.weights[v]))
    }

    /// Degree of every observation.
    pub fn cardinalities(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| (w[1] - w[0]) as usize).collect()
    }

    /// Observations with no neighbors.
    pub fn islands(&self) -> Vec<usize> {
        (0..self.size).filter(|&i| self.degree(i) == 0).collect()
    }

    /// True if every edge `i -> j` has a matching `j -> i` (weights ignored).
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| self.neighbors(i).all(|j| self.neighbors(j).any(|k| k == i)))
    }

    /// Convert back to a `{weights, neighbors}` product.
    pub fn to_product(&self) -> WeightsProduct {
        let neighbors = (0..self.size).map(|i| self.neighbors(i).collect()).collect::<Vec<Vec<usize>>>();
        let weights = (0..self.size).map(|i| self.weights(i).to_vec()).collect::<Vec<Vec<f64>>>();
        WeightsProduct::from_dense(&neighbors, &weights)
    }
}
