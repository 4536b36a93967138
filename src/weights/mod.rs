//! In-memory spatial weights: raw textual adjacency, zero-based
//! reindexing, and the dense products built from it.

mod csr;
mod product;
mod raw;
mod reindex;

pub use csr::Weights;
pub use product::WeightsProduct;
pub use raw::RawAdjacency;
pub use reindex::{reindex, Reindexed, Relabeling};
