#![doc = "OpenMander spatial weights: GWT reading and zero-based reindexing"]
mod error;
mod io;
mod options;
mod reader;
mod weights;

#[doc(inline)]
pub use error::{Result, WeightsError};

#[doc(inline)]
pub use io::GwtHeader;

#[doc(inline)]
pub use options::{CountPolicy, GwtOptions, OpenMode};

#[doc(inline)]
pub use reader::{GwtReader, ReadState};

#[doc(inline)]
pub use weights::{reindex, RawAdjacency, Reindexed, Relabeling, Weights, WeightsProduct};

/// Open `path`, read it once, and close it.
pub fn read_gwt_file(path: impl AsRef<std::path::Path>, options: GwtOptions) -> Result<WeightsProduct> {
    let mut reader = GwtReader::open_with(path, "r", options)?;
    let product = reader.read();
    reader.close()?;
    product
}
