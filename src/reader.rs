use std::{
    fs::File,
    io::{BufRead, BufReader, Seek, SeekFrom},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{Result, WeightsError},
    io::{gwt, GwtHeader},
    options::{CountPolicy, GwtOptions, OpenMode},
    weights::{reindex, RawAdjacency, Relabeling, WeightsProduct},
};

/// Where a reader is in its one-shot read cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// Positioned at the start of the stream; the next read parses the file.
    Opened,
    /// The stream has been consumed; `seek(0)` is needed to read again.
    ReadOnce,
    /// The stream has been released.
    Closed,
}

/// A read session over a GWT file.
///
/// Each open session owns its stream. One `read` consumes the whole file and
/// produces a `WeightsProduct`; a second `read` returns `SequenceExhausted`
/// until the reader is rewound with `seek(0)`. After `close` every operation
/// returns `Closed`. Dropping the reader releases the stream.
#[derive(Debug)]
pub struct GwtReader<R = BufReader<File>> {
    path: Option<PathBuf>,
    stream: Option<R>,
    state: ReadState,
    options: GwtOptions,

    // Set by the last read, cleared on the next read and on close.
    header: Option<GwtHeader>,
    observed_count: Option<usize>,
    original_neighbors: Option<RawAdjacency>,
    relabeling: Option<Relabeling>,
    product: Option<WeightsProduct>,
}

impl GwtReader<BufReader<File>> {
    /// Open `path` with the given mode string. Only `"r"` is supported.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        Self::open_with(path, mode, GwtOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, mode: &str, options: GwtOptions) -> Result<Self> {
        let path = path.as_ref();
        if OpenMode::parse(mode)? != OpenMode::Read {
            return Err(WeightsError::Mode(mode.to_string()));
        }

        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "[reader] opened gwt file");

        let mut reader = Self::from_reader(BufReader::new(file), options);
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }
}

impl<R: BufRead + Seek> GwtReader<R> {
    /// Wrap an already-open stream positioned at the start of a GWT file.
    pub fn from_reader(stream: R, options: GwtOptions) -> Self {
        Self {
            path: None,
            stream: Some(stream),
            state: ReadState::Opened,
            options,
            header: None,
            observed_count: None,
            original_neighbors: None,
            relabeling: None,
            product: None,
        }
    }

    /// Read the whole file, numbering observations in order of first
    /// appearance as an origin.
    pub fn read(&mut self) -> Result<WeightsProduct> {
        self.read_impl(None)
    }

    /// Read the whole file, numbering observations by their position in `ids`.
    pub fn read_with_ids(&mut self, ids: &[Arc<str>]) -> Result<WeightsProduct> {
        self.read_impl(Some(ids))
    }

    fn read_impl(&mut self, ids: Option<&[Arc<str>]>) -> Result<WeightsProduct> {
        match self.state {
            ReadState::Closed => return Err(WeightsError::Closed),
            ReadState::ReadOnce => return Err(WeightsError::SequenceExhausted),
            ReadState::Opened => {}
        }
        // Any attempt consumes the stream, successful or not.
        self.state = ReadState::ReadOnce;
        self.clear_attributes();

        let stream = self.stream.as_mut().ok_or(WeightsError::Closed)?;
        let (header, raw) = gwt::read_gwt(stream)?;
        let observed = raw.len();
        let header = self.header.insert(header);
        self.observed_count = Some(observed);
        let raw = self.original_neighbors.insert(raw);

        check_count(header, observed, self.options.count_policy)?;

        let reindexed = reindex(raw, ids)?;
        let product = reindexed.to_product();
        tracing::info!(
            observations = product.len(),
            edges = raw.edge_count(),
            path = ?self.path,
            "[reader] read gwt weights"
        );

        self.relabeling = Some(reindexed.relabeling);
        self.product = Some(product.clone());
        Ok(product)
    }

    /// Rewind to the start of the file. Only position 0 is supported.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(WeightsError::Closed)?;
        if pos != 0 {
            return Err(WeightsError::UnsupportedSeek(pos));
        }
        stream.seek(SeekFrom::Start(0))?;
        self.state = ReadState::Opened;
        Ok(())
    }

    /// Release the stream and everything read from it.
    pub fn close(&mut self) -> Result<()> {
        if self.state == ReadState::Closed {
            return Err(WeightsError::Closed);
        }
        self.stream = None;
        self.state = ReadState::Closed;
        self.clear_attributes();
        tracing::debug!(path = ?self.path, "[reader] closed gwt file");
        Ok(())
    }
}

impl<R> GwtReader<R> {
    fn clear_attributes(&mut self) {
        self.header = None;
        self.observed_count = None;
        self.original_neighbors = None;
        self.relabeling = None;
        self.product = None;
    }

    #[inline] pub fn state(&self) -> ReadState { self.state }

    #[inline] pub fn is_closed(&self) -> bool { self.state == ReadState::Closed }

    #[inline] pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    #[inline] pub fn options(&self) -> &GwtOptions { &self.options }

    /// Header of the last read.
    #[inline] pub fn header(&self) -> Option<&GwtHeader> { self.header.as_ref() }

    /// Number of distinct origin ids seen by the last read.
    #[inline] pub fn observed_count(&self) -> Option<usize> { self.observed_count }

    /// Adjacency of the last read, keyed by original ids.
    #[inline] pub fn original_neighbors(&self) -> Option<&RawAdjacency> { self.original_neighbors.as_ref() }

    /// Mapping between original ids and new indices from the last read.
    #[inline] pub fn relabeling(&self) -> Option<&Relabeling> { self.relabeling.as_ref() }

    /// Product of the last successful read.
    #[inline] pub fn product(&self) -> Option<&WeightsProduct> { self.product.as_ref() }
}

/// Yields the product once; ends when the file has been read or the reader
/// is closed. Use `read` directly to observe `SequenceExhausted`/`Closed`.
impl<R: BufRead + Seek> Iterator for GwtReader<R> {
    type Item = Result<WeightsProduct>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            ReadState::Opened => Some(self.read()),
            ReadState::ReadOnce | ReadState::Closed => None,
        }
    }
}

fn check_count(header: &GwtHeader, observed: usize, policy: CountPolicy) -> Result<()> {
    if header.declared_count() == Some(observed) {
        return Ok(());
    }
    match policy {
        CountPolicy::Ignore => Ok(()),
        CountPolicy::Warn => {
            tracing::warn!(declared = %header.n, observed, "[reader] header count does not match observations");
            Ok(())
        }
        CountPolicy::Strict => Err(WeightsError::CountMismatch { declared: header.n.clone(), observed }),
    }
}
