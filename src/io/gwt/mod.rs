//! GWT format reading operations.
//!
//! A GWT file is a header line `flag n shp id_var` followed by one
//! `origin target weight` triple per line.

mod read;

use serde::Serialize;

pub(crate) use read::*;

/// The four header tokens of a GWT file, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GwtHeader {
    pub flag: String,
    /// Declared observation count, as written (not parsed).
    pub n: String,
    /// Shapefile the weights were built from.
    pub shp: String,
    /// Name of the id variable.
    pub id_var: String,
}

impl GwtHeader {
    /// The declared count as a number, if it parses as one.
    pub fn declared_count(&self) -> Option<usize> {
        self.n.parse().ok()
    }
}
