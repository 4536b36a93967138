//! IO module for format-specific reading operations.
//!
//! Operations are organized by format type rather than domain. Each format
//! module handles reading for a specific file format.
//!
//! # Format Modules
//!
//! - `gwt` - GWT text format for weighted spatial adjacency (read-only)

pub(crate) mod gwt;

pub use gwt::GwtHeader;
