//! Output destinations for exported CSV.
//!
//! The exporter core produces a text block and never touches transport
//! metadata. The writer here moves that block onto any [`std::io::Write`]
//! destination; an HTTP collaborator is expected to set [`CONTENT_TYPE`] and
//! a charset itself.

/// Media type for CSV response bodies.
pub const CONTENT_TYPE: &str = "text/csv";

/// A module providing facilities for writing exported CSV to files and
/// byte streams.
pub mod writer;

pub use writer::{CsvExportWriter, CsvExportWriterBuilder};
