use log::debug;
use serde::Serialize;
use serde_json::Value;

use super::{
    config::{current_defaults, ExportConfig},
    encode::{encode, encode_text},
    row::Row,
};
use crate::error::ExportError;

const LINE_TERMINATOR: &str = "\r\n";

/// Serializes row lists into a CSV text block.
///
/// The exporter walks the rows in order, normalizes each one through
/// [`Row::from_value`], encodes every field, joins fields with the configured
/// separator and rows with CRLF. The result is a single fully materialized
/// `String`, immediately usable as a file body or an HTTP response body.
///
/// # Examples
///
/// ```
/// use csv_export::core::exporter::CsvExporter;
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"name": "john", "id": 1}),
///     json!({"name": "jane", "id": 2}),
/// ];
///
/// let body = CsvExporter::new().export(&rows).unwrap();
/// assert_eq!(body, "\"name\",\"id\"\r\n\"john\",1\r\n\"jane\",2\r\n");
/// ```
pub struct CsvExporter {
    config: ExportConfig,
}

impl CsvExporter {
    /// An exporter using the process-wide defaults.
    pub fn new() -> CsvExporter {
        CsvExporter {
            config: current_defaults().clone(),
        }
    }

    /// An exporter with an explicit configuration for this instance.
    pub fn with_config(config: ExportConfig) -> CsvExporter {
        CsvExporter { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Serializes `rows` into CSV text.
    ///
    /// A title line is emitted once, before any content, when `show_titles`
    /// is set and the first row is record-shaped. A malformed row aborts the
    /// whole call; no partial output is returned. An empty row list yields
    /// the empty string.
    pub fn export(&self, rows: &[Value]) -> Result<String, ExportError> {
        let config = &self.config;

        debug!("Start of export: {} rows", rows.len());

        let mut body = String::new();

        for value in rows {
            let row = Row::from_value(value)?;

            if body.is_empty() && config.show_titles {
                if let Some(titles) = row.titles() {
                    let line = titles
                        .into_iter()
                        .map(|title| encode_text(title, config))
                        .collect::<Vec<String>>()
                        .join(&config.separator);
                    body.push_str(&line);
                    body.push_str(LINE_TERMINATOR);
                }
            }

            let line = row
                .values()
                .into_iter()
                .map(|field| encode(field, config))
                .collect::<Vec<String>>()
                .join(&config.separator);
            body.push_str(&line);
            body.push_str(LINE_TERMINATOR);
        }

        debug!("End of export: {} bytes", body.len());

        Ok(body)
    }

    /// Serializes typed items into CSV text.
    ///
    /// Items are converted to rows through their `Serialize` implementation:
    /// structs and maps become record-shaped rows, vectors and tuples become
    /// sequence-shaped rows. A value that converts to neither (a bare number,
    /// for instance) is rejected by [`CsvExporter::export`] as an invalid row.
    pub fn export_items<T: Serialize>(&self, items: &[T]) -> Result<String, ExportError> {
        let mut rows = Vec::with_capacity(items.len());

        for item in items {
            let value = serde_json::to_value(item)
                .map_err(|error| ExportError::RowConversion(error.to_string()))?;
            rows.push(value);
        }

        self.export(&rows)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
