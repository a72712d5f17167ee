use std::{cell::RefCell, fs::File, io::Write, path::Path};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::{
    core::{config::ExportConfig, exporter::CsvExporter},
    error::ExportError,
};

/// Writes exported CSV onto any byte sink.
///
/// The writer pairs a [`CsvExporter`] with a destination implementing
/// [`Write`]: a file, an in-memory buffer, an HTTP body stream. Transport
/// concerns stay with the caller.
pub struct CsvExportWriter<W: Write> {
    exporter: CsvExporter,
    stream: RefCell<W>,
}

impl<W: Write> CsvExportWriter<W> {
    /// Exports `rows` and writes the resulting text as UTF-8 bytes.
    pub fn write(&self, rows: &[Value]) -> Result<(), ExportError> {
        let body = self.exporter.export(rows)?;
        self.write_body(&body)
    }

    /// Exports typed items and writes the resulting text as UTF-8 bytes.
    pub fn write_items<T: Serialize>(&self, items: &[T]) -> Result<(), ExportError> {
        let body = self.exporter.export_items(items)?;
        self.write_body(&body)
    }

    fn write_body(&self, body: &str) -> Result<(), ExportError> {
        debug!("Writing {} bytes of CSV", body.len());

        let result = self.stream.borrow_mut().write_all(body.as_bytes());
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(ExportError::Writer(error.to_string())),
        }
    }

    /// Flush the underlying writer.
    ///
    /// If there was a problem writing to the underlying writer, then an error
    /// is returned.
    pub fn flush(&self) -> Result<(), ExportError> {
        let result = self.stream.borrow_mut().flush();
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(ExportError::Writer(error.to_string())),
        }
    }

    /// Consumes the writer, returning the destination.
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

/// Builder for [`CsvExportWriter`].
#[derive(Default)]
pub struct CsvExportWriterBuilder {
    config: Option<ExportConfig>,
}

impl CsvExportWriterBuilder {
    pub fn new() -> CsvExportWriterBuilder {
        CsvExportWriterBuilder { config: None }
    }

    /// Overrides the process-wide defaults for this writer.
    pub fn config(mut self, config: ExportConfig) -> CsvExportWriterBuilder {
        self.config = Some(config);
        self
    }

    /// Creates or truncates the file at `path` and writes there.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> CsvExportWriter<File> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .expect("Unable to open file");

        self.from_writer(file)
    }

    /// Writes into any byte sink.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # use csv_export::output::writer::CsvExportWriterBuilder;
    /// # use serde_json::json;
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let wtr = CsvExportWriterBuilder::new().from_writer(vec![]);
    ///
    ///     wtr.write(&[
    ///         json!({"city": "Boston", "popcount": 4628910}),
    ///         json!({"city": "Concord", "popcount": 42695}),
    ///     ])?;
    ///     wtr.flush()?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner())?;
    ///     assert_eq!(
    ///         data,
    ///         "\"city\",\"popcount\"\r\n\"Boston\",4628910\r\n\"Concord\",42695\r\n"
    ///     );
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: Write>(self, wtr: W) -> CsvExportWriter<W> {
        let exporter = match self.config {
            Some(config) => CsvExporter::with_config(config),
            None => CsvExporter::new(),
        };

        CsvExportWriter {
            exporter,
            stream: RefCell::new(wtr),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use serde_json::json;

    use super::CsvExportWriterBuilder;
    use crate::core::config::ExportConfigBuilder;

    #[test]
    fn rows_are_written_to_the_buffer() -> Result<(), Box<dyn Error>> {
        let wtr = CsvExportWriterBuilder::new().from_writer(vec![]);

        wtr.write(&[
            json!({"city": "Boston", "popcount": 4628910}),
            json!({"city": "Concord", "popcount": 42695}),
        ])?;
        wtr.flush()?;

        let data = String::from_utf8(wtr.into_inner())?;
        assert_eq!(
            data,
            "\"city\",\"popcount\"\r\n\"Boston\",4628910\r\n\"Concord\",42695\r\n"
        );

        Ok(())
    }

    #[test]
    fn writer_configuration_overrides_defaults() -> Result<(), Box<dyn Error>> {
        let config = ExportConfigBuilder::new()
            .separator(";")
            .show_titles(false)
            .build();
        let wtr = CsvExportWriterBuilder::new().config(config).from_writer(vec![]);

        wtr.write(&[json!(["a", "b"])])?;
        wtr.flush()?;

        let data = String::from_utf8(wtr.into_inner())?;
        assert_eq!(data, "\"a\";\"b\"\r\n");

        Ok(())
    }

    #[test]
    fn malformed_rows_leave_the_buffer_untouched() {
        let wtr = CsvExportWriterBuilder::new().from_writer(vec![]);

        let result = wtr.write(&[json!("not a row")]);
        assert!(result.is_err());
        assert!(wtr.into_inner().is_empty());
    }
}
