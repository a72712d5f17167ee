use thiserror::Error;

#[derive(Error, Debug)]
/// Export error
pub enum ExportError {
    /// A row was neither a sequence nor a record. The payload is the JSON
    /// rendering of the offending value.
    #[error("Invalid row shape: {0}")]
    InvalidRowShape(String),

    /// A typed item could not be converted into a row value.
    #[error("Row conversion: {0}")]
    RowConversion(String),

    /// The underlying output destination failed.
    #[error("CsvWriter: {0}")]
    Writer(String),
}
