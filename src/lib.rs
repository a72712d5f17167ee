#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 <div align="center">
   <h1>CSV Export for Rust</h1>
   <h3>📤 A toolkit for exporting in-memory records to CSV text</h3>
 </div>

 # CSV Export for Rust

 **csv-export** turns in-memory tabular or object data into a valid CSV text
 block, ready to be written to a file or sent as an HTTP response body. The
 crate owns the part most libraries get subtly wrong: the per-field encoding
 policy that decides when a value is emitted as a raw numeral, when it is
 date-formatted, when it is quoted and escaped, and when it is cast-protected
 for spreadsheet applications.

 ## Core Concepts

 Understanding these components will help you get started:

 - **`ExportConfig`:** An immutable bundle of formatting options, resolved
   once per export call. Process-wide defaults can be frozen at
   initialization time with `install_defaults`.
 - **`Row`:** One line of input. Rows come in two shapes: *sequences*
   (positional fields, from JSON arrays) and *records* (named fields, from
   JSON objects). Shape is decided once, at the boundary; lists may mix both.
 - **`encode`:** The field encoding policy. A total function from one scalar
   value to one CSV cell.
 - **`CsvExporter`:** Walks the rows, emits an optional title line for a
   leading record-shaped row, joins fields with the configured separator and
   lines with CRLF.
 - **`CsvExportWriter`:** Output glue that moves the exported block onto any
   `std::io::Write` destination.

 ## Options

 | **Option**     | **Default**                | **Effect**                                           |
 |----------------|----------------------------|------------------------------------------------------|
 | `separator`    | `,`                        | Field delimiter                                      |
 | `prevent_cast` | `false`                    | Emit string fields as `="…"` to defeat auto-casting  |
 | `ignore_null`  | `true`                     | Render `null` fields as empty instead of `"null"`    |
 | `show_titles`  | `true`                     | Emit a header line when the first row is a record    |
 | `date_format`  | `[year]-[month]-[day]T[hour]:[minute]:[second]` | Pattern for recognized dates    |
 | `detect_dates` | `true`                     | Probe strings for ISO-shaped dates before quoting    |

 ## Getting Started

 ```toml
 [dependencies]
 csv-export = "0.1"
 ```

 Then:

 ```rust
 use csv_export::core::exporter::CsvExporter;
 use csv_export::error::ExportError;
 use serde_json::json;

 fn main() -> Result<(), ExportError> {
     let rows = vec![
         json!({"name": "john", "id": 1, "joined": "2021-06-15"}),
         json!({"name": "jane", "id": 2, "joined": "2021-07-01"}),
     ];

     let body = CsvExporter::new().export(&rows)?;

     assert_eq!(
         body,
         "\"name\",\"id\",\"joined\"\r\n\
          \"john\",1,\"2021-06-15T00:00:00\"\r\n\
          \"jane\",2,\"2021-07-01T00:00:00\"\r\n"
     );

     Ok(())
 }
 ```

 Typed items work through Serde; structs become record-shaped rows with
 their field names as titles:

 ```rust
 use csv_export::core::exporter::CsvExporter;
 use serde::Serialize;

 #[derive(Serialize)]
 struct Person {
     name: String,
     id: u32,
 }

 let people = vec![
     Person { name: "john".to_string(), id: 1 },
     Person { name: "jane".to_string(), id: 2 },
 ];

 let body = CsvExporter::new().export_items(&people).unwrap();
 assert_eq!(body, "\"name\",\"id\"\r\n\"john\",1\r\n\"jane\",2\r\n");
 ```

 ## Encoding rules

 Fields are rendered by the first matching rule:

 1. A `null` field with `ignore_null` set renders as an empty cell.
 2. Numbers render as plain unquoted numerals.
 3. ISO-shaped date/time strings render per `date_format`, wrapped in double
    quotes. A date-like string always takes this rule, even when it was
    meant as opaque text; disable `detect_dates` to opt out.
 4. Everything else renders as quoted text with embedded quotes doubled, and
    a leading `=` when `prevent_cast` is set.

 ## License

 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution

 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Core module for CSV export operations
pub mod core;

/// Error types for export operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Output destinations for exported CSV (files, byte streams)
pub mod output;
