use std::fs::read_to_string;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use tempfile::tempdir;

use csv_export::{
    core::{config::ExportConfigBuilder, exporter::CsvExporter},
    output::{CONTENT_TYPE, writer::CsvExportWriterBuilder},
};

#[derive(Serialize, Clone)]
struct Order {
    reference: String,
    quantity: u32,
    placed_at: String,
    comment: Option<String>,
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            reference: "ORD-001".to_string(),
            quantity: 3,
            placed_at: "2024-03-01T09:15:00Z".to_string(),
            comment: None,
        },
        Order {
            reference: "ORD-002".to_string(),
            quantity: 1,
            placed_at: "2024-03-02".to_string(),
            comment: Some("fragile \"glass\"".to_string()),
        },
    ]
}

#[test]
fn typed_orders_export_with_titles_dates_and_escaping() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let body = CsvExporter::new().export_items(&orders())?;

    assert_eq!(
        body,
        "\"reference\",\"quantity\",\"placed_at\",\"comment\"\r\n\
         \"ORD-001\",3,\"2024-03-01T09:15:00\",\r\n\
         \"ORD-002\",1,\"2024-03-02T00:00:00\",\"fragile \"\"glass\"\"\"\r\n"
    );

    Ok(())
}

#[test]
fn cast_protected_export_round_trips_through_a_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("inventory.csv");

    let config = ExportConfigBuilder::new()
        .prevent_cast(true)
        .detect_dates(false)
        .build();
    let wtr = CsvExportWriterBuilder::new().config(config).from_path(&path);

    wtr.write(&[
        json!({"sku": "007", "stock": 12}),
        json!({"sku": "2024-01-01", "stock": 5}),
    ])?;
    wtr.flush()?;

    let content = read_to_string(&path)?;
    assert_eq!(
        content,
        "=\"sku\",=\"stock\"\r\n=\"007\",12\r\n=\"2024-01-01\",5\r\n"
    );

    Ok(())
}

#[test]
fn sequence_rows_with_custom_separator_write_to_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("matrix.csv");

    let config = ExportConfigBuilder::new().separator(";").build();
    let wtr = CsvExportWriterBuilder::new().config(config).from_path(&path);

    wtr.write(&[json!(["a", "b"]), json!(["c", "d"])])?;
    wtr.flush()?;

    let content = read_to_string(&path)?;
    assert_eq!(content, "\"a\";\"b\"\r\n\"c\";\"d\"\r\n");

    Ok(())
}

#[test]
fn malformed_row_aborts_before_the_file_is_touched() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.csv");

    let wtr = CsvExportWriterBuilder::new().from_path(&path);

    let result = wtr.write(&[json!({"ok": 1}), json!("not a row")]);
    assert!(result.is_err());
    wtr.flush()?;

    let content = read_to_string(&path)?;
    assert_eq!(content, "");

    Ok(())
}

#[test]
fn null_fields_can_render_literally() -> Result<()> {
    let config = ExportConfigBuilder::new().ignore_null(false).build();
    let exporter = CsvExporter::with_config(config);

    let body = exporter.export(&[json!({"name": "john", "comment": null})])?;
    assert_eq!(body, "\"name\",\"comment\"\r\n\"john\",\"null\"\r\n");

    Ok(())
}

#[test]
fn response_collaborators_get_the_media_type() {
    assert_eq!(CONTENT_TYPE, "text/csv");
}
