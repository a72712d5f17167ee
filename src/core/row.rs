use serde_json::{Map, Value};

use crate::error::ExportError;

/// One input row, normalized at the boundary where external data enters the
/// exporter.
///
/// The shape is decided exactly once, by [`Row::from_value`]; everything
/// downstream is a pattern match. Row lists may freely mix both shapes, each
/// row stands on its own.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    /// Positional fields, from a JSON array.
    Sequence(&'a [Value]),
    /// Named fields in insertion order, from a JSON object.
    Record(&'a Map<String, Value>),
}

impl<'a> Row<'a> {
    /// Classifies a value as a row.
    ///
    /// Arrays are sequence-shaped, objects are record-shaped, and anything
    /// else (a bare primitive in the row list) is rejected as
    /// [`ExportError::InvalidRowShape`].
    pub fn from_value(value: &'a Value) -> Result<Row<'a>, ExportError> {
        match value {
            Value::Array(fields) => Ok(Row::Sequence(fields)),
            Value::Object(fields) => Ok(Row::Record(fields)),
            other => Err(ExportError::InvalidRowShape(other.to_string())),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Row::Record(_))
    }

    /// Field names of a record-shaped row, in insertion order. Sequences
    /// carry no titles.
    pub fn titles(&self) -> Option<Vec<&str>> {
        match self {
            Row::Sequence(_) => None,
            Row::Record(fields) => Some(fields.keys().map(String::as_str).collect()),
        }
    }

    /// Field values in column order. For records the order matches
    /// [`Row::titles`].
    pub fn values(&self) -> Vec<&Value> {
        match self {
            Row::Sequence(fields) => fields.iter().collect(),
            Row::Record(fields) => fields.values().collect(),
        }
    }
}
