use serde_json::Value;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description,
    format_description::well_known::Rfc3339,
};

use super::config::ExportConfig;

const LOCAL_DATETIME_FORMAT: &str = "[year]-[month]-[day]T[hour]:[minute]:[second]";
const CALENDAR_DATE_FORMAT: &str = "[year]-[month]-[day]";

/// Renders one field value as CSV text.
///
/// The rules apply in order, first match wins:
///
/// 1. `null` with `ignore_null` set renders as the empty string.
/// 2. Numbers render as their plain numeral, unquoted, regardless of
///    `prevent_cast`.
/// 3. Text recognized by [`probe_datetime`] renders per `date_format`,
///    wrapped in double quotes.
/// 4. Everything else renders as text: embedded `"` doubled, wrapped in
///    double quotes, and prefixed with `=` when `prevent_cast` is set.
///
/// Total function: any value falls through to the text rendering, so field
/// encoding never fails.
pub fn encode(field: &Value, config: &ExportConfig) -> String {
    match field {
        Value::Null if config.ignore_null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => encode_text(text, config),
        other => encode_text(&other.to_string(), config),
    }
}

/// Renders already-stringified content, applying the date rule and the
/// quoting rules. Title cells take this path directly.
pub(crate) fn encode_text(text: &str, config: &ExportConfig) -> String {
    if config.detect_dates {
        if let Some(formatted) = format_datetime(text, &config.date_format) {
            // Formatted dates cannot contain quote characters, quoting alone
            // is enough.
            return format!("\"{formatted}\"");
        }
    }

    let escaped = text.replace('"', "\"\"");
    if config.prevent_cast {
        format!("=\"{escaped}\"")
    } else {
        format!("\"{escaped}\"")
    }
}

/// Date-detection strategy.
///
/// Interprets ISO-shaped text as a timestamp: RFC 3339, local
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD` date taken at midnight.
/// Anything else is opaque text.
///
/// A string that parses here is date-formatted even when the caller meant it
/// as opaque text. That is deliberate; set `detect_dates` to `false` to keep
/// such strings verbatim.
pub fn probe_datetime(text: &str) -> Option<PrimitiveDateTime> {
    if let Ok(stamp) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(PrimitiveDateTime::new(stamp.date(), stamp.time()));
    }

    if let Ok(format) = format_description::parse(LOCAL_DATETIME_FORMAT) {
        if let Ok(stamp) = PrimitiveDateTime::parse(text, &format) {
            return Some(stamp);
        }
    }

    if let Ok(format) = format_description::parse(CALENDAR_DATE_FORMAT) {
        if let Ok(date) = Date::parse(text, &format) {
            return Some(date.midnight());
        }
    }

    None
}

/// `None` when `text` is not a recognized timestamp or `pattern` is not a
/// valid format description, sending the field to the text rendering instead.
fn format_datetime(text: &str, pattern: &str) -> Option<String> {
    let stamp = probe_datetime(text)?;
    let format = format_description::parse(pattern).ok()?;
    stamp.format(&format).ok()
}
