use std::sync::OnceLock;

/// Date rendering pattern applied when a field is recognized as a date/time,
/// in the `time` crate's format-description syntax.
pub const DEFAULT_DATE_FORMAT: &str = "[year]-[month]-[day]T[hour]:[minute]:[second]";

/// Formatting options for one export call.
///
/// A configuration is an immutable value bundle: it is resolved once, before
/// the first row is rendered, and read-only for the duration of the call.
/// Build one with [`ExportConfigBuilder`] or start from [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Field delimiter (default: comma). A single character or a short string.
    pub separator: String,
    /// Prefix quoted string fields with `=` so spreadsheet applications keep
    /// them as literals instead of auto-casting (default: false).
    pub prevent_cast: bool,
    /// Render absent values as the empty string rather than the literal text
    /// `null` (default: true).
    pub ignore_null: bool,
    /// Emit a header line of field names before the first data row when that
    /// row is record-shaped (default: true).
    pub show_titles: bool,
    /// Pattern for date/time fields, in `time` format-description syntax.
    pub date_format: String,
    /// Probe non-numeric fields for ISO-shaped date/time text before falling
    /// back to plain string rendering (default: true).
    pub detect_dates: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            prevent_cast: false,
            ignore_null: true,
            show_titles: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            detect_dates: true,
        }
    }
}

/// Builder for [`ExportConfig`].
#[derive(Default)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    pub fn new() -> ExportConfigBuilder {
        ExportConfigBuilder {
            config: ExportConfig::default(),
        }
    }

    pub fn separator(mut self, separator: &str) -> ExportConfigBuilder {
        self.config.separator = separator.to_string();
        self
    }

    pub fn prevent_cast(mut self, yes: bool) -> ExportConfigBuilder {
        self.config.prevent_cast = yes;
        self
    }

    pub fn ignore_null(mut self, yes: bool) -> ExportConfigBuilder {
        self.config.ignore_null = yes;
        self
    }

    pub fn show_titles(mut self, yes: bool) -> ExportConfigBuilder {
        self.config.show_titles = yes;
        self
    }

    pub fn date_format(mut self, date_format: &str) -> ExportConfigBuilder {
        self.config.date_format = date_format.to_string();
        self
    }

    pub fn detect_dates(mut self, yes: bool) -> ExportConfigBuilder {
        self.config.detect_dates = yes;
        self
    }

    pub fn build(self) -> ExportConfig {
        self.config
    }
}

static DEFAULTS: OnceLock<ExportConfig> = OnceLock::new();

/// Installs the process-wide default configuration.
///
/// The defaults may be set once, at initialization time, before any exporter
/// reads them. Returns `false` when they were already frozen, in which case
/// the installed value is kept and `config` is discarded.
pub fn install_defaults(config: ExportConfig) -> bool {
    DEFAULTS.set(config).is_ok()
}

/// The frozen process-wide defaults.
///
/// Falls back to the built-in configuration when nothing was installed, and
/// freezes it at that point.
pub fn current_defaults() -> &'static ExportConfig {
    DEFAULTS.get_or_init(ExportConfig::default)
}
