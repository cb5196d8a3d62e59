//! View Configuration
//!
//! Read once at startup from data attributes on `<body>`:
//! `data-heading` and `data-log-level`.

use tracing::level_filters::LevelFilter;

pub const DEFAULT_HEADING: &str = "To Do";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

const HEADING_ATTR: &str = "data-heading";
const LOG_LEVEL_ATTR: &str = "data-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Title of the list, also used in the input placeholder
    pub heading: String,
    pub log_level: LevelFilter,
    /// Attribute problems found while parsing, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            warnings: Vec::new(),
        }
    }
}

impl ViewConfig {
    /// Build from raw attribute values. Missing, blank or malformed values
    /// fall back to the defaults.
    pub fn from_attributes(heading: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        match heading {
            Some(h) if !h.trim().is_empty() => config.heading = h.to_string(),
            Some(_) => config
                .warnings
                .push(format!("blank {HEADING_ATTR}, using {DEFAULT_HEADING:?}")),
            None => {}
        }

        if let Some(raw) = log_level {
            match parse_log_level(raw) {
                Ok(level) => config.log_level = level,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_LEVEL_ATTR}: {e}, using {DEFAULT_LOG_LEVEL}")),
            }
        }

        config
    }

    /// Read the attributes off `document.body`
    pub fn from_document() -> Self {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return Self::default();
        };

        let heading = body.get_attribute(HEADING_ATTR);
        let log_level = body.get_attribute(LOG_LEVEL_ATTR);
        Self::from_attributes(heading.as_deref(), log_level.as_deref())
    }
}

pub fn placeholder_for(heading: &str) -> String {
    format!("Add to {} list", heading.to_lowercase())
}

/// Parse `error|warn|info|debug|trace|off`, case-insensitive
pub fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::OFF),
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(format!(
            "invalid log level {raw:?}, expected off|error|warn|info|debug|trace"
        )),
    }
}
