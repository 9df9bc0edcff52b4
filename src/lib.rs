//! dtfmt - token-pattern date formatting and best-effort date parsing
//!
//! This crate renders dates with compact token patterns (`"yyyy-mm-dd"`,
//! `"dddd, dd mmmm yyyy"`) and parses text back into dates. When no pattern
//! is given, parsing tries an ordered list of common layouts and takes the
//! first one that matches.
//!
//! ```
//! use dtfmt::{format, parse_date, FormatOptions};
//!
//! let opts = FormatOptions::default();
//! let date = parse_date("2007-06-01", None, &opts).unwrap();
//! assert_eq!(
//!     format(&date, Some("dddd, dd mmmm yyyy"), &opts),
//!     "Friday, 01 June 2007"
//! );
//! ```

pub mod arith;
pub mod calendar;
pub mod candidates;
pub mod date_value;
pub mod error;
pub mod options;
pub mod parser;
pub mod presets;

mod cache;
mod formatter;
mod locale;

pub use arith::TimeUnit;
pub use calendar::MonthGrid;
pub use candidates::CANDIDATE_FORMATS;
pub use date_value::DateValue;
pub use error::ParseError;
pub use locale::Locale;
pub use options::FormatOptions;
pub use parser::tokens::{AmPmStyle, FieldKind, FormatToken};
pub use presets::DEFAULT_FORMAT;

/// Format a date with a token pattern or preset name.
///
/// Passing `None` (or an empty string) uses the `"medium"` preset.
/// Unrecognized tokens in the pattern are copied to the output unchanged,
/// so formatting never fails.
pub fn format(date: &DateValue, spec: Option<&str>, opts: &FormatOptions) -> String {
    formatter::format_date(date, spec, opts)
}

/// Format a date using the default options.
pub fn format_default(date: &DateValue, spec: Option<&str>) -> String {
    formatter::format_date(date, spec, &FormatOptions::default())
}

/// Reformat a piece of text that may hold a date.
///
/// The text is parsed against the common layouts first. If it holds a date,
/// the date is rendered with `spec`; otherwise the text comes back
/// unchanged, leaving non-date field contents alone.
pub fn format_text(text: &str, spec: Option<&str>, opts: &FormatOptions) -> String {
    match parse_date(text, None, opts) {
        Ok(date) => format(&date, spec, opts),
        Err(_) => text.to_string(),
    }
}

/// Parse text into a date.
///
/// With `spec` given, only that layout (or preset) is attempted. Without
/// it, the layouts in [`CANDIDATE_FORMATS`] are tried in order and the
/// first successful parse wins.
pub fn parse_date(
    text: &str,
    spec: Option<&str>,
    opts: &FormatOptions,
) -> Result<DateValue, ParseError> {
    match spec.filter(|s| !s.is_empty()) {
        Some(spec) => parser::parse_with_format(text, spec, opts),
        None => parser::parse_any(text, opts),
    }
}

/// Report whether the text parses as a date.
pub fn is_date(text: &str, spec: Option<&str>, opts: &FormatOptions) -> bool {
    parse_date(text, spec, opts).is_ok()
}

/// Add `amount` units to the date held in `text`.
///
/// Text that does not parse as a date is treated as the epoch, so the
/// result is always a date.
pub fn date_add(unit: TimeUnit, amount: f64, text: &str, opts: &FormatOptions) -> DateValue {
    let base = parse_date(text, None, opts)
        .map(|d| d.timestamp_millis())
        .unwrap_or(0);
    DateValue::from_timestamp_millis(base).add(unit, amount)
}

/// Signed difference between two date texts, in `unit`s.
///
/// Fails if either endpoint does not parse as a date.
pub fn date_diff(
    unit: TimeUnit,
    start: &str,
    end: &str,
    opts: &FormatOptions,
) -> Result<f64, ParseError> {
    let start = parse_date(start, None, opts)?;
    let end = parse_date(end, None, opts)?;
    Ok(end.diff(&start, unit))
}
