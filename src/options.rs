//! Formatting and parsing options.

use crate::locale::Locale;

/// Options shared by the formatter and the parser.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Whole-hour offset from UTC, rendered by the `O` token.
    pub utc_offset_hours: i32,
    /// The locale supplying month, weekday and meridiem names.
    pub locale: Locale,
}
