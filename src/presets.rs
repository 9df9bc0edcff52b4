//! Named preset layouts.
//!
//! A preset name resolves to a token pattern before tokenization, in both
//! the formatter and the parser, so text produced by a preset parses back
//! with the same preset name.

/// The preset applied when no format is given.
pub const DEFAULT_FORMAT: &str = "medium";

/// Resolve a preset name to its token pattern.
///
/// Returns `None` for anything that is not one of the eight preset names,
/// in which case the caller treats the string as a pattern itself.
///
/// # Examples
/// ```
/// use dtfmt::presets::preset_format_code;
///
/// assert_eq!(preset_format_code("short"), Some("m/d/yy"));
/// assert_eq!(preset_format_code("yyyymmdd"), Some("yyyy-mm-dd"));
/// assert_eq!(preset_format_code("dd/mm/yyyy"), None);
/// ```
pub fn preset_format_code(name: &str) -> Option<&'static str> {
    match name {
        "short" => Some("m/d/yy"),
        "medium" => Some("mmm d, yyyy"),
        "long" => Some("mmmm d, yyyy"),
        "shorttime" => Some("m/d/yy HH:ii"),
        "mediumtime" => Some("mmm d, yyyy HH:ii"),
        "longtime" => Some("mmmm d, yyyy hh:ii:ss A"),
        // no separator between hours and minutes and none before the offset
        "iso8610" => Some("yyyy-mm-ddTHHii:ssO"),
        "yyyymmdd" => Some("yyyy-mm-dd"),
        _ => None,
    }
}

/// Check if a name refers to a preset.
pub fn is_preset(name: &str) -> bool {
    preset_format_code(name).is_some()
}
