//! Date rendering.

use crate::cache;
use crate::date_value::DateValue;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::parser::tokens::{AmPmStyle, FieldKind, FormatToken};
use crate::presets::{preset_format_code, DEFAULT_FORMAT};

/// Render `date` with a token pattern or preset name.
///
/// `None` (or an empty string) means the default preset. Preset names are
/// resolved before tokenization; unrecognized tokens pass through as
/// literals, so rendering never fails.
pub fn format_date(date: &DateValue, spec: Option<&str>, opts: &FormatOptions) -> String {
    let spec = match spec.filter(|s| !s.is_empty()) {
        Some(spec) => spec,
        None => DEFAULT_FORMAT,
    };
    let code = preset_format_code(spec).unwrap_or(spec);

    let mut out = String::new();
    for token in cache::get_or_tokenize(code) {
        match token {
            FormatToken::Field(kind) => out.push_str(&field_text(kind, date, opts)),
            FormatToken::Literal(text) => out.push_str(&text),
        }
    }
    out
}

/// Render a single field of the date.
fn field_text(kind: FieldKind, date: &DateValue, opts: &FormatOptions) -> String {
    let locale = &opts.locale;
    match kind {
        FieldKind::Day => date.day().to_string(),
        FieldKind::Day2 => format!("{:02}", date.day()),
        FieldKind::DayAbbr => locale.day_names_short[date.weekday() as usize].to_string(),
        FieldKind::DayFull => locale.day_names_full[date.weekday() as usize].to_string(),

        FieldKind::Month => (date.month() + 1).to_string(),
        FieldKind::Month2 => format!("{:02}", date.month() + 1),
        FieldKind::MonthAbbr => locale.month_names_short[date.month() as usize].to_string(),
        FieldKind::MonthFull => locale.month_names_full[date.month() as usize].to_string(),

        FieldKind::Year => date.year().rem_euclid(100).to_string(),
        FieldKind::Year2 => format!("{:02}", date.year().rem_euclid(100)),
        FieldKind::Year4 => date.year().to_string(),

        FieldKind::Hour12 => to_12_hour(date.hour()).to_string(),
        FieldKind::Hour12Padded => format!("{:02}", to_12_hour(date.hour())),
        FieldKind::Hour24 => date.hour().to_string(),
        FieldKind::Hour24Padded => format!("{:02}", date.hour()),

        FieldKind::Minute => date.minute().to_string(),
        FieldKind::Minute2 => format!("{:02}", date.minute()),
        FieldKind::Second => date.second().to_string(),
        FieldKind::Second2 => format!("{:02}", date.second()),

        FieldKind::AmPm(style) => format_ampm(style, date.hour(), locale),

        // i32 display writes no plus sign for non-negative offsets
        FieldKind::UtcOffset => opts.utc_offset_hours.to_string(),

        FieldKind::Ordinal | FieldKind::Ordinal3 => date.ordinal_day().to_string(),
    }
}

/// Hour on the 12-hour clock. Midnight stays 0 and noon stays 12.
fn to_12_hour(hour: u32) -> u32 {
    if hour > 12 {
        hour - 12
    } else {
        hour
    }
}

/// Render the meridiem marker.
fn format_ampm(style: AmPmStyle, hour: u32, locale: &Locale) -> String {
    let name = if hour < 12 {
        locale.am_string
    } else {
        locale.pm_string
    };
    match style {
        AmPmStyle::Upper => name.to_uppercase(),
        AmPmStyle::Lower => name.to_lowercase(),
    }
}
