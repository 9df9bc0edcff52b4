//! Format token vocabulary and run classification.

/// Letter case of a meridiem token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmPmStyle {
    /// `a` - lowercase am/pm
    Lower,
    /// `A` - uppercase AM/PM
    Upper,
}

/// A recognized field code in a format string.
///
/// The vocabulary is closed: a lexer run that is not one of these exact
/// strings is a literal, including longer runs of the same letter such as
/// `yyy` or `jjjj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `d` - day of month without leading zero (1-31)
    Day,
    /// `dd` - day of month with leading zero (01-31)
    Day2,
    /// `ddd` - weekday name, abbreviated (Sun, Mon, ...)
    DayAbbr,
    /// `dddd` - weekday name, full (Sunday, Monday, ...)
    DayFull,
    /// `m` - month as number without leading zero (1-12)
    Month,
    /// `mm` - month as number with leading zero (01-12)
    Month2,
    /// `mmm` - month name, abbreviated (Jan, Feb, ...)
    MonthAbbr,
    /// `mmmm` - month name, full (January, February, ...)
    MonthFull,
    /// `y` - two-digit year without padding
    Year,
    /// `yy` - two-digit year, zero padded
    Year2,
    /// `yyyy` - four-digit year
    Year4,
    /// `h` - hour on the 12-hour clock without padding
    Hour12,
    /// `hh` - hour on the 12-hour clock, zero padded
    Hour12Padded,
    /// `H` - hour on the 24-hour clock without padding
    Hour24,
    /// `HH` - hour on the 24-hour clock, zero padded
    Hour24Padded,
    /// `i` - minute without padding
    Minute,
    /// `ii` - minute, zero padded
    Minute2,
    /// `s` - second without padding
    Second,
    /// `ss` - second, zero padded
    Second2,
    /// `a` / `A` - meridiem marker
    AmPm(AmPmStyle),
    /// `O` - whole-hour offset from UTC
    UtcOffset,
    /// `j` - ordinal day of year (1-366)
    Ordinal,
    /// `jjj` - ordinal day of year, same value as `j`
    Ordinal3,
}

impl FieldKind {
    /// Maps a run of identical characters to its field code.
    pub fn from_run(run: &str) -> Option<FieldKind> {
        let kind = match run {
            "d" => FieldKind::Day,
            "dd" => FieldKind::Day2,
            "ddd" => FieldKind::DayAbbr,
            "dddd" => FieldKind::DayFull,
            "m" => FieldKind::Month,
            "mm" => FieldKind::Month2,
            "mmm" => FieldKind::MonthAbbr,
            "mmmm" => FieldKind::MonthFull,
            "y" => FieldKind::Year,
            "yy" => FieldKind::Year2,
            "yyyy" => FieldKind::Year4,
            "h" => FieldKind::Hour12,
            "hh" => FieldKind::Hour12Padded,
            "H" => FieldKind::Hour24,
            "HH" => FieldKind::Hour24Padded,
            "i" => FieldKind::Minute,
            "ii" => FieldKind::Minute2,
            "s" => FieldKind::Second,
            "ss" => FieldKind::Second2,
            "a" => FieldKind::AmPm(AmPmStyle::Lower),
            "A" => FieldKind::AmPm(AmPmStyle::Upper),
            "O" => FieldKind::UtcOffset,
            "j" => FieldKind::Ordinal,
            "jjj" => FieldKind::Ordinal3,
            _ => return None,
        };
        Some(kind)
    }

    /// The token string this field code was classified from.
    pub fn code(self) -> &'static str {
        match self {
            FieldKind::Day => "d",
            FieldKind::Day2 => "dd",
            FieldKind::DayAbbr => "ddd",
            FieldKind::DayFull => "dddd",
            FieldKind::Month => "m",
            FieldKind::Month2 => "mm",
            FieldKind::MonthAbbr => "mmm",
            FieldKind::MonthFull => "mmmm",
            FieldKind::Year => "y",
            FieldKind::Year2 => "yy",
            FieldKind::Year4 => "yyyy",
            FieldKind::Hour12 => "h",
            FieldKind::Hour12Padded => "hh",
            FieldKind::Hour24 => "H",
            FieldKind::Hour24Padded => "HH",
            FieldKind::Minute => "i",
            FieldKind::Minute2 => "ii",
            FieldKind::Second => "s",
            FieldKind::Second2 => "ss",
            FieldKind::AmPm(AmPmStyle::Lower) => "a",
            FieldKind::AmPm(AmPmStyle::Upper) => "A",
            FieldKind::UtcOffset => "O",
            FieldKind::Ordinal => "j",
            FieldKind::Ordinal3 => "jjj",
        }
    }
}

/// One token of a format string: a field code or a literal run.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatToken {
    Field(FieldKind),
    Literal(String),
}

impl FormatToken {
    /// Classifies a lexer run; unrecognized runs become literals.
    pub fn classify(run: &str) -> FormatToken {
        match FieldKind::from_run(run) {
            Some(kind) => FormatToken::Field(kind),
            None => FormatToken::Literal(run.to_string()),
        }
    }

    /// The token's source text, for diagnostics.
    pub fn text(&self) -> &str {
        match self {
            FormatToken::Field(kind) => kind.code(),
            FormatToken::Literal(text) => text,
        }
    }
}
