//! Parser matching input text against format token sequences.
//!
//! One attempt walks the tokens of a single format left to right, moving a
//! cursor through the input. Numeric fields scan greedily from their widest
//! permitted width down to their narrowest; name fields prefix-match the
//! locale tables in table order; literal runs must match exactly. The first
//! token that fails aborts the attempt. Input left over after the last token
//! is ignored.

pub mod lexer;
pub mod tokens;

use crate::cache;
use crate::candidates::CANDIDATE_FORMATS;
use crate::date_value::{days_in_month, DateValue};
use crate::error::ParseError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::presets::preset_format_code;
use tokens::{FieldKind, FormatToken};

/// Parse `text` against one format pattern or preset name.
pub fn parse_with_format(
    text: &str,
    format: &str,
    opts: &FormatOptions,
) -> Result<DateValue, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let code = preset_format_code(format).unwrap_or(format);
    let tokens = cache::get_or_tokenize(code);

    let mut parser = Parser::new(text, &opts.locale);
    for token in &tokens {
        parser.match_token(token)?;
    }
    parser.finish()
}

/// Parse `text` by trying each candidate layout in order.
///
/// The first layout that parses wins; the list order in
/// [`CANDIDATE_FORMATS`] is the tie-breaker for input that fits more than
/// one layout.
pub fn parse_any(text: &str, opts: &FormatOptions) -> Result<DateValue, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    for code in CANDIDATE_FORMATS {
        if let Ok(date) = parse_with_format(text, code, opts) {
            return Ok(date);
        }
    }
    Err(ParseError::NoCandidateMatched)
}

/// Meridiem flag captured during a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Field accumulator for a single parse attempt.
///
/// The day starts at 1 so layouts without a day token land on the first of
/// the month. Everything else starts at zero.
#[derive(Debug)]
struct ParseState {
    day: u32,
    /// 0-based month; numeric matches are decremented before storage.
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
    second: u32,
    meridiem: Option<Meridiem>,
    /// Set by ordinal-day tokens; suppresses month-length validation.
    ordinal: bool,
}

impl Default for ParseState {
    fn default() -> Self {
        ParseState {
            day: 1,
            month: 0,
            year: 0,
            hour: 0,
            minute: 0,
            second: 0,
            meridiem: None,
            ordinal: false,
        }
    }
}

/// Cursor machine for one parse attempt.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    locale: &'a Locale,
    state: ParseState,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, locale: &'a Locale) -> Self {
        Parser {
            input,
            pos: 0,
            locale,
            state: ParseState::default(),
        }
    }

    fn fail(&self, token: &FormatToken) -> ParseError {
        ParseError::MatchFailure {
            position: self.pos,
            token: token.text().to_string(),
        }
    }

    /// Match one token at the cursor, advancing past what it consumed.
    fn match_token(&mut self, token: &FormatToken) -> Result<(), ParseError> {
        match token {
            FormatToken::Field(kind) => self.match_field(*kind, token),
            FormatToken::Literal(text) => self.match_literal(text, token),
        }
    }

    fn match_field(&mut self, kind: FieldKind, token: &FormatToken) -> Result<(), ParseError> {
        match kind {
            FieldKind::Day | FieldKind::Day2 => {
                let min_width = if kind == FieldKind::Day { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 1, 31, token)?;
                self.state.day = value;
                self.pos += width;
            }
            FieldKind::Ordinal | FieldKind::Ordinal3 => {
                let min_width = if kind == FieldKind::Ordinal { 1 } else { 3 };
                let (value, width) = self.digits(min_width, 3, 1, 366, token)?;
                self.state.day = value;
                self.state.ordinal = true;
                self.pos += width;
            }
            FieldKind::Month | FieldKind::Month2 => {
                let min_width = if kind == FieldKind::Month { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 1, 12, token)?;
                self.state.month = value - 1;
                self.pos += width;
            }
            FieldKind::MonthAbbr | FieldKind::MonthFull => {
                let names: &[&str] = if kind == FieldKind::MonthAbbr {
                    &self.locale.month_names_short
                } else {
                    &self.locale.month_names_full
                };
                let (index, width) = self.name(names).ok_or_else(|| self.fail(token))?;
                self.state.month = index as u32;
                self.pos += width;
            }
            FieldKind::DayAbbr | FieldKind::DayFull => {
                let names: &[&str] = if kind == FieldKind::DayAbbr {
                    &self.locale.day_names_short
                } else {
                    &self.locale.day_names_full
                };
                // the matched table index lands in the day accumulator; a
                // day-of-month token later in the layout overwrites it
                let (index, width) = self.name(names).ok_or_else(|| self.fail(token))?;
                self.state.day = index as u32;
                self.pos += width;
            }
            FieldKind::Year | FieldKind::Year2 | FieldKind::Year4 => {
                let min_width = if kind == FieldKind::Year4 { 4 } else { 2 };
                let (value, width) = self
                    .scan_int(self.pos, min_width, 4)
                    .ok_or_else(|| self.fail(token))?;
                self.state.year = if width == 2 {
                    // pivot rule: 71-99 read as 1900s, 00-70 as 2000s
                    if value > 70 {
                        1900 + value as i32
                    } else {
                        2000 + value as i32
                    }
                } else {
                    value as i32
                };
                self.pos += width;
            }
            FieldKind::Hour12 | FieldKind::Hour12Padded => {
                let min_width = if kind == FieldKind::Hour12 { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 0, 12, token)?;
                self.state.hour = value;
                self.pos += width;
            }
            FieldKind::Hour24 | FieldKind::Hour24Padded => {
                let min_width = if kind == FieldKind::Hour24 { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 0, 23, token)?;
                self.state.hour = value;
                self.pos += width;
            }
            FieldKind::Minute | FieldKind::Minute2 => {
                let min_width = if kind == FieldKind::Minute { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 0, 59, token)?;
                self.state.minute = value;
                self.pos += width;
            }
            FieldKind::Second | FieldKind::Second2 => {
                let min_width = if kind == FieldKind::Second { 1 } else { 2 };
                let (value, width) = self.digits(min_width, 2, 0, 59, token)?;
                self.state.second = value;
                self.pos += width;
            }
            FieldKind::AmPm(_) => {
                let marker = self
                    .input
                    .get(self.pos..self.pos + 2)
                    .ok_or_else(|| self.fail(token))?;
                if marker.eq_ignore_ascii_case("am") {
                    self.state.meridiem = Some(Meridiem::Am);
                } else if marker.eq_ignore_ascii_case("pm") {
                    self.state.meridiem = Some(Meridiem::Pm);
                } else {
                    return Err(self.fail(token));
                }
                self.pos += 2;
            }
            FieldKind::UtcOffset => {
                // sign plus up to two digits; the offset is not part of the
                // date value, so the digits are consumed and dropped
                let mut at = self.pos;
                if matches!(self.input.as_bytes().get(at).copied(), Some(b'+' | b'-')) {
                    at += 1;
                }
                let (_, width) = self.scan_int(at, 1, 2).ok_or_else(|| self.fail(token))?;
                self.pos = at + width;
            }
        }
        Ok(())
    }

    fn match_literal(&mut self, literal: &str, token: &FormatToken) -> Result<(), ParseError> {
        match self.input.get(self.pos..self.pos + literal.len()) {
            Some(slice) if slice == literal => {
                self.pos += literal.len();
                Ok(())
            }
            _ => Err(self.fail(token)),
        }
    }

    /// Scan a bounded digit run and range-check its value.
    fn digits(
        &self,
        min_width: usize,
        max_width: usize,
        min_value: u32,
        max_value: u32,
        token: &FormatToken,
    ) -> Result<(u32, usize), ParseError> {
        let (value, width) = self
            .scan_int(self.pos, min_width, max_width)
            .ok_or_else(|| self.fail(token))?;
        if value < min_value || value > max_value {
            return Err(self.fail(token));
        }
        Ok((value, width))
    }

    /// Find the widest all-digit window at `at`, trying `max_width` first
    /// and shrinking to `min_width`. Returns the value and width consumed.
    fn scan_int(&self, at: usize, min_width: usize, max_width: usize) -> Option<(u32, usize)> {
        let bytes = self.input.as_bytes();
        for width in (min_width..=max_width).rev() {
            let Some(window) = bytes.get(at..at + width) else {
                continue;
            };
            if window.iter().all(u8::is_ascii_digit) {
                let value = window
                    .iter()
                    .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
                return Some((value, width));
            }
        }
        None
    }

    /// Case-insensitive prefix match against a name table, preferring the
    /// first entry in table order. Returns the entry index and its length.
    fn name(&self, names: &[&str]) -> Option<(usize, usize)> {
        for (index, name) in names.iter().enumerate() {
            if let Some(slice) = self.input.get(self.pos..self.pos + name.len()) {
                if slice.eq_ignore_ascii_case(name) {
                    return Some((index, name.len()));
                }
            }
        }
        None
    }

    /// Validate the accumulated fields and build the date.
    fn finish(self) -> Result<DateValue, ParseError> {
        let ParseState {
            day,
            month,
            year,
            mut hour,
            minute,
            second,
            meridiem,
            ordinal,
        } = self.state;

        if !ordinal {
            let length = days_in_month(year, month + 1);
            if day < 1 || day > length {
                return Err(ParseError::InvalidDayOfMonth {
                    year,
                    month: month + 1,
                    day,
                });
            }
        }

        match meridiem {
            Some(Meridiem::Pm) if hour < 12 => hour += 12,
            Some(Meridiem::Am) if hour > 11 => hour -= 12,
            _ => {}
        }

        Ok(DateValue::from_parts(year, month, day, hour, minute, second))
    }
}
