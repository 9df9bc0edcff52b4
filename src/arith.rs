//! Date arithmetic in fixed-size units.

use std::str::FromStr;

use crate::date_value::DateValue;
use crate::error::ParseError;

/// A unit of elapsed time.
///
/// Every unit is a fixed number of milliseconds: a year is a flat 365 days
/// and a week 7 days, with no calendar adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl TimeUnit {
    /// Length of one unit in milliseconds.
    pub const fn millis(self) -> i64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60 * 1_000,
            TimeUnit::Hour => 60 * 60 * 1_000,
            TimeUnit::Day => 24 * 60 * 60 * 1_000,
            TimeUnit::Week => 7 * 24 * 60 * 60 * 1_000,
            TimeUnit::Year => 365 * 24 * 60 * 60 * 1_000,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    /// The unit letters are `ms`, `s`, `i` (minute), `h`, `d`, `w` and `y`,
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ms" => Ok(TimeUnit::Millisecond),
            "s" => Ok(TimeUnit::Second),
            "i" => Ok(TimeUnit::Minute),
            "h" => Ok(TimeUnit::Hour),
            "d" => Ok(TimeUnit::Day),
            "w" => Ok(TimeUnit::Week),
            "y" => Ok(TimeUnit::Year),
            _ => Err(ParseError::UnknownUnit(s.to_string())),
        }
    }
}

impl DateValue {
    /// Returns the date shifted by `amount` units. Fractional amounts shift
    /// by the corresponding fraction of the unit.
    pub fn add(&self, unit: TimeUnit, amount: f64) -> DateValue {
        let delta = (amount * unit.millis() as f64) as i64;
        DateValue::from_timestamp_millis(self.timestamp_millis() + delta)
    }

    /// Signed difference `self - start` in `unit`s, fractional when the
    /// distance is not a whole number of units.
    pub fn diff(&self, start: &DateValue, unit: TimeUnit) -> f64 {
        (self.timestamp_millis() - start.timestamp_millis()) as f64 / unit.millis() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_constants() {
        assert_eq!(TimeUnit::Millisecond.millis(), 1);
        assert_eq!(TimeUnit::Second.millis(), 1_000);
        assert_eq!(TimeUnit::Minute.millis(), 60_000);
        assert_eq!(TimeUnit::Hour.millis(), 3_600_000);
        assert_eq!(TimeUnit::Day.millis(), 86_400_000);
        assert_eq!(TimeUnit::Week.millis(), 7 * 86_400_000);
        assert_eq!(TimeUnit::Year.millis(), 365 * 86_400_000);
    }

    #[test]
    fn test_unit_letters() {
        assert_eq!("ms".parse::<TimeUnit>(), Ok(TimeUnit::Millisecond));
        assert_eq!("i".parse::<TimeUnit>(), Ok(TimeUnit::Minute));
        assert_eq!("W".parse::<TimeUnit>(), Ok(TimeUnit::Week));
        assert_eq!(
            "fortnight".parse::<TimeUnit>(),
            Err(ParseError::UnknownUnit("fortnight".to_string()))
        );
    }

    #[test]
    fn test_add_and_diff() {
        let start = DateValue::from_parts(2007, 0, 1, 0, 0, 0);
        let end = start.add(TimeUnit::Week, 1.0);
        assert_eq!((end.month(), end.day()), (0, 8));
        assert_eq!(end.diff(&start, TimeUnit::Day), 7.0);
        assert_eq!(start.diff(&end, TimeUnit::Day), -7.0);
    }

    #[test]
    fn test_fractional_amounts() {
        let start = DateValue::from_parts(2007, 0, 1, 0, 0, 0);
        let later = start.add(TimeUnit::Day, 0.5);
        assert_eq!(later.hour(), 12);
        assert_eq!(later.diff(&start, TimeUnit::Hour), 12.0);
    }
}
