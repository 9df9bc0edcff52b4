//! The date value type and its calendar conversions.
//!
//! A [`DateValue`] is a single instant stored as milliseconds relative to
//! 1970-01-01T00:00:00, with no time zone attached. Calendar fields are
//! derived on access using proleptic Gregorian rules, so values are cheap to
//! copy and never mutate; every operation returns a new value.

pub(crate) const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year. Month is 1-12.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// Day count from the epoch for a civil date. `month` is 1-12. `day` is
/// 1-based and may exceed the month length; the excess rolls forward, which
/// is how ordinal day-of-year values become dates.
///
/// Uses the 400-year-cycle arithmetic shared by the major calendar crates,
/// so years before 1970 cost the same as years after it.
fn days_from_civil(year: i32, month: u32, day: i64) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Civil date for a day count from the epoch. Inverse of [`days_from_civil`]
/// for in-range days.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { y + 1 } else { y };
    (year as i32, month as u32, day as u32)
}

/// An immutable instant on the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    epoch_millis: i64,
}

impl DateValue {
    /// Builds a date from calendar fields.
    ///
    /// `month` is 0-based (0 = January). `day` is 1-based and may exceed the
    /// month length; overflow rolls forward through the calendar.
    pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        let days = days_from_civil(year, month + 1, i64::from(day));
        let second_of_day =
            i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
        DateValue {
            epoch_millis: days * MILLIS_PER_DAY + second_of_day * 1000,
        }
    }

    /// Builds a date from a millisecond offset from the epoch.
    pub fn from_timestamp_millis(epoch_millis: i64) -> Self {
        DateValue { epoch_millis }
    }

    /// Milliseconds from the epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.epoch_millis
    }

    fn epoch_days(&self) -> i64 {
        self.epoch_millis.div_euclid(MILLIS_PER_DAY)
    }

    fn millis_of_day(&self) -> i64 {
        self.epoch_millis.rem_euclid(MILLIS_PER_DAY)
    }

    fn civil(&self) -> (i32, u32, u32) {
        civil_from_days(self.epoch_days())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.civil().0
    }

    /// The month, 0 through 11.
    pub fn month(&self) -> u32 {
        self.civil().1 - 1
    }

    /// The day of the month, 1 through 31.
    pub fn day(&self) -> u32 {
        self.civil().2
    }

    /// The day of the week, 0 through 6 with Sunday as 0.
    pub fn weekday(&self) -> u32 {
        // the epoch fell on a Thursday
        (self.epoch_days() + 4).rem_euclid(7) as u32
    }

    /// The 1-based day of the year, 1 through 366: the whole-day distance
    /// from the last day of the prior year.
    pub fn ordinal_day(&self) -> u32 {
        let year = self.year();
        (self.epoch_days() - days_from_civil(year - 1, 12, 31)) as u32
    }

    /// The hour of the day, 0 through 23.
    pub fn hour(&self) -> u32 {
        (self.millis_of_day() / 3_600_000) as u32
    }

    /// The minute of the hour, 0 through 59.
    pub fn minute(&self) -> u32 {
        (self.millis_of_day() % 3_600_000 / 60_000) as u32
    }

    /// The second of the minute, 0 through 59.
    pub fn second(&self) -> u32 {
        (self.millis_of_day() % 60_000 / 1_000) as u32
    }

    /// The millisecond of the second, 0 through 999.
    pub fn millisecond(&self) -> u32 {
        (self.millis_of_day() % 1_000) as u32
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for DateValue {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        DateValue::from_timestamp_millis(dt.and_utc().timestamp_millis())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for DateValue {
    fn from(d: chrono::NaiveDate) -> Self {
        DateValue::from(d.and_time(chrono::NaiveTime::MIN))
    }
}

#[cfg(feature = "chrono")]
impl DateValue {
    /// The same instant as a chrono [`chrono::NaiveDateTime`], if it is in
    /// chrono's representable range.
    pub fn to_naive_datetime(&self) -> Option<chrono::NaiveDateTime> {
        chrono::DateTime::from_timestamp_millis(self.epoch_millis).map(|dt| dt.naive_utc())
    }
}
