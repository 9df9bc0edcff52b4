//! Month grid construction for calendar views.
//!
//! The grid is plain data. Widgets decide how to draw it and keep their own
//! display state; nothing here tracks which popup is open or what is
//! highlighted beyond the day the grid was built from.

use crate::date_value::{days_in_month, DateValue};

/// One month laid out in Sunday-first week rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// Month of the grid, 0 through 11.
    pub month: u32,
    /// Day of the month the grid was built from, for highlighting.
    pub target_day: u32,
    /// Week rows; `None` cells pad before the first day and after the last.
    pub weeks: Vec<[Option<u32>; 7]>,
}

/// Build the month grid around a date.
pub fn month_grid(date: &DateValue) -> MonthGrid {
    let year = date.year();
    let month = date.month();
    let first_weekday = DateValue::from_parts(year, month, 1, 0, 0, 0).weekday() as usize;
    let length = days_in_month(year, month + 1);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first_weekday;
    for day in 1..=length {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot != 0 {
        weeks.push(week);
    }

    MonthGrid {
        year,
        month,
        target_day: date.day(),
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_june_2007() {
        // June 2007 starts on a Friday and has 30 days
        let grid = month_grid(&DateValue::from_parts(2007, 5, 15, 0, 0, 0));
        assert_eq!((grid.year, grid.month, grid.target_day), (2007, 5, 15));
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(
            grid.weeks[0],
            [None, None, None, None, None, Some(1), Some(2)]
        );
        assert_eq!(grid.weeks[4][6], Some(30));
    }

    #[test]
    fn test_leap_february() {
        let grid = month_grid(&DateValue::from_parts(2008, 1, 1, 0, 0, 0));
        let days: Vec<u32> = grid.weeks.iter().flatten().filter_map(|&d| d).collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn test_month_starting_sunday() {
        // July 2007 starts on a Sunday; the first row has no padding
        let grid = month_grid(&DateValue::from_parts(2007, 6, 1, 0, 0, 0));
        assert_eq!(grid.weeks[0][0], Some(1));
        assert_eq!(grid.weeks.len(), 5);
    }
}
