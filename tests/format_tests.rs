//! Tests for custom token-pattern formatting.

use dtfmt::{format, format_default, format_text, DateValue, FormatOptions};

fn sample() -> DateValue {
    DateValue::from_parts(2007, 5, 1, 15, 5, 30)
}

#[test]
fn test_full_weekday_layout() {
    let opts = FormatOptions::default();
    assert_eq!(
        format(&sample(), Some("dddd, dd mmmm yyyy"), &opts),
        "Friday, 01 June 2007"
    );
}

#[test]
fn test_literals_pass_through() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("d : mmm : yy"), &opts), "1 : Jun : 07");
    assert_eq!(
        format(&sample(), Some("dd.mmm.yyyy [HH:ii:ss]"), &opts),
        "01.Jun.2007 [15:05:30]"
    );
    assert_eq!(
        format(&sample(), Some("yyyy-mm-dd QQ"), &opts),
        "2007-06-01 QQ"
    );
}

#[test]
fn test_twelve_and_twenty_four_hour_clocks() {
    let opts = FormatOptions::default();
    assert_eq!(
        format(&sample(), Some("hh:ii a = HH:ii"), &opts),
        "03:05 pm = 15:05"
    );
}

#[test]
fn test_midnight_renders_as_zero() {
    let opts = FormatOptions::default();
    let midnight = DateValue::from_parts(2007, 5, 1, 0, 5, 0);
    assert_eq!(format(&midnight, Some("h:ii"), &opts), "0:05");
    assert_eq!(format(&midnight, Some("hh:ii a"), &opts), "00:05 am");
}

#[test]
fn test_noon_renders_as_twelve() {
    let opts = FormatOptions::default();
    let noon = DateValue::from_parts(2007, 5, 1, 12, 0, 0);
    assert_eq!(format(&noon, Some("h a"), &opts), "12 pm");
}

#[test]
fn test_unpadded_year_takes_low_digits() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("y"), &opts), "7");
    assert_eq!(format(&sample(), Some("yy"), &opts), "07");
    assert_eq!(format(&sample(), Some("yyyy"), &opts), "2007");
}

#[test]
fn test_ordinal_day() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("yyyy-jjj"), &opts), "2007-152");
    let early = DateValue::from_parts(2007, 0, 5, 0, 0, 0);
    assert_eq!(format(&early, Some("j"), &opts), "5");
    assert_eq!(format(&early, Some("jjj"), &opts), "5");
}

#[test]
fn test_utc_offset_sign_rendering() {
    let mut opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("O"), &opts), "0");
    opts.utc_offset_hours = 2;
    assert_eq!(format(&sample(), Some("HH O"), &opts), "15 2");
    opts.utc_offset_hours = -5;
    assert_eq!(format(&sample(), Some("O"), &opts), "-5");
}

#[test]
fn test_meridiem_cases() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("a"), &opts), "pm");
    assert_eq!(format(&sample(), Some("A"), &opts), "PM");
    let morning = DateValue::from_parts(2007, 5, 1, 9, 0, 0);
    assert_eq!(format(&morning, Some("a"), &opts), "am");
    assert_eq!(format(&morning, Some("A"), &opts), "AM");
}

#[test]
fn test_default_spec_is_medium() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), None, &opts), "Jun 1, 2007");
    assert_eq!(format(&sample(), Some(""), &opts), "Jun 1, 2007");
    assert_eq!(format_default(&sample(), None), "Jun 1, 2007");
}

#[test]
fn test_format_text_reformats_dates() {
    let opts = FormatOptions::default();
    assert_eq!(
        format_text("2007-06-01", Some("dd/mm/yyyy"), &opts),
        "01/06/2007"
    );
}

#[test]
fn test_format_text_leaves_non_dates_alone() {
    let opts = FormatOptions::default();
    assert_eq!(
        format_text("meeting notes", Some("dd/mm/yyyy"), &opts),
        "meeting notes"
    );
    assert_eq!(format_text("", Some("yyyy"), &opts), "");
}
