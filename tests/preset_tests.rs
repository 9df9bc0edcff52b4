//! Fixed-point outputs for the eight named presets.

use dtfmt::{format, DateValue, FormatOptions};

fn sample() -> DateValue {
    DateValue::from_parts(2007, 5, 1, 15, 5, 30)
}

#[test]
fn test_short() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("short"), &opts), "6/1/07");
}

#[test]
fn test_medium() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("medium"), &opts), "Jun 1, 2007");
}

#[test]
fn test_long() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("long"), &opts), "June 1, 2007");
}

#[test]
fn test_shorttime() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("shorttime"), &opts), "6/1/07 15:05");
}

#[test]
fn test_mediumtime() {
    let opts = FormatOptions::default();
    assert_eq!(
        format(&sample(), Some("mediumtime"), &opts),
        "Jun 1, 2007 15:05"
    );
}

#[test]
fn test_longtime() {
    let opts = FormatOptions::default();
    assert_eq!(
        format(&sample(), Some("longtime"), &opts),
        "June 1, 2007 03:05:30 PM"
    );
}

#[test]
fn test_iso8610() {
    let opts = FormatOptions::default();
    assert_eq!(
        format(&sample(), Some("iso8610"), &opts),
        "2007-06-01T1505:300"
    );

    let mut shifted = FormatOptions::default();
    shifted.utc_offset_hours = -5;
    assert_eq!(
        format(&sample(), Some("iso8610"), &shifted),
        "2007-06-01T1505:30-5"
    );
}

#[test]
fn test_yyyymmdd() {
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("yyyymmdd"), &opts), "2007-06-01");
}

#[test]
fn test_preset_names_are_case_sensitive() {
    // "Short" is not a preset, so it reads as a pattern: the embedded `h`
    // renders the 12-hour hour and the rest are literals
    let opts = FormatOptions::default();
    assert_eq!(format(&sample(), Some("Short"), &opts), "S3ort");
}
