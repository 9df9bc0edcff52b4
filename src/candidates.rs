//! The ordered candidate layouts for unguided parsing.
//!
//! When no format is supplied, parsing walks this list from the top and the
//! first layout that matches wins. The order is part of the contract: input
//! that fits several layouts reads as the earliest one, so little-endian
//! day/month layouts take precedence over middle-endian month/day ones.

/// Candidate layouts, most-preferred first.
pub const CANDIDATE_FORMATS: &[&str] = &[
    // little endian
    "d/m/yyyy",
    "dd/mm/yyyy",
    "dd-mm-yyyy",
    "dd-mm-yy",
    "d mmmm yyyy",
    "dd mmmm yyyy",
    "dd mmmm yy",
    "d mmmm yy",
    "dd.mm.yyyy",
    "d.m.yyyy",
    "d.m.y",
    "d. mmmm yy",
    "d. mmmm yyyy",
    "d mmm yyyy",
    "dd mmm yyyy",
    "d mmm yy",
    "dd mmm yy",
    // big endian
    "yyyy mmmm dd",
    "yy mmmm dd",
    "yyyy mmmm d",
    "yy mmmm d",
    "yyyy-mm-dd",
    "yyyy.mm.dd",
    // middle endian
    "mmmm d, yyyy",
    "mmmm dd, yyyy",
    "mmmm d, yy",
    "mmmm dd, yy",
    "mmm d, yy",
    "mmm d, yyyy",
    "mmm dd, yy",
    "mmm. d, yyyy",
    "mmm. dd, yyyy",
    "mmm. d, yy",
    "mmm. dd, yy",
    "mm/dd/yyyy",
    "mm-dd-yyyy",
    "mm.dd.yy",
    "m/d/yy",
    "mm/dd/yy",
    "mm/dd/yyyy",
    // weekday names
    "ddd, dd mmm yyyy",
    "ddd mmm dd yyyy HH:ii:ss",
    // ordinal day of year
    "yyyy-j",
    "yyyy-jjj",
    "yyyyjjjj",
    "yyyyj",
];
