//! Calendar-aware year arithmetic for window bounds.
//!
//! Horizon offsets must respect the calendar (leap years, month lengths)
//! rather than a fixed 365-day span: a window starting Feb 29 and ending in
//! a non-leap year must land on Feb 28, not drift by the accumulated leap
//! days. The helpers here do direct calendar arithmetic without going
//! through jiff's `Span` machinery.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
#[must_use]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without creating a `jiff::civil::Date`.
#[inline]
#[must_use]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Offset a date by `years` calendar years, preserving month and day.
///
/// When the source day does not exist in the target month (Feb 29 offset
/// into a non-leap year), the day is clamped to the month's last day.
/// Negative `years` moves backwards.
#[inline]
#[must_use]
pub fn add_years(d: Date, years: i16) -> Date {
    let year = d.year() + years;
    let day = d.day().min(days_in_month(year, d.month()));
    jiff::civil::date(year, d.month(), day)
}

/// Offset a date backwards by `years` calendar years.
///
/// Same clamping behavior as [`add_years`].
#[inline]
#[must_use]
pub fn sub_years(d: Date, years: i16) -> Date {
    add_years(d, -years)
}
