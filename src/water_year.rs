//! Water-year date transforms.
//!
//! Snow-hydrology data is indexed against the *water year*, the 12-month
//! period running October 1 through September 30. These transforms shift
//! calendar coordinates into water-year coordinates so that temporal
//! features line up with the snowpack season instead of the calendar year.

/// Convert a calendar month (1-12) to its water-year month (1-12).
///
/// October maps to 1, September to 12.
///
/// # Example
///
/// ```
/// use imbalance::water_year::water_year_month;
///
/// assert_eq!(water_year_month(10), 1);
/// assert_eq!(water_year_month(1), 4);
/// assert_eq!(water_year_month(9), 12);
/// ```
#[inline]
pub fn water_year_month(month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month must be in 1..=12");
    if month >= 10 { month - 9 } else { month + 3 }
}

/// Convert a calendar day-of-year to its water-year day.
///
/// Day 273 (October 1 in a non-leap year) maps to 0.
///
/// Leap years are deliberately not special-cased: the 273/92 offsets are
/// fixed regardless of year length. This is a known one-day approximation
/// inherited from the upstream pipeline, kept so that derived features stay
/// comparable across datasets.
#[inline]
pub fn water_year_day(day_of_year: u32) -> u32 {
    debug_assert!(
        (1..=366).contains(&day_of_year),
        "day_of_year must be in 1..=366"
    );
    if day_of_year >= 273 {
        day_of_year - 273
    } else {
        day_of_year + 92
    }
}
