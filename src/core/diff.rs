use crate::core::calendar::{days_in_month, previous_month};
use crate::domain::model::{CalendarDifference, Timestamp};
use crate::domain::ports::CalendarFields;

/// Calendar difference between two timestamps, in either order.
///
/// The later timestamp minus the result equals the earlier one; see
/// [`CalendarDifference::add_to`].
pub fn diff(a: Timestamp, b: Timestamp) -> CalendarDifference {
    diff_fields(&a, &b)
}

/// Same as [`diff`] for any ordered type exposing calendar fields.
///
/// Subtracts field by field from milliseconds up to years. Whenever the later
/// value's field is smaller, one unit of the next-coarser field is borrowed.
/// A day borrow takes the length of the month preceding the later value's
/// month, raised to the earlier value's day-of-month when that month is
/// shorter, which matches adding months with end-of-month clamping.
pub fn diff_fields<T: CalendarFields + Ord>(a: &T, b: &T) -> CalendarDifference {
    let (hi, lo) = if a < b { (b, a) } else { (a, b) };
    let mut hi = Fields::read(hi);
    let lo = Fields::read(lo);

    if hi.millisecond < lo.millisecond {
        hi.millisecond += 1000;
        hi.second -= 1;
    }
    if hi.second < lo.second {
        hi.second += 60;
        hi.minute -= 1;
    }
    if hi.minute < lo.minute {
        hi.minute += 60;
        hi.hour -= 1;
    }
    if hi.hour < lo.hour {
        hi.hour += 24;
        hi.day -= 1;
    }
    if hi.day < lo.day {
        let (year, month) = previous_month(hi.year as i32, hi.month as u32);
        hi.day += i64::from(days_in_month(year, month)).max(lo.day);
        hi.month -= 1;
    }
    if hi.month < lo.month {
        hi.month += 12;
        hi.year -= 1;
    }

    let result = CalendarDifference::new(
        unit(hi.year - lo.year),
        unit(hi.month - lo.month),
        unit(hi.day - lo.day),
        unit(hi.hour - lo.hour),
        unit(hi.minute - lo.minute),
        unit(hi.second - lo.second),
        unit(hi.millisecond - lo.millisecond),
    );
    tracing::trace!(?result, "calendar difference computed");
    result
}

/// One side of the subtraction, widened so borrows can dip below zero.
#[derive(Debug, Clone, Copy)]
struct Fields {
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,
}

impl Fields {
    fn read<T: CalendarFields>(value: &T) -> Self {
        Self {
            year: i64::from(value.year()),
            month: i64::from(value.month()),
            day: i64::from(value.day()),
            hour: i64::from(value.hour()),
            minute: i64::from(value.minute()),
            second: i64::from(value.second()),
            millisecond: i64::from(value.millisecond()),
        }
    }
}

// Non-negative once every borrow has propagated.
fn unit(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
