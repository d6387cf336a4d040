/// Calendar-field accessors the difference calculator reads from.
///
/// Implementors must return already-validated Gregorian fields: month in
/// 1-12, day within the month, hour 0-23, minute and second 0-59 and
/// millisecond 0-999.
pub trait CalendarFields {
    fn year(&self) -> i32;
    fn month(&self) -> u32;
    fn day(&self) -> u32;
    fn hour(&self) -> u32;
    fn minute(&self) -> u32;
    fn second(&self) -> u32;
    fn millisecond(&self) -> u32;
}
