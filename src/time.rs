//! Fixed-length time spans in milliseconds.
//!
//! Months and years are average Gregorian lengths: 30.44 and 365.25 days.

pub const MILLIS_PER_SECOND: u64 = 1000;

pub const MILLIS_PER_MINUTE: u64 = MILLIS_PER_SECOND * 60;

pub const MILLIS_PER_HOUR: u64 = MILLIS_PER_MINUTE * 60;

pub const MILLIS_PER_DAY: u64 = MILLIS_PER_HOUR * 24;

pub const MILLIS_PER_MONTH: u64 = MILLIS_PER_SECOND * 2630016;

pub const MILLIS_PER_YEAR: u64 = MILLIS_PER_SECOND * 31557600;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_is_30_44_days_ok() {
        assert_eq!(MILLIS_PER_MONTH, MILLIS_PER_DAY * 3044 / 100);
    }

    #[test]
    fn year_is_365_25_days_ok() {
        assert_eq!(MILLIS_PER_YEAR, MILLIS_PER_DAY * 36525 / 100);
    }
}
