//! Calendar month value object.
//!
//! A `BillingMonth` is the atomic unit of subscription validity and cost
//! accrual. It carries no day, time of day or timezone: every finer-grained
//! date is truncated to the first day of its month on construction, so two
//! dates in the same calendar month always produce equal values.
//!
//! Ordering is chronological, i.e. lexicographic on (year, month).

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Textual month format accepted at the API boundary.
pub const MONTH_TEXT_FORMAT: &str = "MM-YYYY";

/// A calendar month, stored as the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillingMonth(NaiveDate);

impl BillingMonth {
    /// Creates a month from its year and 1-based month number.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `month` is not within 1..=12 or the year cannot be
    ///   represented as a calendar date
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month.into()));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "year",
                    NaiveDate::MIN.year().into(),
                    NaiveDate::MAX.year().into(),
                    year.into(),
                )
            })
    }

    /// Truncates any calendar date to its month. Total over all dates.
    pub fn normalize(date: NaiveDate) -> Self {
        Self(date - Days::new(u64::from(date.day0())))
    }

    /// Parses `MM-YYYY` text, attributing failures to `field`.
    ///
    /// Exactly two month digits and four year digits are accepted. The parsed
    /// value is routed through [`BillingMonth::normalize`].
    pub fn parse_field(field: &str, text: &str) -> Result<Self, ValidationError> {
        let invalid =
            || ValidationError::invalid_format(field, format!("expected {}", MONTH_TEXT_FORMAT));

        let (month_text, year_text) = text.trim().split_once('-').ok_or_else(invalid)?;
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if month_text.len() != 2 || year_text.len() != 4 {
            return Err(invalid());
        }
        if !all_digits(month_text) || !all_digits(year_text) {
            return Err(invalid());
        }

        let month: u32 = month_text.parse().map_err(|_| invalid())?;
        let year: i32 = year_text.parse().map_err(|_| invalid())?;
        let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok(Self::normalize(date))
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Absolute month index, `year * 12 + month`.
    pub fn month_index(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month())
    }

    /// The following month, or `None` past the last representable date.
    pub fn succ(&self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    /// The canonical storage form: first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

/// Inclusive number of months from `from` through `to`.
///
/// Equals 1 when both are the same month. Non-positive when `to < from`;
/// callers only rely on it for ordered pairs.
pub fn month_span(from: BillingMonth, to: BillingMonth) -> i64 {
    to.month_index() - from.month_index() + 1
}

impl From<NaiveDate> for BillingMonth {
    fn from(date: NaiveDate) -> Self {
        Self::normalize(date)
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month(), self.year())
    }
}

impl FromStr for BillingMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("month", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn month(year: i32, month: u32) -> BillingMonth {
        BillingMonth::new(year, month).unwrap()
    }

    #[test]
    fn normalize_discards_day() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 23).unwrap();
        assert_eq!(BillingMonth::normalize(date), month(2025, 7));
        assert_eq!(
            BillingMonth::normalize(date).first_day(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
    }

    #[test]
    fn normalize_keeps_last_day_in_its_month() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(BillingMonth::normalize(date), month(2025, 12));
    }

    #[test]
    fn new_rejects_month_out_of_range() {
        assert!(matches!(
            BillingMonth::new(2025, 0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            BillingMonth::new(2025, 13),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn ordering_is_year_then_month() {
        assert!(month(2024, 12) < month(2025, 1));
        assert!(month(2025, 2) > month(2025, 1));
        assert_eq!(month(2025, 3).cmp(&month(2025, 3)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn month_span_is_inclusive() {
        assert_eq!(month_span(month(2025, 7), month(2025, 9)), 3);
        assert_eq!(month_span(month(2025, 1), month(2025, 1)), 1);
        assert_eq!(month_span(month(2024, 11), month(2025, 2)), 4);
    }

    #[test]
    fn succ_wraps_year() {
        assert_eq!(month(2025, 12).succ(), Some(month(2026, 1)));
        assert_eq!(month(2025, 4).succ(), Some(month(2025, 5)));
    }

    #[test]
    fn parses_month_text() {
        let parsed: BillingMonth = "07-2025".parse().unwrap();
        assert_eq!(parsed, month(2025, 7));
        assert_eq!(parsed.to_string(), "07-2025");
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in ["7-2025", "07-25", "2025-07", "13-2025", "00-2025", "ab-2025", "", "07/2025", "+7-2025"] {
            assert!(
                text.parse::<BillingMonth>().is_err(),
                "expected {:?} to be rejected",
                text
            );
        }
    }

    #[test]
    fn parse_field_reports_field_name() {
        let err = BillingMonth::parse_field("end_date", "2025").unwrap_err();
        assert_eq!(err.field(), "end_date");
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1i32..=9999, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(date in any_date()) {
            let once = BillingMonth::normalize(date);
            prop_assert_eq!(BillingMonth::normalize(once.first_day()), once);
        }

        #[test]
        fn dates_in_the_same_month_normalize_equal(y in 1i32..=9999, m in 1u32..=12, d1 in 1u32..=28, d2 in 1u32..=28) {
            let a = NaiveDate::from_ymd_opt(y, m, d1).unwrap();
            let b = NaiveDate::from_ymd_opt(y, m, d2).unwrap();
            prop_assert_eq!(BillingMonth::normalize(a), BillingMonth::normalize(b));
        }

        #[test]
        fn month_span_of_same_month_is_one(date in any_date()) {
            let m = BillingMonth::normalize(date);
            prop_assert_eq!(month_span(m, m), 1);
        }

        #[test]
        fn month_span_strictly_increases(date in any_date(), steps in 1usize..36) {
            let start = BillingMonth::normalize(date);
            let mut end = start;
            let mut previous = month_span(start, end);
            for _ in 0..steps {
                end = end.succ().unwrap();
                let span = month_span(start, end);
                prop_assert_eq!(span, previous + 1);
                previous = span;
            }
        }

        #[test]
        fn ordering_matches_year_month_pairs(a in any_date(), b in any_date()) {
            let (ma, mb) = (BillingMonth::normalize(a), BillingMonth::normalize(b));
            prop_assert_eq!(ma.cmp(&mb), (ma.year(), ma.month()).cmp(&(mb.year(), mb.month())));
        }
    }
}
