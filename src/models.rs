use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// One admitted bullet achievement with the date of its section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub text: String,
}

/// Calendar quarter used as the grouping key.
///
/// Ordering derives from the (year, quarter) tuple, so descending iteration
/// is reverse-chronological. Sorting the rendered "Qn YYYY" label instead
/// would put Q3 2023 ahead of Q1 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterKey {
    pub year: i32,
    pub quarter: u32, // 1..=4
}

impl QuarterKey {
    pub fn from_date(date: NaiveDate) -> Self {
        QuarterKey {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }
}

impl fmt::Display for QuarterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

/// Admitted entries bucketed by quarter. Keys iterate ascending; render
/// passes iterate `.rev()` for newest-first output.
pub type QuarterMap = BTreeMap<QuarterKey, Vec<Entry>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_map_to_quarters() {
        assert_eq!(QuarterKey::from_date(date(2024, 1, 1)).quarter, 1);
        assert_eq!(QuarterKey::from_date(date(2024, 3, 31)).quarter, 1);
        assert_eq!(QuarterKey::from_date(date(2024, 4, 15)).quarter, 2);
        assert_eq!(QuarterKey::from_date(date(2024, 6, 30)).quarter, 2);
        assert_eq!(QuarterKey::from_date(date(2024, 7, 1)).quarter, 3);
        assert_eq!(QuarterKey::from_date(date(2024, 9, 30)).quarter, 3);
        assert_eq!(QuarterKey::from_date(date(2024, 10, 1)).quarter, 4);
        assert_eq!(QuarterKey::from_date(date(2024, 12, 31)).quarter, 4);
    }

    #[test]
    fn display_matches_label_format() {
        assert_eq!(
            QuarterKey::from_date(date(2024, 4, 15)).to_string(),
            "Q2 2024"
        );
    }

    #[test]
    fn ordering_is_chronological_not_lexicographic() {
        let q1_2024 = QuarterKey { year: 2024, quarter: 1 };
        let q3_2023 = QuarterKey { year: 2023, quarter: 3 };
        // Lexicographically "Q1 2024" < "Q3 2023"; chronologically it is newer.
        assert!(q1_2024 > q3_2023);
    }
}
