//! Jalali (Solar Hijri) calendar date
//!
//! Cards display dates in the Iranian calendar with Persian digits, in the
//! same `year/month/day` shape a Persian locale date formatter produces.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::formatting::to_persian_digits;

/// Cumulative days before each Gregorian month in a non-leap year
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date in the Jalali calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    /// Convert a Gregorian date
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let gy = i64::from(date.year());
        let gm = date.month0() as usize;
        let gd = i64::from(date.day());

        let gy2 = if gm > 1 { gy + 1 } else { gy };
        let mut days = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
            + (gy2 + 399).div_euclid(400)
            + gd
            + GREGORIAN_MONTH_OFFSETS[gm];

        let mut year = -1595 + 33 * days.div_euclid(12_053);
        days = days.rem_euclid(12_053);
        year += 4 * (days / 1461);
        days %= 1461;
        if days > 365 {
            year += (days - 1) / 365;
            days = (days - 1) % 365;
        }

        let (month, day) = if days < 186 {
            (1 + days / 31, 1 + days % 31)
        } else {
            (7 + (days - 186) / 30, 1 + (days - 186) % 30)
        };

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 (Farvardin) to 12 (Esfand)
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// `year/month/day` written with Persian digits, e.g. `۱۴۰۲/۱۰/۲۵`
    #[must_use]
    pub fn to_persian_string(&self) -> String {
        to_persian_digits(&self.to_string())
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jalali(y: i32, m: u32, d: u32) -> JalaliDate {
        JalaliDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn nowruz_is_first_of_farvardin() {
        let date = jalali(2024, 3, 20);
        assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 1));
    }

    #[test]
    fn converts_winter_date() {
        let date = jalali(2024, 1, 15);
        assert_eq!((date.year(), date.month(), date.day()), (1402, 10, 25));
    }

    #[test]
    fn day_before_nowruz_is_last_of_esfand() {
        let date = jalali(2024, 3, 19);
        assert_eq!((date.year(), date.month(), date.day()), (1402, 12, 29));
    }

    #[test]
    fn converts_autumn_date() {
        // 1 Mehr 1402
        let date = jalali(2023, 9, 23);
        assert_eq!((date.year(), date.month(), date.day()), (1402, 7, 1));
    }

    #[test]
    fn display_is_unpadded() {
        assert_eq!(jalali(2024, 3, 20).to_string(), "1403/1/1");
    }

    #[test]
    fn persian_string_uses_persian_digits() {
        assert_eq!(jalali(2024, 1, 15).to_persian_string(), "۱۴۰۲/۱۰/۲۵");
    }
}
