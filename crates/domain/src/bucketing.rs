//! Daily bucketing of forecast samples
//!
//! Partitions a flat, time-ordered list of forecast samples into one bucket
//! per day. Buckets appear in the order their day is first seen in the input,
//! and samples keep their input order inside a bucket.
//!
//! The default [`GroupBy::Weekday`] keys buckets by day-of-week only, so a
//! forecast spanning more than seven days merges same-weekday samples from
//! different weeks into one bucket. [`GroupBy::CalendarDate`] keys by the full
//! date instead.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use domain::{ForecastSample, Humidity, WeatherDescriptor, bucket_by_day};
//!
//! let at = |d: u32, h: u32| {
//!     ForecastSample::new(
//!         NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(h, 0, 0).unwrap(),
//!         WeatherDescriptor::new("clear", "01d"),
//!         1.0,
//!         5.0,
//!         Humidity::clamped(50),
//!     )
//! };
//!
//! let buckets = bucket_by_day(vec![at(15, 9), at(15, 12), at(16, 0)]);
//! assert_eq!(buckets.len(), 2);
//! assert_eq!(buckets.buckets()[0].len(), 2);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::ForecastSample;
use crate::value_objects::{DayOfWeek, JalaliDate};

/// How samples are assigned to day buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Same day-of-week means same bucket, regardless of calendar date
    #[default]
    Weekday,
    /// Same calendar date means same bucket
    CalendarDate,
}

impl GroupBy {
    /// Bucket key for a sample under this grouping
    #[must_use]
    pub fn key_of(self, sample: &ForecastSample) -> BucketKey {
        match self {
            Self::Weekday => BucketKey::Weekday(sample.day_of_week()),
            Self::CalendarDate => BucketKey::Date(sample.date()),
        }
    }
}

/// Identity of a day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKey {
    Weekday(DayOfWeek),
    Date(NaiveDate),
}

/// Non-empty, input-ordered samples that share a bucket key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    key: BucketKey,
    samples: Vec<ForecastSample>,
}

impl DayBucket {
    fn start(key: BucketKey, first: ForecastSample) -> Self {
        Self {
            key,
            samples: vec![first],
        }
    }

    #[must_use]
    pub const fn key(&self) -> BucketKey {
        self.key
    }

    /// Samples in input order
    #[must_use]
    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    /// The sample that opened this bucket
    #[must_use]
    pub fn first(&self) -> &ForecastSample {
        // buckets are created with one sample and never shrink
        &self.samples[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Day-of-week of the first sample
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        self.first().day_of_week()
    }

    /// Calendar date of the first sample
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.first().date()
    }

    /// Jalali date of the first sample
    #[must_use]
    pub fn jalali_date(&self) -> JalaliDate {
        JalaliDate::from_gregorian(self.date())
    }

    /// Lowest `temp_min` and highest `temp_max` across the bucket
    #[must_use]
    pub fn temperature_range(&self) -> (f64, f64) {
        self.samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), s| (lo.min(s.temp_min), hi.max(s.temp_max)),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastSample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a DayBucket {
    type Item = &'a ForecastSample;
    type IntoIter = std::slice::Iter<'a, ForecastSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Day buckets ordered by first appearance of their key
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BucketedForecast {
    buckets: Vec<DayBucket>,
}

impl BucketedForecast {
    /// The result shown after a failed search
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    #[must_use]
    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of samples across all buckets
    #[must_use]
    pub fn total_samples(&self) -> usize {
        self.buckets.iter().map(DayBucket::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayBucket> {
        self.buckets.iter()
    }
}

impl IntoIterator for BucketedForecast {
    type Item = DayBucket;
    type IntoIter = std::vec::IntoIter<DayBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a> IntoIterator for &'a BucketedForecast {
    type Item = &'a DayBucket;
    type IntoIter = std::slice::Iter<'a, DayBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group samples by day-of-week in discovery order
pub fn bucket_by_day<I>(samples: I) -> BucketedForecast
where
    I: IntoIterator<Item = ForecastSample>,
{
    bucket_by(samples, GroupBy::Weekday)
}

/// Group samples with an explicit grouping strategy
pub fn bucket_by<I>(samples: I, group_by: GroupBy) -> BucketedForecast
where
    I: IntoIterator<Item = ForecastSample>,
{
    let mut buckets: Vec<DayBucket> = Vec::new();

    for sample in samples {
        let key = group_by.key_of(&sample);
        match buckets.iter_mut().find(|bucket| bucket.key == key) {
            Some(bucket) => bucket.samples.push(sample),
            None => buckets.push(DayBucket::start(key, sample)),
        }
    }

    BucketedForecast { buckets }
}
