//! Calendar bucketing of post timestamps.
//!
//! A post lands in the bucket whose key equals the UTC calendar fields of its
//! `created_at`: `(year, month, day)` for daily buckets, plus `hour` for hourly
//! ones. Month lengths and leap days are left to `chrono`; no elapsed-time
//! arithmetic is involved.
//!
//! Every bucket list produced here is sorted ascending, holds each key once
//! and only has buckets that at least one timestamp fell into.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Hourly,
    Daily,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown aggregation level {0:?}")]
pub struct UnknownGranularity(pub String);

impl FromStr for Granularity {
    type Err = UnknownGranularity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            other => Err(UnknownGranularity(other.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Grouping key of a trend bucket.
///
/// Both variants order by `(year, month, day)` and then by hour. A single
/// bucket list only ever holds one variant.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum BucketKey {
    Daily(CalendarDay),
    Hourly {
        #[serde(flatten)]
        day: CalendarDay,
        hour: u32,
    },
}

impl BucketKey {
    pub fn from_timestamp(ts: &DateTime<Utc>, granularity: Granularity) -> Self {
        let day = CalendarDay {
            year: ts.year(),
            month: ts.month(),
            day: ts.day(),
        };

        match granularity {
            Granularity::Daily => Self::Daily(day),
            Granularity::Hourly => Self::Hourly {
                day,
                hour: ts.hour(),
            },
        }
    }

    pub fn day(&self) -> CalendarDay {
        match self {
            Self::Daily(day) | Self::Hourly { day, .. } => *day,
        }
    }

    pub fn hour(&self) -> Option<u32> {
        match self {
            Self::Daily(_) => None,
            Self::Hourly { hour, .. } => Some(*hour),
        }
    }

    /// Chart label: `YYYY-MM-DD` or `YYYY-MM-DD HH`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CalendarDay { year, month, day } = self.day();
        write!(f, "{year:04}-{month:02}-{day:02}")?;
        if let Some(hour) = self.hour() {
            write!(f, " {hour:02}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendBucket {
    #[serde(rename = "_id")]
    pub key: BucketKey,
    pub count: u64,
}

/// Running per-bucket counts.
#[derive(Debug, Clone)]
pub struct TrendCounter {
    granularity: Granularity,
    counts: BTreeMap<BucketKey, u64>,
}

impl TrendCounter {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            counts: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, ts: &DateTime<Utc>) {
        *self
            .counts
            .entry(BucketKey::from_timestamp(ts, self.granularity))
            .or_default() += 1;
    }

    /// Buckets in ascending key order.
    pub fn finish(self) -> Vec<TrendBucket> {
        self.counts
            .into_iter()
            .map(|(key, count)| TrendBucket { key, count })
            .collect()
    }
}
