//! Query string helpers and shared option structures.
//!
//! Every list and metric operation takes an options structure whose fields
//! are independently optional; absent fields never reach the query string.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Display};

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a comma-joined list when it is not empty.
    pub fn push_list<T>(&mut self, key: &'static str, values: &[T])
    where
        T: Display,
    {
        if values.is_empty() {
            return;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push((key, joined));
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Offset/limit pair accepted by every list endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Index of the first item to return.
    pub offset: Option<u32>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
}

impl Pagination {
    /// Create an empty pagination (server defaults).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: None,
            limit: None,
        }
    }

    /// Set the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Append `offset` then `limit` to a builder.
    pub fn append_to(&self, params: &mut QueryParams) {
        params.push_opt("offset", self.offset);
        params.push_opt("limit", self.limit);
    }

    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        self.append_to(&mut params);
        params.into_pairs()
    }
}

/// Aggregation applied to a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregation {
    /// Average of the samples
    Avg,
    /// Maximum sample
    Max,
    /// Sum of the samples
    Sum,
    /// 95th percentile
    Percentile95,
}

impl Aggregation {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Avg => "AVG",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Percentile95 => "95TH",
        }
    }
}

impl Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket size of a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// No bucketing
    None,
    /// Five minute buckets
    FiveMinutes,
    /// Hourly buckets
    Hour,
    /// Daily buckets
    Day,
    /// Weekly buckets
    Week,
    /// Monthly buckets
    Month,
    /// Yearly buckets
    Year,
}

impl Granularity {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::FiveMinutes => "5MIN",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for metric retrieval; each one is sent only when set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricsQuery {
    /// Bucket size.
    pub granularity: Option<Granularity>,
    /// Aggregation function.
    pub aggregation: Option<Aggregation>,
    /// Start of the window.
    pub from: Option<DateTime<Utc>>,
    /// End of the window.
    pub to: Option<DateTime<Utc>>,
}

impl MetricsQuery {
    /// Create an empty query (server defaults).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            granularity: None,
            aggregation: None,
            from: None,
            to: None,
        }
    }

    /// Set the granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Set the aggregation.
    #[must_use]
    pub const fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    /// Set the window start and end.
    #[must_use]
    pub fn with_window(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Convert to URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("granularity", self.granularity);
        params.push_opt("aggregation", self.aggregation);
        params.push_opt("from", self.from.map(format_timestamp));
        params.push_opt("to", self.to.map(format_timestamp));
        params.into_pairs()
    }
}

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
