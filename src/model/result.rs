// src/model/result.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::PlotSpec;

pub const UNNAMED_QUERY: &str = "Unnamed Query";

// One generated analysis record. `plot` is required; entries without it are
// discarded by the loader. Unrecognized fields are kept in `extra` so that
// exporting and re-loading the list is lossless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub plot: PlotSpec,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultEntry {
    pub fn query_label(&self) -> &str {
        self.query.as_deref().unwrap_or(UNNAMED_QUERY)
    }

    pub fn generated_at(&self) -> &str {
        self.timestamp.as_deref().unwrap_or("N/A")
    }

    pub fn trace_count(&self) -> usize {
        self.plot.data.len()
    }
}

/// Parse an entry's ISO-8601-ish timestamp for sorting. Missing, empty or
/// unparsable timestamps map to the epoch floor so they sort last in
/// newest-first order. Naive timestamps are taken as UTC.
pub fn parse_timestamp(entry: &ResultEntry) -> DateTime<Utc> {
    let ts = match entry.timestamp.as_deref() {
        Some(ts) if !ts.is_empty() => ts,
        _ => return DateTime::<Utc>::MIN_UTC,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.with_timezone(&Utc);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(ts, format) {
            return Utc.from_utc_datetime(&naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(ts, "%Y-%m-%d") {
        return Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    }

    DateTime::<Utc>::MIN_UTC
}
