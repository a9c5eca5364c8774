//! The access log record.
//!
//! A record is an ordered list of `name=value` fields. Field order is part of
//! the output format and is fixed by [`AccessRecord::fields`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

/// Everything known about one finished request.
#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub duration: Duration,
    pub time: DateTime<Utc>,
    pub ip: Option<String>,
    pub host: Option<String>,
    pub params: BTreeMap<String, String>,
    pub response: String,
    pub request_id: Option<String>,
}

impl AccessRecord {
    /// The record as ordered `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("method", self.method.clone()),
            ("path", self.path.clone()),
            ("status", self.status.to_string()),
            ("duration", format_duration(self.duration)),
            ("time", self.time.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("ip", self.ip.clone().unwrap_or_else(|| "-".to_string())),
            ("host", self.host.clone().unwrap_or_else(|| "-".to_string())),
            ("params", format_params(&self.params)),
            ("response", self.response.clone()),
        ];

        if let Some(id) = &self.request_id {
            fields.push(("request_id", id.clone()));
        }

        fields
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Seconds, rounded to two decimal places.
fn format_duration(duration: Duration) -> String {
    let rounded = (duration.as_secs_f64() * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}

fn format_params(params: &BTreeMap<String, String>) -> String {
    serde_json::to_string(params).unwrap_or_else(|_| "{}".to_string())
}
