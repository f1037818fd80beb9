//! Timestamp extraction from free-form log lines.
//!
//! A fixed, ordered table of shapes is tried against the line. For each shape
//! only its leftmost match is considered; if that match does not parse into a
//! valid date-time the shape is abandoned and the next one is tried. The first
//! successful parse wins, regardless of where in the line it sits.
//!
//! Parsed instants are wall-clock values. Offsets and `Z` suffixes are
//! recognised as part of the matched text but do not shift the result.

use chrono::{Datelike, Local, NaiveDateTime};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A timestamp found in a line: the text it came from and its parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedTimestamp {
    pub original_text: String,
    pub instant: NaiveDateTime,
}

/// Recognised timestamp shapes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampShape {
    /// `2024-06-15T09:34:10.123+02:00`, `2024-06-15 09:34:10Z`, ...
    Iso8601,
    /// `2024-06-15 09:34:10`
    Plain,
    /// `2024-06-15 09:34:10.123`
    PlainMillis,
    /// `06/15/2024 09:34:10`
    Us,
    /// `Jun 15 09:34:10`, year taken from the extractor's reference year.
    Syslog,
    /// `[15/Jun/2024:09:34:10 +0000]`
    Apache,
}

struct Rule {
    shape: TimestampShape,
    pattern: Regex,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            shape: TimestampShape::Iso8601,
            pattern: Regex::new(
                r"[0-9]{4}-[0-9]{2}-[0-9]{2}[T ][0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:?[0-9]{2})?",
            )
            .unwrap(),
        },
        Rule {
            shape: TimestampShape::Plain,
            pattern: Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}").unwrap(),
        },
        Rule {
            shape: TimestampShape::PlainMillis,
            pattern: Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}").unwrap(),
        },
        Rule {
            shape: TimestampShape::Us,
            pattern: Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}").unwrap(),
        },
        Rule {
            shape: TimestampShape::Syslog,
            pattern: Regex::new(r"[A-Z][a-z]{2}\s+[0-9]{1,2}\s+[0-9]{2}:[0-9]{2}:[0-9]{2}").unwrap(),
        },
        Rule {
            shape: TimestampShape::Apache,
            pattern: Regex::new(r"\[[0-9]{2}/[A-Z][a-z]{2}/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4}\]")
                .unwrap(),
        },
    ]
});

static OFFSET_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Z|[+-][0-9]{2}:?[0-9]{2})$").unwrap());

/// Finds and parses the first recognisable timestamp in a line.
///
/// Syslog timestamps carry no year; the extractor fills in `reference_year`,
/// which defaults to the current local calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampExtractor {
    reference_year: i32,
}

impl Default for TimestampExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampExtractor {
    pub fn new() -> Self {
        Self::with_reference_year(Local::now().year())
    }

    /// An extractor that assumes `year` for yearless (syslog) timestamps.
    pub fn with_reference_year(year: i32) -> Self {
        Self {
            reference_year: year,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn extract(&self, line: &str) -> Option<ExtractedTimestamp> {
        RULES.iter().find_map(|rule| {
            let m = rule.pattern.find(line)?;
            let text = m.as_str();
            match self.parse(rule.shape, text) {
                Some(instant) => Some(ExtractedTimestamp {
                    original_text: text.to_string(),
                    instant,
                }),
                None => {
                    tracing::trace!(shape = ?rule.shape, candidate = text, "discarding unparseable timestamp");
                    None
                }
            }
        })
    }

    fn parse(&self, shape: TimestampShape, text: &str) -> Option<NaiveDateTime> {
        match shape {
            TimestampShape::Iso8601 => {
                let wall = OFFSET_SUFFIX.replace(text, "").replacen(' ', "T", 1);
                NaiveDateTime::parse_from_str(&wall, "%Y-%m-%dT%H:%M:%S%.f").ok()
            }
            TimestampShape::Plain => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").ok(),
            TimestampShape::PlainMillis => {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.3f").ok()
            }
            TimestampShape::Us => NaiveDateTime::parse_from_str(text, "%m/%d/%Y %H:%M:%S").ok(),
            TimestampShape::Syslog => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                let normalised = format!("{} {}", self.reference_year, fields.join(" "));
                NaiveDateTime::parse_from_str(&normalised, "%Y %b %d %H:%M:%S").ok()
            }
            TimestampShape::Apache => {
                // "[15/Jun/2024:09:34:10 +0000]" -> "15/Jun/2024:09:34:10"
                let inner = text.trim_start_matches('[').trim_end_matches(']');
                let stamp = inner.split(' ').next()?;
                NaiveDateTime::parse_from_str(stamp, "%d/%b/%Y:%H:%M:%S").ok()
            }
        }
    }
}

/// Extract using the current calendar year for yearless timestamps.
pub fn extract(line: &str) -> Option<ExtractedTimestamp> {
    TimestampExtractor::new().extract(line)
}
