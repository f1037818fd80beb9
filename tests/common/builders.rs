//! Test builders — ergonomic constructors for analyzed files and queries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{NaiveDate, NaiveDateTime};
use logsift::{Analyzer, CategoryFilter, FilterQuery, LogFile, Session, TimestampExtractor};
use logsift::config::IntakeConfig;

use super::fixtures::REFERENCE_YEAR;

// ---------------------------------------------------------------------------
// Analysis helpers
// ---------------------------------------------------------------------------

/// Analyzer pinned to [`REFERENCE_YEAR`].
pub fn analyzer() -> Analyzer {
    Analyzer::new(TimestampExtractor::with_reference_year(REFERENCE_YEAR))
}

/// Analyze `raw` as a file called `name` with the pinned analyzer.
pub fn analyze_as(name: &str, raw: &str) -> LogFile {
    analyzer().analyze(raw, name)
}

/// Session with default intake config and the pinned analyzer.
pub fn session() -> Session {
    Session::with_analyzer(IntakeConfig::default(), analyzer())
}

/// Build a wall-clock instant, panicking on an invalid date.
pub fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .unwrap_or_else(|| panic!("invalid test instant {y}-{mo}-{d} {h}:{mi}:{s}"))
}

// ---------------------------------------------------------------------------
// QueryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FilterQuery`] fixtures.
///
/// # Example
///
/// ```rust
/// let query = QueryBuilder::new()
///     .category(CategoryFilter::Error)
///     .search("timeout")
///     .start(dt(2024, 6, 15, 9, 0, 0))
///     .build();
/// ```
#[derive(Default)]
pub struct QueryBuilder {
    query: FilterQuery,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.query.category = category;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.query.search = search.into();
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.query.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.query.end = Some(end);
        self
    }

    pub fn build(self) -> FilterQuery {
        self.query
    }
}

/// File names of a filtered view, in order.
pub fn names(files: &[LogFile]) -> Vec<String> {
    files.iter().map(|f| f.name.clone()).collect()
}
