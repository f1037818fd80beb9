//! Core types for logsift-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! per-line [`LogEntry`], its [`Category`], the per-file [`LogFile`] record,
//! and the derived [`CategoryCounts`] and [`TimestampSummary`].

use chrono::NaiveDateTime;
use serde::Serialize;

/// Classification label assigned to every non-blank log line.
///
/// Every line gets exactly one category; classification falls back to
/// [`Category::Info`] when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Error,
    Warning,
    Success,
    Info,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Error => write!(f, "error"),
            Category::Warning => write!(f, "warning"),
            Category::Success => write!(f, "success"),
            Category::Info => write!(f, "info"),
        }
    }
}

/// Opaque, session-unique identifier for an analyzed file.
///
/// Backed by a random v4 UUID so files with identical names, or files
/// analyzed within the same instant, never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(uuid::Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One non-blank line of an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Line text with surrounding whitespace trimmed.
    pub line: String,
    /// 1-based position in the original file. Blank lines count.
    pub line_number: usize,
    pub category: Category,
    /// Wall-clock instant parsed from the line, if any shape matched.
    pub timestamp: Option<NaiveDateTime>,
    /// The exact substring the timestamp was parsed from.
    pub original_timestamp_text: Option<String>,
}

/// Per-file category tallies.
///
/// `info` is not stored; it is whatever remains of `total` once the other
/// three categories are accounted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub total: usize,
    pub error: usize,
    pub warning: usize,
    pub success: usize,
}

impl CategoryCounts {
    /// Count of entries that fell through to the default category.
    pub fn info(&self) -> usize {
        self.total - self.error - self.warning - self.success
    }

    /// Count for a single category.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Error => self.error,
            Category::Warning => self.warning,
            Category::Success => self.success,
            Category::Info => self.info(),
        }
    }

    /// Returns a copy with one more entry of `category` tallied.
    pub fn with(self, category: Category) -> Self {
        let mut next = Self {
            total: self.total + 1,
            ..self
        };
        match category {
            Category::Error => next.error += 1,
            Category::Warning => next.warning += 1,
            Category::Success => next.success += 1,
            Category::Info => {}
        }
        next
    }
}

/// Earliest/latest parsed instant in a file plus how many entries carried one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampSummary {
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
    pub total_timestamps: usize,
}

impl TimestampSummary {
    /// Returns a copy that also accounts for `ts`.
    pub fn with(self, ts: NaiveDateTime) -> Self {
        Self {
            earliest: Some(self.earliest.map_or(ts, |e| e.min(ts))),
            latest: Some(self.latest.map_or(ts, |l| l.max(ts))),
            total_timestamps: self.total_timestamps + 1,
        }
    }
}

/// One analyzed upload.
///
/// Created once when a file finishes loading and never mutated afterwards.
/// Filtered views are clones with a reduced `entries` list; `category_counts`
/// and `timestamp_summary` always describe the full original file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFile {
    pub id: FileId,
    pub name: String,
    pub raw_content: String,
    pub entries: Vec<LogEntry>,
    pub category_counts: CategoryCounts,
    pub timestamp_summary: TimestampSummary,
}

impl LogFile {
    /// Whether the file's full-file counts include at least one `category` entry.
    pub fn has_category(&self, category: Category) -> bool {
        self.category_counts.get(category) > 0
    }

    /// Entries visible under a per-entry category selection.
    ///
    /// This is the display-side filter; the collection filter only gates
    /// whole files on their counts.
    pub fn entries_in(&self, filter: crate::filter::CategoryFilter) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| filter.admits(e.category))
    }
}
