//! Collection filter — datetime, category, and free-text stages over files.
//!
//! Stages run in a fixed order and each one consumes the previous stage's
//! output:
//!
//! ```text
//! files ──► datetime ──► category ──► search ──► view
//! ```
//!
//! The datetime stage is the only one that narrows a file's entries; the
//! other two keep or drop whole files. The category stage looks at each
//! file's full-file counts, even when the datetime stage has already removed
//! the entries those counts describe.

use crate::types::{Category, LogEntry, LogFile};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Category selection for the filter. `Info` is not selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Error,
    Warning,
    Success,
}

impl CategoryFilter {
    /// The single category this filter selects, if it is not `All`.
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Error => Some(Category::Error),
            CategoryFilter::Warning => Some(Category::Warning),
            CategoryFilter::Success => Some(Category::Success),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        self.category().map_or(true, |c| c == category)
    }
}

/// Filter criteria held by the session. Every field is independently settable;
/// the datetime bounds are cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl FilterQuery {
    pub fn has_datetime_range(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Inclusive on both ends; a missing bound is unconstrained.
    pub fn in_range(&self, ts: NaiveDateTime) -> bool {
        self.start.map_or(true, |s| ts >= s) && self.end.map_or(true, |e| ts <= e)
    }
}

/// Run all stages and return the filtered view. Input files are never modified.
pub fn filter_files(files: &[LogFile], query: &FilterQuery) -> Vec<LogFile> {
    let dated = datetime_stage(files, query);
    let gated = category_stage(dated, query.category);
    search_stage(gated, &query.search)
}

fn datetime_stage(files: &[LogFile], query: &FilterQuery) -> Vec<LogFile> {
    if !query.has_datetime_range() {
        return files.to_vec();
    }
    files
        .iter()
        .filter_map(|file| {
            let entries: Vec<LogEntry> = file
                .entries
                .iter()
                .filter(|e| e.timestamp.is_some_and(|ts| query.in_range(ts)))
                .cloned()
                .collect();
            if entries.is_empty() {
                tracing::trace!(file = %file.name, "no entries in datetime range");
                return None;
            }
            Some(LogFile {
                entries,
                ..file.clone()
            })
        })
        .collect()
}

fn category_stage(files: Vec<LogFile>, filter: CategoryFilter) -> Vec<LogFile> {
    match filter.category() {
        None => files,
        Some(category) => files.into_iter().filter(|f| f.has_category(category)).collect(),
    }
}

fn search_stage(files: Vec<LogFile>, search: &str) -> Vec<LogFile> {
    if search.is_empty() {
        return files;
    }
    let needle = search.to_lowercase();
    files
        .into_iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&needle)
                || f.entries.iter().any(|e| e.line.to_lowercase().contains(&needle))
        })
        .collect()
}

/// First instant of `date`, for an inclusive range start picked from a calendar.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `date`, for an inclusive range end.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}

/// Which side of a range a picked date/time feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Combine a picked date with an optional picked time. Without a time the
/// bound covers the whole day on its side.
pub fn bound_from_parts(date: NaiveDate, time: Option<NaiveTime>, bound: Bound) -> NaiveDateTime {
    match (time, bound) {
        (Some(t), _) => date.and_time(t),
        (None, Bound::Start) => day_start(date),
        (None, Bound::End) => day_end(date),
    }
}
