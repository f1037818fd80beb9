//! File analyzer — turns raw file text into a [`LogFile`].
//!
//! Each non-blank line becomes a [`LogEntry`] carrying its original 1-based
//! line number, a category, and an optional timestamp. Counts and the
//! timestamp summary are accumulated in the same fold that builds the entries.

use crate::classify::classify;
use crate::timestamp::TimestampExtractor;
use crate::types::{CategoryCounts, FileId, LogEntry, LogFile, TimestampSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    extractor: TimestampExtractor,
}

#[derive(Default)]
struct Fold {
    entries: Vec<LogEntry>,
    counts: CategoryCounts,
    summary: TimestampSummary,
}

impl Analyzer {
    pub fn new(extractor: TimestampExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &TimestampExtractor {
        &self.extractor
    }

    /// Analyze one line. Returns `None` for blank lines.
    pub fn analyze_line(&self, line_number: usize, raw: &str) -> Option<LogEntry> {
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        let ts = self.extractor.extract(line);
        Some(LogEntry {
            line: line.to_string(),
            line_number,
            category: classify(line),
            timestamp: ts.as_ref().map(|t| t.instant),
            original_timestamp_text: ts.map(|t| t.original_text),
        })
    }

    pub fn analyze(&self, raw_content: &str, file_name: &str) -> LogFile {
        let fold = raw_content
            .split('\n')
            .enumerate()
            .filter_map(|(idx, raw)| self.analyze_line(idx + 1, raw))
            .fold(Fold::default(), |mut acc, entry| {
                acc.counts = acc.counts.with(entry.category);
                if let Some(ts) = entry.timestamp {
                    acc.summary = acc.summary.with(ts);
                }
                acc.entries.push(entry);
                acc
            });

        tracing::debug!(
            file = file_name,
            entries = fold.entries.len(),
            errors = fold.counts.error,
            timestamps = fold.summary.total_timestamps,
            "analyzed file"
        );

        LogFile {
            id: FileId::new(),
            name: file_name.to_string(),
            raw_content: raw_content.to_string(),
            entries: fold.entries,
            category_counts: fold.counts,
            timestamp_summary: fold.summary,
        }
    }
}

/// Analyze with the current calendar year for yearless timestamps.
pub fn analyze(raw_content: &str, file_name: &str) -> LogFile {
    Analyzer::default().analyze(raw_content, file_name)
}
