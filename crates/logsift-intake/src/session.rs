//! Session — the single owner of the file collection and filter state.
//!
//! The presentation layer reads [`Session::view`] and [`Session::stats`] after
//! every change. Both are recomputed from the stored files on each call;
//! nothing derived is cached.

use crate::error::IntakeError;
use crate::reader::Reader;
use crate::upload::UploadCandidate;
use chrono::NaiveDateTime;
use logsift_core::config::IntakeConfig;
use logsift_core::{
    aggregate, filter_files, Analyzer, CategoryFilter, DashboardStats, FileId, FilterQuery,
    LogFile,
};

/// Outcome of one [`Session::upload`] call.
#[derive(Debug, Default)]
pub struct UploadReport {
    /// Files added to the session, in completion order.
    pub added: Vec<FileId>,
    /// Candidates skipped by the acceptance rule.
    pub ignored: Vec<String>,
    /// Accepted candidates whose read failed.
    pub failed: Vec<IntakeError>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: IntakeConfig,
    analyzer: Analyzer,
    files: Vec<LogFile>,
    query: FilterQuery,
}

impl Session {
    pub fn new(config: IntakeConfig) -> Self {
        Self::with_analyzer(config, Analyzer::default())
    }

    pub fn with_analyzer(config: IntakeConfig, analyzer: Analyzer) -> Self {
        Self {
            config,
            analyzer,
            files: Vec::new(),
            query: FilterQuery::default(),
        }
    }

    pub fn intake_config(&self) -> &IntakeConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Files
    // -----------------------------------------------------------------------

    /// Read and analyze every accepted candidate.
    ///
    /// Reads run concurrently; each file is analyzed and appended as soon as
    /// its read completes, so the resulting order is completion order.
    pub async fn upload(
        &mut self,
        candidates: impl IntoIterator<Item = UploadCandidate>,
    ) -> UploadReport {
        let mut report = UploadReport::default();
        let (accepted, ignored): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| c.is_accepted(&self.config));
        for candidate in ignored {
            tracing::debug!(file = %candidate.name, "ignoring unsupported upload");
            report.ignored.push(candidate.name);
        }

        let mut reader = Reader::spawn(
            accepted,
            self.config.max_concurrent_reads,
            self.config.max_file_bytes,
        );
        while let Some(result) = reader.next().await {
            match result {
                Ok(read) => report.added.push(self.add_content(&read.name, &read.content)),
                Err(e) => {
                    tracing::warn!(file = e.file_name(), error = %e, "upload read failed");
                    report.failed.push(e);
                }
            }
        }
        report
    }

    /// Analyze already-loaded text and append it. Returns the new file's id.
    pub fn add_content(&mut self, name: &str, content: &str) -> FileId {
        let file = self.analyzer.analyze(content, name);
        let id = file.id;
        tracing::info!(file = name, %id, entries = file.entries.len(), "file added");
        self.files.push(file);
        id
    }

    pub fn remove_file(&mut self, id: FileId) -> Option<LogFile> {
        let idx = self.files.iter().position(|f| f.id == id)?;
        let removed = self.files.remove(idx);
        tracing::info!(file = %removed.name, %id, "file removed");
        Some(removed)
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[LogFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&LogFile> {
        self.files.iter().find(|f| f.id == id)
    }

    // -----------------------------------------------------------------------
    // Filter state
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.query.search.clear();
    }

    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.query.start = Some(start);
    }

    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.query.end = Some(end);
    }

    /// Clears both bounds. There is no way to clear just one.
    pub fn clear_datetime_range(&mut self) {
        self.query.start = None;
        self.query.end = None;
    }

    pub fn reset_filters(&mut self) {
        self.query = FilterQuery::default();
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// The filtered file list for display.
    pub fn view(&self) -> Vec<LogFile> {
        filter_files(&self.files, &self.query)
    }

    /// Dashboard totals over the full, unfiltered collection.
    pub fn stats(&self) -> DashboardStats {
        aggregate(&self.files)
    }
}
