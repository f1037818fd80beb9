//! Dashboard roll-up over the full file collection.

use crate::types::{Category, LogFile};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Derived counts for the dashboard. Recomputed on every read; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_files: usize,
    pub total_entries: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_success: usize,
    pub total_info: usize,
    pub files_with_errors: usize,
    pub files_with_warnings: usize,
    pub files_with_success: usize,
    pub total_timestamps: usize,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

impl DashboardStats {
    fn with(self, file: &LogFile) -> Self {
        let c = &file.category_counts;
        let t = &file.timestamp_summary;
        let has = |category| usize::from(file.has_category(category));
        Self {
            total_files: self.total_files + 1,
            total_entries: self.total_entries + c.total,
            total_errors: self.total_errors + c.error,
            total_warnings: self.total_warnings + c.warning,
            total_success: self.total_success + c.success,
            total_info: self.total_info + c.info(),
            files_with_errors: self.files_with_errors + has(Category::Error),
            files_with_warnings: self.files_with_warnings + has(Category::Warning),
            files_with_success: self.files_with_success + has(Category::Success),
            total_timestamps: self.total_timestamps + t.total_timestamps,
            earliest: min_present(self.earliest, t.earliest),
            latest: max_present(self.latest, t.latest),
        }
    }
}

fn min_present(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_present(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

pub fn aggregate(files: &[LogFile]) -> DashboardStats {
    files.iter().fold(DashboardStats::default(), DashboardStats::with)
}
