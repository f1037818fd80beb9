//! Domain-specific assertion macros for logsift harnesses.
//!
//! These add context-rich failure messages that make it clear *which* line
//! and *which* pipeline property was violated.

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that an entry has the expected category.
///
/// ```rust
/// assert_category!(entry, Category::Error);
/// ```
#[macro_export]
macro_rules! assert_category {
    ($entry:expr, $category:expr) => {{
        let entry: &logsift::LogEntry = &$entry;
        let expected: logsift::Category = $category;
        if entry.category != expected {
            panic!(
                "assert_category! failed:\n  expected: {:?}\n  actual:   {:?}\n  line {}: {:?}",
                expected, entry.category, entry.line_number, entry.line
            );
        }
    }};
}

/// Assert that an entry's timestamp was parsed from `text` into `instant`.
///
/// ```rust
/// assert_timestamp!(entry, "2024-06-15 09:34:10", dt(2024, 6, 15, 9, 34, 10));
/// ```
#[macro_export]
macro_rules! assert_timestamp {
    ($entry:expr, $text:expr, $instant:expr) => {{
        let entry: &logsift::LogEntry = &$entry;
        let text: &str = $text;
        let instant: chrono::NaiveDateTime = $instant;
        match (&entry.original_timestamp_text, entry.timestamp) {
            (Some(t), Some(ts)) if t == text && ts == instant => {}
            (t, ts) => panic!(
                "assert_timestamp! failed:\n  expected: {:?} -> {}\n  actual:   {:?} -> {:?}\n  line {}: {:?}",
                text, instant, t, ts, entry.line_number, entry.line
            ),
        }
    }};
}

/// Assert that an entry carries no timestamp at all.
#[macro_export]
macro_rules! assert_no_timestamp {
    ($entry:expr) => {{
        let entry: &logsift::LogEntry = &$entry;
        if entry.timestamp.is_some() || entry.original_timestamp_text.is_some() {
            panic!(
                "assert_no_timestamp! failed: found {:?}\n  line {}: {:?}",
                entry.original_timestamp_text, entry.line_number, entry.line
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// View assertions
// ---------------------------------------------------------------------------

/// Assert that every entry of every file in a view satisfies a predicate.
///
/// ```rust
/// assert_view_entries_all(&view, |e| e.timestamp.is_some());
/// ```
pub fn assert_view_entries_all(view: &[logsift::LogFile], pred: impl Fn(&logsift::LogEntry) -> bool) {
    let failing: Vec<_> = view
        .iter()
        .flat_map(|f| f.entries.iter().map(move |e| (f.name.as_str(), e)))
        .filter(|(_, e)| !pred(*e))
        .collect();
    if let Some((name, entry)) = failing.first() {
        panic!(
            "assert_view_entries_all failed: {} entries did not satisfy predicate.\n  first: {}:{} {:?}",
            failing.len(),
            name,
            entry.line_number,
            entry.line
        );
    }
}

/// Assert that a filtered view contains no empty files.
pub fn assert_no_empty_files(view: &[logsift::LogFile]) {
    for file in view {
        assert!(
            !file.entries.is_empty(),
            "filtered view must not contain empty file {:?}",
            file.name
        );
    }
}
