//! logsift-core — log classification, timestamp extraction, and filtering.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► Analyzer ──► LogFile collection ──► filter_files ──► view
//!                │                    │
//!   TimestampExtractor + classify     └──────────► aggregate ──► DashboardStats
//! ```
//!
//! Every operation here is pure and synchronous. Nothing fails: lines without
//! a recognisable timestamp simply carry none, and lines matching no keyword
//! are classified as [`Category::Info`].

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod filter;
pub mod stats;
pub mod timestamp;
pub mod types;

pub use analyzer::{analyze, Analyzer};
pub use classify::classify;
pub use filter::{filter_files, CategoryFilter, FilterQuery};
pub use stats::{aggregate, DashboardStats};
pub use timestamp::{extract, ExtractedTimestamp, TimestampExtractor};
pub use types::{Category, CategoryCounts, FileId, LogEntry, LogFile, TimestampSummary};
