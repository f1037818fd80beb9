//! Keyword-precedence line classifier.
//!
//! Rules are checked top to bottom against the lowercased line; the first rule
//! with any keyword contained in the line decides the category. Lines matching
//! no rule are [`Category::Info`].

use crate::types::Category;

/// Ordered (category, keywords) table. Earlier rows take precedence.
pub const RULES: &[(Category, &[&str])] = &[
    (Category::Error, &["critical", "fatal", "error"]),
    (Category::Warning, &["warning", "warn", "notice"]),
    (Category::Success, &["info", "debug", "success"]),
];

pub fn classify(line: &str) -> Category {
    let lower = line.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(Category::Info, |(category, _)| *category)
}
