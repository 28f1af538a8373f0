//! Line splitting and line-level metrics.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Comment-opening tokens recognized across the supported languages:
    /// line comments (`//`, `#`) and block comment open/continuation/close.
    static ref COMMENT_OPEN: Regex = Regex::new(r"^(//|#|/\*|\*|\*/)").unwrap();
}

/// Line counts over one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMetrics {
    pub total_lines: usize,
    pub non_empty_lines: usize,
    pub comment_lines: usize,
}

/// Split a buffer into lines, normalizing CRLF endings.
///
/// An empty buffer yields a single empty line, so `total_lines` is never 0.
pub fn split_lines(code: &str) -> Vec<&str> {
    code.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect()
}

/// Count total, non-empty, and comment lines.
///
/// A comment marker inside a string literal is indistinguishable from a real
/// comment here and is counted as one; documented limitation.
pub fn collect(lines: &[&str]) -> LineMetrics {
    let mut non_empty = 0;
    let mut comments = 0;
    for line in lines {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            non_empty += 1;
        }
        if COMMENT_OPEN.is_match(trimmed) {
            comments += 1;
        }
    }
    LineMetrics {
        total_lines: lines.len(),
        non_empty_lines: non_empty,
        comment_lines: comments,
    }
}
