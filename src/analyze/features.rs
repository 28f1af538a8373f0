//! Lexical feature category counting.
//!
//! Each category is one whole-buffer pattern; counting is token-occurrence
//! counting, not declaration counting. A token inside a string or comment is
//! still counted; documented limitation of the regex approach.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref LOOPS: Regex = Regex::new(r"\b(for|while|do)\b").unwrap();
    static ref CONDITIONALS: Regex =
        Regex::new(r"\b(if|else if|else|elif|switch|case)\b").unwrap();
    static ref IMPORTS: Regex = Regex::new(r"\bimport\b|#include\b|\busing\s+namespace\b").unwrap();
    static ref IO: Regex = Regex::new(
        r"\b(input\(|print\(|printf\(|scanf\(|cout\b|cin\b|System\.out\.|console\.log|readLine\b|getline\b)"
    )
    .unwrap();
    static ref ERRORS: Regex =
        Regex::new(r"\btry\b|\bcatch\b|\bexcept\b|\bfinally\b|\bthrow\b|\bthrows\b").unwrap();
    static ref DATA_STRUCTURES: Regex = Regex::new(
        r"\b(List|ArrayList|Map|HashMap|Set|dict|list|vector|array|queue|stack|deque)\b"
    )
    .unwrap();
}

/// Occurrence counts for the lexical categories plus declaration counts and
/// the recursion flag.
///
/// `functions` and `classes` count distinct declarations; everything else is
/// a raw non-overlapping match count over the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCounts {
    pub functions: usize,
    pub classes: usize,
    pub loops: usize,
    pub conditionals: usize,
    pub imports: usize,
    pub io: usize,
    pub errors: usize,
    pub data_structures: usize,
    pub recursion: bool,
}

/// Raw lexical category counts over one buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalCounts {
    pub loops: usize,
    pub conditionals: usize,
    pub imports: usize,
    pub io: usize,
    pub errors: usize,
    pub data_structures: usize,
}

fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

/// Count every lexical category in one pass per category.
pub fn count(code: &str) -> LexicalCounts {
    LexicalCounts {
        loops: count_matches(&LOOPS, code),
        conditionals: count_matches(&CONDITIONALS, code),
        imports: count_matches(&IMPORTS, code),
        io: count_matches(&IO, code),
        errors: count_matches(&ERRORS, code),
        data_structures: count_matches(&DATA_STRUCTURES, code),
    }
}

impl FeatureCounts {
    pub fn assemble(
        lexical: LexicalCounts,
        functions: usize,
        classes: usize,
        recursion: bool,
    ) -> Self {
        Self {
            functions,
            classes,
            loops: lexical.loops,
            conditionals: lexical.conditionals,
            imports: lexical.imports,
            io: lexical.io,
            errors: lexical.errors,
            data_structures: lexical.data_structures,
            recursion,
        }
    }
}
