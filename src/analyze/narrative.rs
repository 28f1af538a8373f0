//! Derived narrative judgments: constructs, steps, issues, suggestions,
//! execution-flow outline, and the summary paragraph.
//!
//! Everything here is a pure function of the feature counts, line metrics,
//! and loop-depth estimate; the sentences themselves are fixed.

use serde::{Deserialize, Serialize};

use crate::analyze::features::FeatureCounts;
use crate::analyze::metrics::LineMetrics;
use crate::language::Language;

/// A user-facing tag for one detected feature category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construct {
    pub label: String,
    pub detail: String,
}

fn construct(label: &str, detail: &str) -> Construct {
    Construct {
        label: label.to_string(),
        detail: detail.to_string(),
    }
}

/// Construct tags in fixed display order, one per category present.
pub fn build_constructs(stats: &FeatureCounts) -> Vec<Construct> {
    let mut constructs = Vec::new();
    if stats.classes > 0 {
        constructs.push(construct("Classes", "Defines data models or structures."));
    }
    if stats.functions > 0 {
        constructs.push(construct("Functions", "Reusable logic blocks."));
    }
    if stats.loops > 0 {
        constructs.push(construct("Loops", "Repeats actions over data."));
    }
    if stats.conditionals > 0 {
        constructs.push(construct("Conditionals", "Decision-making branches."));
    }
    if stats.imports > 0 {
        constructs.push(construct("Imports", "Uses external libraries."));
    }
    if stats.io > 0 {
        constructs.push(construct("Input/Output", "Reads or prints values."));
    }
    if stats.data_structures > 0 {
        constructs.push(construct(
            "Data Structures",
            "Stores data in lists, maps, or arrays.",
        ));
    }
    if stats.errors > 0 {
        constructs.push(construct("Error Handling", "Handles exceptions safely."));
    }
    if stats.recursion {
        constructs.push(construct("Recursion", "Function calls itself."));
    }
    constructs
}

/// Ordered narrative of presumed execution stages; always ends with the
/// produce-output sentence.
pub fn generate_steps(stats: &FeatureCounts) -> Vec<String> {
    let mut steps = Vec::new();
    if stats.imports > 0 {
        steps.push("Load dependencies and libraries needed for the program.".to_string());
    }
    if stats.classes > 0 {
        steps.push("Define classes to organize data or behavior.".to_string());
    }
    if stats.functions > 0 {
        steps.push("Declare helper functions for reuse.".to_string());
    }
    if stats.io > 0 {
        steps.push("Read input values or prepare data to process.".to_string());
    }
    if stats.data_structures > 0 {
        steps.push("Initialize data structures to hold information.".to_string());
    }
    if stats.loops > 0 {
        steps.push("Iterate through data using loops to compute results.".to_string());
    }
    if stats.conditionals > 0 {
        steps.push("Apply decision logic to handle different cases.".to_string());
    }
    if stats.errors > 0 {
        steps.push("Protect critical logic with error handling.".to_string());
    }
    steps.push("Produce output and finish execution.".to_string());
    steps
}

/// Conditional warnings, falling back to a fixed all-clear message.
pub fn generate_issues(
    stats: &FeatureCounts,
    metrics: &LineMetrics,
    loop_depth: usize,
) -> Vec<String> {
    let mut issues = Vec::new();
    if loop_depth >= 2 {
        issues.push("Nested loops may be slow for large inputs.".to_string());
    }
    if stats.recursion {
        issues.push("Ensure recursion has a clear base case to avoid infinite calls.".to_string());
    }
    if metrics.total_lines > 30 && metrics.comment_lines == 0 {
        issues.push("Consider adding comments for beginners reading this code.".to_string());
    }
    if stats.io > 0 && stats.errors == 0 {
        issues.push("Input validation or error handling could be added.".to_string());
    }
    if issues.is_empty() {
        issues.push("No obvious issues detected. Looks beginner-friendly!".to_string());
    }
    issues
}

/// One fixed tip plus conditional tips keyed on the counts.
pub fn generate_suggestions(stats: &FeatureCounts) -> Vec<String> {
    let mut tips = Vec::new();
    tips.push("Use meaningful variable names to make the intent clear.".to_string());
    if stats.functions == 0 {
        tips.push("Break logic into functions for easier understanding.".to_string());
    }
    if stats.conditionals > 3 {
        tips.push("Too many branches? Consider simplifying or using helper functions.".to_string());
    }
    if stats.data_structures > 0 {
        tips.push("Explain why each data structure was chosen.".to_string());
    }
    if stats.loops > 0 {
        tips.push("Mention the loop purpose and stopping condition in comments.".to_string());
    }
    tips
}

/// Execution-flow outline. Base five stages with conditional insertions:
/// libraries first, data initialization after reading input, iteration just
/// before output.
pub fn generate_flow(stats: &FeatureCounts) -> Vec<String> {
    let mut flow: Vec<String> = ["Start", "Read input", "Process logic", "Output", "End"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if stats.imports > 0 {
        flow.insert(0, "Load libraries".to_string());
    }
    if stats.data_structures > 0 {
        flow.insert(2, "Initialize data".to_string());
    }
    if stats.loops > 0 {
        flow.insert(flow.len() - 2, "Repeat over data".to_string());
    }
    flow
}

/// One-paragraph narrative summary templated over the language display
/// name and the counts.
pub fn format_summary(language: Language, stats: &FeatureCounts, metrics: &LineMetrics) -> String {
    format!(
        "This {} snippet has {} effective lines, {} function(s), and {} class(es). {} and {}.",
        language.display_name(),
        metrics.non_empty_lines,
        stats.functions,
        stats.classes,
        if stats.loops > 0 {
            "It uses loops"
        } else {
            "It does not use loops"
        },
        if stats.conditionals > 0 {
            "includes decision logic"
        } else {
            "keeps logic straightforward"
        },
    )
}
