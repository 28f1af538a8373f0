//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output, one section per result panel
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::analyze::AnalysisResult;

/// One analyzed input with its source path ("-" for stdin).
pub struct FileAnalysis {
    pub path: String,
    pub result: AnalysisResult,
}

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    path: &'a str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

/// Write results as JSON: a single object for one input, an array for
/// several.
pub fn write_json(analyses: &[FileAnalysis]) -> anyhow::Result<()> {
    let reports: Vec<JsonReport> = analyses
        .iter()
        .map(|a| JsonReport {
            version: env!("CARGO_PKG_VERSION"),
            path: &a.path,
            result: &a.result,
        })
        .collect();

    let json = if reports.len() == 1 {
        serde_json::to_string_pretty(&reports[0])?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write one result in pretty (human-readable) format.
pub fn write_pretty(analysis: &FileAnalysis, show_lines: bool) {
    let result = &analysis.result;

    // Header
    println!();
    print!("  ");
    print!("{}", "codesense".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Input:    ".dimmed());
    println!("{}", analysis.path);
    print!("  {}", "Language: ".dimmed());
    println!("{}", result.language.display_name());
    println!();

    // Summary paragraph
    println!("  {}", result.summary);
    println!();

    // Metric cards
    println!("  {}", "Metrics:".bold());
    write_metric("Total Lines", result.metrics.total_lines);
    write_metric("Effective Lines", result.metrics.non_empty_lines);
    write_metric("Comments", result.metrics.comment_lines);
    write_metric("Functions", result.stats.functions);
    write_metric("Classes", result.stats.classes);
    println!();

    // Construct chips
    println!("  {}", "Constructs:".bold());
    if result.constructs.is_empty() {
        println!("    {}", "No constructs detected".dimmed());
    } else {
        for c in &result.constructs {
            println!("    {:<16} {}", c.label.green(), c.detail.dimmed());
        }
    }
    println!();

    // Steps
    println!("  {}", "Steps:".bold());
    for (index, step) in result.steps.iter().enumerate() {
        println!("    {}. {}", index + 1, step);
    }
    println!();

    // Outline
    println!("  {}", "Outline:".bold());
    if result.classes.is_empty() && result.functions.is_empty() {
        println!("    No functions or classes detected.");
    } else {
        for class in &result.classes {
            println!(
                "    Class: {} {}",
                class.name.blue(),
                format!("(line {})", class.line).dimmed()
            );
        }
        for function in &result.functions {
            println!(
                "    Function: {} {}",
                function.name.blue(),
                format!("(line {})", function.line).dimmed()
            );
        }
    }
    println!();

    // Complexity
    println!("  {}", "Complexity:".bold());
    println!("    Time:  {}", result.complexity.time.yellow());
    println!("    Space: {}", result.complexity.space.yellow());
    println!(
        "    {}",
        format!("Loop depth estimate: {}", result.loop_depth).dimmed()
    );
    println!();

    // Issues
    println!("  {}", "Issues:".bold());
    for issue in &result.issues {
        println!("    - {}", issue);
    }
    println!();

    // Suggestions
    println!("  {}", "Suggestions:".bold());
    for tip in &result.suggestions {
        println!("    - {}", tip);
    }
    println!();

    // Execution flow
    println!("  {}", "Flow:".bold());
    println!("    {}", result.flow.join(" -> ").cyan());
    println!();

    // Line-by-line
    if show_lines {
        println!("  {}", "Line by line:".bold());
        for entry in &result.line_by_line {
            let code = if entry.code.trim().is_empty() {
                "(blank)".dimmed().to_string()
            } else {
                entry.code.trim_end().to_string()
            };
            println!("    {} {}", format!("L{:<4}", entry.line).dimmed(), code);
            println!("          {}", entry.explanation.dimmed());
        }
        println!();
    }
}

fn write_metric(label: &str, value: usize) {
    println!("    {:<16} {}", label, value.to_string().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::language::LanguageHint;

    #[test]
    fn test_json_report_shape() {
        let analysis = FileAnalysis {
            path: "-".to_string(),
            result: analyze("print(1)", LanguageHint::Auto),
        };
        let report = JsonReport {
            version: env!("CARGO_PKG_VERSION"),
            path: &analysis.path,
            result: &analysis.result,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["path"], "-");
        assert_eq!(value["language"], "python");
        assert!(value["metrics"]["total_lines"].is_number());
        assert!(value["stats"]["io"].is_number());
        assert!(value["line_by_line"].is_array());
        assert!(value["version"].is_string());
    }
}
