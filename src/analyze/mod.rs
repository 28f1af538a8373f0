//! The analysis pipeline.
//!
//! A single synchronous, stateless pass over one in-memory buffer:
//! language resolution, line metrics, lexical feature counts, declaration
//! extraction, structural inference (recursion, loop nesting), then the
//! derived judgments and per-line explanations. The [`AnalysisResult`] is
//! constructed whole; re-running on the same buffer and hint yields an
//! identical result.
//!
//! The pipeline has no failure paths: every stage produces a best-effort
//! answer for any input, including empty or binary-garbage text.

pub mod complexity;
pub mod declarations;
pub mod explain;
pub mod features;
pub mod metrics;
pub mod narrative;
pub mod structure;

use serde::{Deserialize, Serialize};

use crate::language::{self, Language, LanguageHint};
pub use complexity::ComplexityEstimate;
pub use declarations::{Declaration, DeclarationKind};
pub use features::FeatureCounts;
pub use metrics::LineMetrics;
pub use narrative::Construct;

/// One explained line of the input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineExplanation {
    pub line: usize,
    pub code: String,
    pub explanation: String,
}

/// Everything the analyzer derives from one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub metrics: LineMetrics,
    pub stats: FeatureCounts,
    pub functions: Vec<Declaration>,
    pub classes: Vec<Declaration>,
    pub loop_depth: usize,
    pub complexity: ComplexityEstimate,
    pub constructs: Vec<Construct>,
    pub steps: Vec<String>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub flow: Vec<String>,
    pub line_by_line: Vec<LineExplanation>,
    pub summary: String,
}

/// Analyze one buffer with an optional language hint.
///
/// The buffer is trimmed first, so leading and trailing blank lines do not
/// count. An empty buffer still yields a valid result with one empty line,
/// zero counts, and the fallback issue message.
pub fn analyze(raw_code: &str, hint: LanguageHint) -> AnalysisResult {
    let code = raw_code.trim();
    let lang = language::resolve(code, hint);
    let lines = metrics::split_lines(code);

    let line_metrics = metrics::collect(&lines);
    let functions = declarations::extract_functions(code, &lines, lang);
    let classes = declarations::extract_classes(&lines);
    let recursion = structure::detect_recursion(code, &functions);
    let stats = features::FeatureCounts::assemble(
        features::count(code),
        functions.len(),
        classes.len(),
        recursion,
    );

    let loop_depth = structure::estimate_loop_depth(&lines, lang);
    let complexity = complexity::estimate(loop_depth, recursion);

    let line_by_line = lines
        .iter()
        .enumerate()
        .map(|(index, line)| LineExplanation {
            line: index + 1,
            code: line.to_string(),
            explanation: explain::explain_line(line, lang),
        })
        .collect();

    AnalysisResult {
        language: lang,
        summary: narrative::format_summary(lang, &stats, &line_metrics),
        constructs: narrative::build_constructs(&stats),
        steps: narrative::generate_steps(&stats),
        issues: narrative::generate_issues(&stats, &line_metrics, loop_depth),
        suggestions: narrative::generate_suggestions(&stats),
        flow: narrative::generate_flow(&stats),
        metrics: line_metrics,
        stats,
        functions,
        classes,
        loop_depth,
        complexity,
        line_by_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_factorial_scenario() {
        let result = analyze(
            "def f(n):\n    if n<=1:\n        return 1\n    return n*f(n-1)",
            LanguageHint::Auto,
        );
        assert_eq!(result.language, Language::Python);
        assert_eq!(result.stats.functions, 1);
        assert!(result.stats.recursion);
        assert!(result.complexity.time.contains("recursive"));
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "f");
    }

    #[test]
    fn test_triple_nested_loops_scenario() {
        let code = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    for (int k = 0; k < n; k++) {\n      sum++;\n    }\n  }\n}";
        let result = analyze(code, LanguageHint::Explicit(Language::C));
        assert_eq!(result.loop_depth, 3);
        assert_eq!(result.complexity.time, "O(n^k) with k ≥ 3");
    }

    #[test]
    fn test_empty_input_scenario() {
        let result = analyze("", LanguageHint::Auto);
        assert_eq!(result.metrics.total_lines, 1);
        assert_eq!(result.stats.functions, 0);
        assert_eq!(result.stats.classes, 0);
        assert_eq!(result.loop_depth, 0);
        assert_eq!(result.complexity.time, "O(1)");
        assert!(result.constructs.is_empty());
        assert_eq!(
            result.issues,
            vec!["No obvious issues detected. Looks beginner-friendly!"]
        );
    }

    #[test]
    fn test_determinism() {
        let code = "import java.util.*;\npublic class Main {\n  public static void main(String[] args) {\n    System.out.println(\"hi\");\n  }\n}";
        let a = analyze(code, LanguageHint::Auto);
        let b = analyze(code, LanguageHint::Auto);
        assert_eq!(a, b);
    }

    #[test]
    fn test_explicit_hint_preserved() {
        let result = analyze("print(1)", LanguageHint::Explicit(Language::Other));
        assert_eq!(result.language, Language::Other);
    }

    #[test]
    fn test_buffer_trimmed_before_split() {
        let result = analyze("\n\n  x = 1  \n\n", LanguageHint::Explicit(Language::Python));
        assert_eq!(result.metrics.total_lines, 1);
        assert_eq!(result.metrics.non_empty_lines, 1);
    }

    #[test]
    fn test_line_explanations_cover_every_line() {
        let code = "a = 1\nb = 2\n\nc = a + b";
        let result = analyze(code, LanguageHint::Explicit(Language::Python));
        assert_eq!(result.line_by_line.len(), result.metrics.total_lines);
        assert_eq!(result.line_by_line[0].line, 1);
        assert_eq!(result.line_by_line[2].explanation, "Blank line to separate logical steps.");
    }

    #[test]
    fn test_flow_ordering_invariants() {
        let code = "import os\nfor x in data:\n    print(x)\n";
        let result = analyze(code, LanguageHint::Auto);
        let flow = &result.flow;
        assert_eq!(flow.first().unwrap(), "Load libraries");
        assert_eq!(flow.last().unwrap(), "End");
        let start = flow.iter().position(|s| s == "Start").unwrap();
        let end = flow.iter().position(|s| s == "End").unwrap();
        assert!(start < end);
        let repeat = flow.iter().position(|s| s == "Repeat over data").unwrap();
        assert!(repeat < flow.len() - 2);
    }
}
