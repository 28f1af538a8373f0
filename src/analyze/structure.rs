//! Structural inference: recursion detection and loop-nesting depth.
//!
//! Both are approximations that deliberately avoid a real parser. The
//! recursion detector counts textual re-occurrences of a function name,
//! so a name reused for an unrelated call is a false positive. The depth
//! estimator tracks indentation for python and brace depth for everything
//! else; single-line braceless loop bodies in brace languages are popped
//! immediately, which matches the estimator this was modeled on.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analyze::declarations::Declaration;
use crate::language::Language;

lazy_static! {
    static ref LOOP_KEYWORD: Regex = Regex::new(r"\b(for|while|do)\b").unwrap();
}

/// Flag the buffer as recursive when any extracted function name occurs
/// with a call shape at least twice (declaration plus presumed self-call).
pub fn detect_recursion(code: &str, functions: &[Declaration]) -> bool {
    functions.iter().any(|f| {
        let pattern = format!(r"\b{}\s*\(", regex::escape(&f.name));
        match Regex::new(&pattern) {
            Ok(re) => re.find_iter(code).count() > 1,
            Err(_) => false,
        }
    })
}

/// Estimate the maximum loop nesting depth across the whole buffer.
pub fn estimate_loop_depth(lines: &[&str], language: Language) -> usize {
    match language {
        Language::Python => indentation_depth(lines),
        _ => brace_depth(lines),
    }
}

/// Indentation-stack estimator: a stack of indentation widths of open loop
/// headers. Tabs normalize to four spaces.
fn indentation_depth(lines: &[&str]) -> usize {
    let mut max_depth = 0;
    let mut stack: Vec<usize> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let indent: usize = line
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { 4 } else { 1 })
            .sum();
        while stack.last().is_some_and(|&top| indent <= top) {
            stack.pop();
        }
        if LOOP_KEYWORD.is_match(trimmed) && trimmed.ends_with(':') {
            stack.push(indent);
            max_depth = max_depth.max(stack.len());
        }
    }

    max_depth
}

/// Brace-tracking estimator: each open loop records the brace depth it
/// needs to stay inside; the line's net brace delta is applied after the
/// loop keyword is considered.
fn brace_depth(lines: &[&str]) -> usize {
    let mut max_depth = 0;
    let mut depth: i64 = 0;
    let mut active_loops: Vec<i64> = Vec::new();

    for line in lines {
        if LOOP_KEYWORD.is_match(line) {
            active_loops.push(depth + 1);
            max_depth = max_depth.max(active_loops.len());
        }
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens - closes;
        while active_loops.last().is_some_and(|&required| depth < required) {
            active_loops.pop();
        }
    }

    max_depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::declarations::DeclarationKind;
    use crate::analyze::metrics::split_lines;

    fn func(name: &str) -> Declaration {
        Declaration {
            name: name.to_string(),
            line: 1,
            kind: DeclarationKind::Function,
        }
    }

    #[test]
    fn test_recursion_detected() {
        let code = "def fact(n):\n    if n <= 1:\n        return 1\n    return n * fact(n - 1)";
        assert!(detect_recursion(code, &[func("fact")]));
    }

    #[test]
    fn test_single_call_is_not_recursion() {
        // One occurrence is the declaration itself
        let code = "def fact(n):\n    return 1";
        assert!(!detect_recursion(code, &[func("fact")]));
    }

    #[test]
    fn test_no_functions_no_recursion() {
        assert!(!detect_recursion("x = 1", &[]));
    }

    #[test]
    fn test_python_nested_depth() {
        let lines = split_lines(
            "for i in range(3):\n    for j in range(3):\n        print(i, j)\n    print(i)\nprint(\"done\")",
        );
        assert_eq!(estimate_loop_depth(&lines, Language::Python), 2);
    }

    #[test]
    fn test_python_sibling_loops_do_not_stack() {
        let lines = split_lines("for i in range(3):\n    pass\nfor j in range(3):\n    pass");
        assert_eq!(estimate_loop_depth(&lines, Language::Python), 1);
    }

    #[test]
    fn test_python_tabs_normalize() {
        let lines = split_lines("for i in x:\n\tfor j in y:\n\t\tpass");
        assert_eq!(estimate_loop_depth(&lines, Language::Python), 2);
    }

    #[test]
    fn test_brace_triple_nesting() {
        let lines = split_lines(
            "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    for (int k = 0; k < n; k++) {\n      work();\n    }\n  }\n}",
        );
        assert_eq!(estimate_loop_depth(&lines, Language::C), 3);
    }

    #[test]
    fn test_brace_sibling_loops() {
        let lines = split_lines(
            "while (a) {\n  step();\n}\nwhile (b) {\n  step();\n}",
        );
        assert_eq!(estimate_loop_depth(&lines, Language::Javascript), 1);
    }

    #[test]
    fn test_no_loops_depth_zero() {
        let lines = split_lines("int main() {\n  return 0;\n}");
        assert_eq!(estimate_loop_depth(&lines, Language::C), 0);
        assert_eq!(estimate_loop_depth(&[""], Language::Python), 0);
    }
}
