//! Best-effort recovery of function and class declarations.
//!
//! Extraction strategy branches by language family:
//! - indentation-block (python): `def name(` scanned line by line
//! - curly-brace dynamic (javascript): named functions, arrow bindings,
//!   and function-expression bindings, matched independently and merged
//! - curly-brace typed (everything else): a permissive `modifiers* type
//!   name(` signature shape that catches most declarations across Java,
//!   C, and C++ at the cost of false positives
//!
//! A fixed denylist of reserved words suppresses the obvious false
//! positives coming from the permissive signature regex. Line attribution
//! is the first line containing the name as a substring, not the true
//! declaration site; good enough for a friendly overview.

use lazy_static::lazy_static;
use phf::phf_set;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::language::Language;

/// Reserved words and common stdlib call names excluded from candidate
/// declaration names.
pub static NAME_DENYLIST: phf::Set<&'static str> = phf_set! {
    "if", "for", "while", "switch", "catch", "return", "sizeof", "printf", "scanf",
};

lazy_static! {
    static ref CLASS_DECL: Regex = Regex::new(r"\bclass\s+([A-Za-z_][\w$]*)").unwrap();
    static ref PY_DEF: Regex = Regex::new(r"\bdef\s+([A-Za-z_][\w$]*)\s*\(").unwrap();
    static ref JS_NAMED_FN: Regex = Regex::new(r"\bfunction\s+([A-Za-z_][\w$]*)\s*\(").unwrap();
    static ref JS_ARROW_FN: Regex =
        Regex::new(r"\b(?:const|let|var)\s+([A-Za-z_][\w$]*)\s*=\s*\([^)]*\)\s*=>").unwrap();
    static ref JS_FN_EXPR: Regex =
        Regex::new(r"\b([A-Za-z_][\w$]*)\s*=\s*function\s*\(").unwrap();
    static ref TYPED_SIGNATURE: Regex = Regex::new(
        r"(?:public|private|protected|static|final|synchronized|inline|virtual|constexpr|friend|abstract|native|strictfp|\s)+[\w:<>,\[\]]+\s+([A-Za-z_][\w$]*)\s*\("
    )
    .unwrap();
}

/// Declaration kinds recovered by extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Function,
    Class,
}

/// A recovered declaration with approximate line attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub line: usize,
    pub kind: DeclarationKind,
}

/// Find class declarations, one candidate per line, deduplicated by name.
pub fn extract_classes(lines: &[&str]) -> Vec<Declaration> {
    let mut results = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if let Some(caps) = CLASS_DECL.captures(line) {
            results.push(Declaration {
                name: caps[1].to_string(),
                line: index + 1,
                kind: DeclarationKind::Class,
            });
        }
    }
    unique_by_name(results)
}

/// Find function declarations using the family strategy for `language`.
pub fn extract_functions(code: &str, lines: &[&str], language: Language) -> Vec<Declaration> {
    let mut results = Vec::new();

    match language {
        Language::Python => {
            for (index, line) in lines.iter().enumerate() {
                if let Some(caps) = PY_DEF.captures(line) {
                    results.push(Declaration {
                        name: caps[1].to_string(),
                        line: index + 1,
                        kind: DeclarationKind::Function,
                    });
                }
            }
        }
        Language::Javascript => {
            for regex in [&*JS_NAMED_FN, &*JS_ARROW_FN, &*JS_FN_EXPR] {
                for caps in regex.captures_iter(code) {
                    let name = &caps[1];
                    if !NAME_DENYLIST.contains(name) {
                        results.push(Declaration {
                            name: name.to_string(),
                            line: find_line_number(lines, name),
                            kind: DeclarationKind::Function,
                        });
                    }
                }
            }
        }
        _ => {
            for caps in TYPED_SIGNATURE.captures_iter(code) {
                let name = &caps[1];
                if !NAME_DENYLIST.contains(name) {
                    results.push(Declaration {
                        name: name.to_string(),
                        line: find_line_number(lines, name),
                        kind: DeclarationKind::Function,
                    });
                }
            }
        }
    }

    unique_by_name(results)
}

/// First occurrence of each distinct name wins; discovery order preserved.
fn unique_by_name(items: Vec<Declaration>) -> Vec<Declaration> {
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|item| !item.name.is_empty() && seen.insert(item.name.clone()))
        .collect()
}

/// First line containing `token` as a substring, 1-based; defaults to 1.
fn find_line_number(lines: &[&str], token: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(token))
        .map(|index| index + 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::metrics::split_lines;

    #[test]
    fn test_extract_python_defs() {
        let code = "def add(a, b):\n    return a + b\n\ndef add(a, b):\n    pass";
        let lines = split_lines(code);
        let funcs = extract_functions(code, &lines, Language::Python);
        // duplicate name keeps the first occurrence only
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].name, "add");
        assert_eq!(funcs[0].line, 1);
        assert_eq!(funcs[0].kind, DeclarationKind::Function);
    }

    #[test]
    fn test_extract_javascript_shapes() {
        let code = "function first(x) {}\nconst second = (a, b) => a + b;\nthird = function () {};";
        let lines = split_lines(code);
        let funcs = extract_functions(code, &lines, Language::Javascript);
        let names: Vec<&str> = funcs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(funcs[1].line, 2);
    }

    #[test]
    fn test_typed_signature_with_denylist() {
        let code =
            "public static int compute(int n) {\n  if (n > 0) {\n    return n;\n  } else if (n < 0) {\n    return -n;\n  }\n}";
        let lines = split_lines(code);
        let funcs = extract_functions(code, &lines, Language::Java);
        // "else if (" is signature-shaped (word, space, name, paren); the
        // denylist drops the captured "if"
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].name, "compute");
    }

    #[test]
    fn test_extract_classes() {
        let lines = split_lines("class Point {\n}\nclass Point {\n}\nclass Grid:\n");
        let classes = extract_classes(&lines);
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Point", "Grid"]);
        assert_eq!(classes[0].line, 1);
        assert_eq!(classes[1].line, 5);
    }

    #[test]
    fn test_line_attribution_is_first_textual_occurrence() {
        // "second" appears in a comment before its declaration; the comment
        // line wins. Approximation, not the true declaration site.
        let code = "// calls second later\nfunction second() {}";
        let lines = split_lines(code);
        let funcs = extract_functions(code, &lines, Language::Javascript);
        assert_eq!(funcs[0].line, 1);
    }
}
