//! Codesense - beginner-friendly static code explainer.
//!
//! Codesense takes a snippet of source text and an optional language hint,
//! classifies the language, extracts coarse structural facts (functions,
//! classes, loops, conditionals, imports, I/O, error handling, recursion),
//! estimates algorithmic complexity heuristically, and produces
//! human-readable artifacts: a summary, per-line explanations, an
//! execution-flow outline, issues, and suggestions.
//!
//! # Architecture
//!
//! The core is regex-driven and deliberately avoids a real parser:
//!
//! - `language`: language tags and the detection signature cascade
//! - `analyze`: the analysis pipeline (metrics, features, declarations,
//!   structure, complexity, narrative, per-line explanations)
//! - `samples`: built-in demo snippets per language
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line interface
//!
//! # Contract
//!
//! [`analyze::analyze`] is pure, synchronous, and infallible: it produces a
//! best-effort result for any input, and identical input always yields an
//! identical result. All structural outputs are heuristic approximations
//! with documented false-positive behavior; callers should present them as
//! a friendly overview, not verified facts.

pub mod analyze;
pub mod cli;
pub mod language;
pub mod report;
pub mod samples;

pub use analyze::{
    analyze, AnalysisResult, ComplexityEstimate, Construct, Declaration, DeclarationKind,
    FeatureCounts, LineExplanation, LineMetrics,
};
pub use language::{Language, LanguageHint};
pub use report::FileAnalysis;
