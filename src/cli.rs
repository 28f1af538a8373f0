//! Command-line interface for codesense.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analyze;
use crate::language::{Language, LanguageHint};
use crate::report::{self, FileAnalysis};
use crate::samples;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Beginner-friendly static code explainer.
///
/// Codesense takes a snippet of source code, guesses the language, and
/// produces a plain-English breakdown: summary, structure outline,
/// heuristic complexity estimate, issues, suggestions, and a line-by-line
/// explanation. It is regex-driven and best-effort by design; the output
/// is an approximation, not a verified parse.
#[derive(Parser)]
#[command(name = "codesense")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explain a file, a directory of source files, or stdin ("-")
    #[command(visible_alias = "analyze")]
    Explain(ExplainArgs),
    /// Print a built-in demo snippet for a language
    Sample(SampleArgs),
}

/// Arguments for the explain command.
#[derive(Parser)]
pub struct ExplainArgs {
    /// Path to explain (file or directory), or "-" for stdin
    pub path: PathBuf,

    /// Language hint: auto, java, python, c, cpp, javascript, or other
    #[arg(short, long, default_value = "auto")]
    pub language: LanguageHint,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Skip the per-line explanation section in pretty output
    #[arg(long)]
    pub no_lines: bool,
}

/// Arguments for the sample command.
#[derive(Parser)]
pub struct SampleArgs {
    /// Language of the sample to print
    pub language: Option<String>,

    /// List available samples
    #[arg(short, long)]
    pub list: bool,

    /// Run the analyzer on the sample instead of just printing it
    #[arg(short, long)]
    pub explain: bool,
}

/// File extensions collected when explaining a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "java", "py", "c", "h", "cpp", "cc", "cxx", "hpp", "hh", "js", "mjs",
];

/// Collect source files under a directory, skipping hidden and vendored
/// trees.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            if e.file_type().is_dir()
                && (name == "vendor" || name == "node_modules" || name == "target" || name == "build")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if SUPPORTED_EXTENSIONS.contains(&ext) {
                files.push(path.to_path_buf());
            }
        }
    }

    // Deterministic output order
    files.sort();
    Ok(files)
}

/// Pick the hint for one file: an explicit CLI hint wins, otherwise the
/// extension decides, otherwise auto-detection.
fn hint_for_file(path: &Path, cli_hint: LanguageHint) -> LanguageHint {
    if let LanguageHint::Explicit(_) = cli_hint {
        return cli_hint;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        .map(LanguageHint::Explicit)
        .unwrap_or(LanguageHint::Auto)
}

/// Run the explain command.
pub fn run_explain(args: &ExplainArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Stdin
    if args.path == Path::new("-") {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        let analyses = vec![FileAnalysis {
            path: "-".to_string(),
            result: analyze::analyze(&code, args.language),
        }];
        return output(&analyses, args);
    }

    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = if metadata.is_dir() {
        let files = collect_files(&args.path)?;
        if files.is_empty() {
            eprintln!("Warning: no source files found under {:?}", args.path);
            return Ok(EXIT_SUCCESS);
        }
        files
    } else {
        vec![args.path.clone()]
    };

    // Each analysis is pure and independent, so the files can be processed
    // in parallel; collection preserves input order.
    let analyses: Vec<FileAnalysis> = files
        .par_iter()
        .map(|path| -> anyhow::Result<FileAnalysis> {
            let code = std::fs::read_to_string(path)?;
            let hint = hint_for_file(path, args.language);
            Ok(FileAnalysis {
                path: path.to_string_lossy().to_string(),
                result: analyze::analyze(&code, hint),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    output(&analyses, args)
}

fn output(analyses: &[FileAnalysis], args: &ExplainArgs) -> anyhow::Result<i32> {
    match args.format.as_str() {
        "json" => report::write_json(analyses)?,
        _ => {
            for analysis in analyses {
                report::write_pretty(analysis, !args.no_lines);
            }
        }
    }
    Ok(EXIT_SUCCESS)
}

/// Run the sample command.
pub fn run_sample(args: &SampleArgs) -> anyhow::Result<i32> {
    if args.list {
        return list_samples();
    }

    let Some(name) = &args.language else {
        eprintln!("Error: no language given");
        eprintln!("Run 'codesense sample --list' to see available samples");
        return Ok(EXIT_ERROR);
    };

    let language = match Language::parse(&name.to_lowercase()) {
        Some(l) => l,
        None => {
            eprintln!("Error: unknown language {:?}", name);
            eprintln!("Run 'codesense sample --list' to see available samples");
            return Ok(EXIT_ERROR);
        }
    };

    let Some(sample) = samples::for_language(language) else {
        eprintln!("Error: no sample available for {:?}", language.as_str());
        return Ok(EXIT_ERROR);
    };

    if args.explain {
        let analysis = FileAnalysis {
            path: format!("sample:{}", language.as_str()),
            result: analyze::analyze(sample.content, LanguageHint::Explicit(language)),
        };
        report::write_pretty(&analysis, true);
    } else {
        println!("{}", sample.content);
    }

    Ok(EXIT_SUCCESS)
}

/// List available samples.
fn list_samples() -> anyhow::Result<i32> {
    println!("Available samples:");
    println!();

    for sample in samples::SAMPLES {
        println!(
            "  {:<12} {}",
            sample.language.as_str(),
            sample.description
        );
    }

    println!();
    println!("Usage:");
    println!("  codesense sample <language> [--explain]");

    Ok(EXIT_SUCCESS)
}
