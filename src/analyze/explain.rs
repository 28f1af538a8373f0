//! Per-line explanation via an ordered first-match-wins cascade.
//!
//! Each line is classified independently; there is no cross-line state.
//! The rule order is load-bearing: specific shapes must run before the
//! general ones they overlap with (`else if` before bare `else`, the entry
//! point before generic signatures, output calls before input calls).

use lazy_static::lazy_static;
use regex::Regex;

use crate::analyze::declarations::NAME_DENYLIST;
use crate::language::Language;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"^(//|#|/\*|\*|\*/)").unwrap();
    static ref PACKAGE: Regex = Regex::new(r"^package\s+").unwrap();
    static ref IMPORT: Regex =
        Regex::new(r"\bimport\b|#include\b|\busing\s+namespace\b").unwrap();
    static ref CLASS_NAME: Regex = Regex::new(r"\bclass\s+([A-Za-z_][\w$]*)").unwrap();
    static ref JAVA_MAIN: Regex = Regex::new(r"public\s+static\s+void\s+main\s*\(").unwrap();
    static ref PY_DEF: Regex = Regex::new(r"^def\s+([A-Za-z_][\w$]*)\s*\(").unwrap();
    static ref JS_FUNCTION: Regex = Regex::new(r"\bfunction\s+([A-Za-z_][\w$]*)\s*\(").unwrap();
    static ref ARROW_FN: Regex =
        Regex::new(r"\b(?:const|let|var)\s+([A-Za-z_][\w$]*)\s*=\s*\([^)]*\)\s*=>").unwrap();
    static ref SIGNATURE: Regex = Regex::new(r"\b([A-Za-z_][\w$]*)\s*\([^;]*\)\s*\{").unwrap();
    static ref CONDITION: Regex = Regex::new(r"\b(if|else if|elif)\b").unwrap();
    static ref ELSE_BRANCH: Regex = Regex::new(r"\belse\b").unwrap();
    static ref FOR_LOOP: Regex = Regex::new(r"\bfor\b").unwrap();
    static ref WHILE_LOOP: Regex = Regex::new(r"\bwhile\b").unwrap();
    static ref SWITCH: Regex = Regex::new(r"\bswitch\b").unwrap();
    static ref CASE: Regex = Regex::new(r"\bcase\b").unwrap();
    static ref RETURN: Regex = Regex::new(r"\breturn\b").unwrap();
    static ref TRY: Regex = Regex::new(r"\btry\b").unwrap();
    static ref CATCH: Regex = Regex::new(r"\bcatch\b|\bexcept\b").unwrap();
    static ref FINALLY: Regex = Regex::new(r"\bfinally\b").unwrap();
    static ref THROW: Regex = Regex::new(r"\bthrow\b").unwrap();
    static ref OUTPUT_CALL: Regex =
        Regex::new(r"System\.out\.|console\.log|\bprint\(|\bprintf\(|\bcout\b").unwrap();
    static ref INPUT_CALL: Regex = Regex::new(r"\binput\(|\bscanf\(|\bcin\b").unwrap();
    static ref LONE_BRACE: Regex = Regex::new(r"^[{}]$").unwrap();
    static ref NEW_OBJECT: Regex = Regex::new(r"\bnew\s+[A-Za-z_][\w$]*").unwrap();
    static ref VAR_DECL: Regex = Regex::new(
        r"(?i)^(const|let|var|int|long|short|double|float|char|boolean|bool|string|String)\b"
    )
    .unwrap();
    static ref ASSIGNMENT: Regex = Regex::new(r"^[A-Za-z_][\w$]*\s*=").unwrap();
    static ref CALL_SHAPE: Regex = Regex::new(r"\w+\s*\(.*\)\s*;?$").unwrap();
}

/// Explain a single line of code with a fixed (optionally name-bearing)
/// sentence. Never fails; the generic fallback covers everything else.
pub fn explain_line(line: &str, language: Language) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return "Blank line to separate logical steps.".to_string();
    }

    if COMMENT.is_match(trimmed) {
        return "Comment explaining intent or notes for readers.".to_string();
    }

    if PACKAGE.is_match(trimmed) {
        return "Declares the package/namespace for this file.".to_string();
    }

    if IMPORT.is_match(trimmed) {
        return "Imports/includes external libraries needed for this program.".to_string();
    }

    if let Some(caps) = CLASS_NAME.captures(trimmed) {
        return format!(
            "Defines a class named {} to group data and behavior.",
            &caps[1]
        );
    }

    if JAVA_MAIN.is_match(trimmed) {
        return "Program entry point starts here (main method).".to_string();
    }

    if language == Language::Python {
        if let Some(caps) = PY_DEF.captures(trimmed) {
            return format!("Defines a function named {}.", &caps[1]);
        }
    }

    if let Some(caps) = JS_FUNCTION.captures(trimmed) {
        return format!("Defines a function named {}.", &caps[1]);
    }

    if let Some(caps) = ARROW_FN.captures(trimmed) {
        return format!("Defines an arrow function named {}.", &caps[1]);
    }

    if let Some(caps) = SIGNATURE.captures(trimmed) {
        if !NAME_DENYLIST.contains(&caps[1]) {
            return format!("Begins a function or method named {}.", &caps[1]);
        }
    }

    if CONDITION.is_match(trimmed) {
        return "Checks a condition to choose which path to run.".to_string();
    }

    if ELSE_BRANCH.is_match(trimmed) {
        return "Fallback branch when previous conditions are false.".to_string();
    }

    if FOR_LOOP.is_match(trimmed) {
        return "Starts a loop that repeats a set of steps.".to_string();
    }

    if WHILE_LOOP.is_match(trimmed) {
        return "Repeats the block while a condition stays true.".to_string();
    }

    if SWITCH.is_match(trimmed) {
        return "Starts a multi-branch selection using switch.".to_string();
    }

    if CASE.is_match(trimmed) {
        return "Defines a specific switch case to match.".to_string();
    }

    if RETURN.is_match(trimmed) {
        return "Returns a value and exits the current function.".to_string();
    }

    if TRY.is_match(trimmed) {
        return "Starts a protected block to catch errors.".to_string();
    }

    if CATCH.is_match(trimmed) {
        return "Handles an error or exception if one occurs.".to_string();
    }

    if FINALLY.is_match(trimmed) {
        return "Runs cleanup code after try/catch.".to_string();
    }

    if THROW.is_match(trimmed) {
        return "Throws an error/exception intentionally.".to_string();
    }

    if OUTPUT_CALL.is_match(trimmed) {
        return "Outputs information to the console or screen.".to_string();
    }

    if INPUT_CALL.is_match(trimmed) {
        return "Reads input from the user or standard input.".to_string();
    }

    if LONE_BRACE.is_match(trimmed) {
        return if trimmed == "{" {
            "Opens a new block of code.".to_string()
        } else {
            "Closes the current block.".to_string()
        };
    }

    if NEW_OBJECT.is_match(trimmed) {
        return "Creates a new object/instance.".to_string();
    }

    if VAR_DECL.is_match(trimmed) {
        return "Declares a variable and possibly assigns an initial value.".to_string();
    }

    if ASSIGNMENT.is_match(trimmed) {
        return "Assigns or updates a variable with a value.".to_string();
    }

    if CALL_SHAPE.is_match(trimmed) {
        return "Calls a function or method to perform an action.".to_string();
    }

    "Executes this line of logic.".to_string()
}
