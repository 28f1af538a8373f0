//! Coarse categorical complexity classification.
//!
//! This is a heuristic, not a cost model: recursion takes priority over any
//! computed loop depth, and loop depth maps straight to a polynomial order.

use serde::{Deserialize, Serialize};

/// Human-readable time/space classification strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityEstimate {
    pub time: String,
    pub space: String,
}

/// Classify from the loop-depth estimate and the recursion flag.
pub fn estimate(loop_depth: usize, recursion: bool) -> ComplexityEstimate {
    if recursion {
        return ComplexityEstimate {
            time: "Potentially recursive (check base case and branching).".to_string(),
            space: "Uses call stack proportional to depth.".to_string(),
        };
    }
    let (time, space) = match loop_depth {
        0 => ("O(1)", "O(1)"),
        1 => ("O(n)", "O(1)"),
        2 => ("O(n²)", "O(1)"),
        _ => ("O(n^k) with k ≥ 3", "O(1)"),
    };
    ComplexityEstimate {
        time: time.to_string(),
        space: space.to_string(),
    }
}
