//! Input fixtures for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Scenario 1: duplicates and negatives only.
pub const SCENARIO_DUPLICATES: &str = "5\n14\n5\n-9\n62\n-1\n-9\n-9\n";
pub const SCENARIO_DUPLICATES_EXPECTED: &str = "-9\n-1\n5\n14\n62\n";

/// Scenario 2: blank, two-value and floating point lines mixed with integers.
pub const SCENARIO_MIXED: &str = concat!(
    "7\n",
    "   \n",
    "3 4\n",
    "2.5\n",
    "-12\n",
    "\t7\t\n",
    "abc\n",
    "+8\n",
    "--3\n",
    "0\n",
    "-12\n",
    " 100 \n",
);
pub const SCENARIO_MIXED_EXPECTED: &str = "-12\n0\n7\n100\n";

/// Same content as scenario 1 with Windows line endings.
pub const SCENARIO_CRLF: &str = "5\r\n14\r\n5\r\n-9\r\n62\r\n-1\r\n-9\r\n-9\r\n";

/// Deterministic pseudo-random lines: integers with repeats plus some junk lines.
pub fn generated_lines(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let v = ((state >> 33) % 4001) as i64 - 2000;
        let line = match i % 17 {
            3 => String::new(),
            5 => format!("{} {}", v, v + 1),
            11 => format!("{}.5", v),
            13 => format!("  {}\t", v),
            _ => v.to_string(),
        };
        out.push(line);
    }
    out
}

/// Write `content` to `dir/name` and return the path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
