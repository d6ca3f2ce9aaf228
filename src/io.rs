//! Input adapter reading comma-delimited numbers from a text file
//!
//! Peripheral collaborator for the command surface: tokenizes across lines,
//! parses each token best-effort and silently discards anything that is not
//! a number. The engines impose their own length constraints on whatever
//! sequence comes out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads every parseable number from a comma-delimited text file, truncated
/// to `i32`.
///
/// Tokens are parsed as floating point first and then narrowed, so `3.7`
/// yields `3`. Unparseable tokens (including empty ones) are skipped rather
/// than reported; the caller only sees an error when the file itself cannot
/// be read.
pub fn read_values<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| format!("Failed to read line: {}", e))?;
        for token in line.split(',') {
            if let Ok(number) = token.trim().parse::<f64>() {
                values.push(number as i32);
            }
        }
    }

    Ok(values)
}
