// Fixed-width table output shared by the benchmark drivers.

use crate::generate::AllocError;
use colored::Colorize;
use std::time::Duration;

/// Program banner, bolded, with a blank line after it.
pub fn banner(title: &str) {
    println!("{}\n", format!("=== {} ===", title).bold());
}

/// Left-aligned column headers followed by a dashed rule sized to them.
pub fn header(columns: &[(&str, usize)]) {
    let mut line = String::new();
    for &(name, width) in columns {
        line.push_str(&format!("{:<width$} ", name));
    }
    println!("{}", line.trim_end());

    let total: usize = columns.iter().map(|&(_, width)| width + 1).sum();
    println!("{}", "-".repeat(total.saturating_sub(1)));
}

/// Time column: seconds with microsecond precision.
pub fn seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Memory column: kilobytes, or `-` when the probe has no reading.
pub fn memory_kb(kb: Option<u64>) -> String {
    kb.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Search result column: the found index, or the -1 sentinel.
pub fn found_index(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}

/// Sorted-verdict column.
pub fn verdict(ok: bool) -> String {
    if ok {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

/// Report an allocation failure for a size that will be skipped.
pub fn skip(err: &AllocError) {
    println!("{} {}", "skipped:".yellow(), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_has_six_decimals() {
        assert_eq!(seconds(Duration::from_millis(1_500)), "1.500000");
        assert_eq!(seconds(Duration::ZERO), "0.000000");
    }

    #[test]
    fn memory_column_falls_back_to_dash() {
        assert_eq!(memory_kb(Some(2_048)), "2048");
        assert_eq!(memory_kb(None), "-");
    }

    #[test]
    fn found_index_uses_sentinel() {
        assert_eq!(found_index(Some(7)), "7");
        assert_eq!(found_index(None), "-1");
    }

    #[test]
    fn verdict_names_the_outcome() {
        assert!(verdict(true).contains("yes"));
        assert!(verdict(false).contains("no"));
    }
}
