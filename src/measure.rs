// Best-effort instrumentation. The memory reading is a Linux-only
// diagnostic, not a portable contract.

use std::time::{Duration, Instant};

/// Run `f` once, returning its result and the elapsed wall-clock time.
pub fn time<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Peak resident set size in kilobytes, read from the `VmHWM` line of
/// /proc/self/status. `None` on other platforms or if the line is
/// missing.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        status
            .lines()
            .find(|line| line.starts_with("VmHWM:"))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|kb| kb.parse().ok())
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn time_returns_result_and_elapsed() {
        let (value, elapsed) = time(|| {
            thread::sleep(Duration::from_millis(10));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn peak_rss_reads_something() {
        let kb = peak_rss_kb().unwrap();
        assert!(kb > 0);
    }
}
