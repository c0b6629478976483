// Naive recursive Fibonacci benchmark. No array to allocate here; the
// cost lives entirely in the call tree, so the table adds a call-count
// column and the closing section projects how fast that tree grows.

use algo_bench::fib;
use algo_bench::measure;
use algo_bench::report;

const VALUES: [u32; 5] = [10, 20, 30, 35, 40];

fn main() {
    report::banner("Naive Recursive Fibonacci");
    report::header(&[
        ("n", 10),
        ("time (s)", 20),
        ("memory (KB)", 20),
        ("calls", 20),
        ("result", 15),
    ]);

    for &n in &VALUES {
        let ((value, calls), elapsed) = measure::time(|| fib::fib_counted(n));
        let mem = measure::peak_rss_kb();

        println!(
            "{:<10} {:<20} {:<20} {:<20} {:<15}",
            n,
            report::seconds(elapsed),
            report::memory_kb(mem),
            calls,
            value,
        );
    }

    growth_projection();
}

// Time one mid-sized run, then extrapolate by exact call counts instead
// of running the larger ones.
fn growth_projection() {
    const BASELINE: u32 = 30;

    println!();
    report::banner("Exponential growth");
    report::header(&[("n", 10), ("calls", 20), ("time", 25)]);

    let ((_, calls), elapsed) = measure::time(|| fib::fib_counted(BASELINE));
    let per_call = elapsed.as_secs_f64() / calls as f64;

    println!(
        "{:<10} {:<20} {:<25}",
        BASELINE,
        calls,
        format!("{} s (measured)", report::seconds(elapsed)),
    );

    for n in [35, 40, 45] {
        let projected = fib::call_count(n) as f64 * per_call;
        let display = if projected >= 60.0 {
            format!("{:.1} min (projected)", projected / 60.0)
        } else {
            format!("{:.3} s (projected)", projected)
        };
        println!("{:<10} {:<20} {:<25}", n, fib::call_count(n), display);
    }

    let (value, elapsed) = measure::time(|| fib::fib_iter(40));
    println!();
    println!(
        "iterative fib(40) = {} in {:?} -- memoize or iterate before reaching for recursion",
        value, elapsed,
    );
}
