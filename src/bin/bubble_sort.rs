// Bubble sort benchmark: random fill per size, one timed run, table row.
// The largest size takes a while; that is the point of the exercise.

use algo_bench::generate;
use algo_bench::measure;
use algo_bench::report;
use algo_bench::sort::{bubble_sort, is_sorted};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const MODULUS: i32 = 10_000;

fn main() {
    report::banner("Bubble Sort");
    report::header(&[
        ("size (n)", 15),
        ("time (s)", 20),
        ("memory (KB)", 20),
        ("sorted", 15),
    ]);

    for &n in &SIZES {
        let mut arr = match generate::random(n, MODULUS) {
            Ok(arr) => arr,
            Err(err) => {
                report::skip(&err);
                continue;
            }
        };

        let (_, elapsed) = measure::time(|| bubble_sort(&mut arr));
        let mem = measure::peak_rss_kb();

        println!(
            "{:<15} {:<20} {:<20} {:<15}",
            n,
            report::seconds(elapsed),
            report::memory_kb(mem),
            report::verdict(is_sorted(&arr)),
        );
    }

    early_exit_demo();
}

// The early-exit property in action: sorted input costs exactly one pass.
fn early_exit_demo() {
    const N: usize = 100_000;

    println!();
    report::banner("Early exit on sorted input");

    match generate::ascending(N) {
        Ok(mut arr) => {
            let (stats, elapsed) = measure::time(|| bubble_sort(&mut arr));
            println!(
                "{} elements already in order: {} pass(es), {} swaps, {:?}",
                N, stats.passes, stats.swaps, elapsed,
            );
        }
        Err(err) => report::skip(&err),
    }
}
