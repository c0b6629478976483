// Merge sort benchmark: random fill per size, one timed run, table row,
// then a best/worst/average comparison at the largest size.

use algo_bench::generate;
use algo_bench::measure;
use algo_bench::report;
use algo_bench::sort::{is_sorted, merge_sort};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const MODULUS: i32 = 10_000;

fn main() {
    report::banner("Merge Sort");
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

        let (_, elapsed) = measure::time(|| merge_sort(&mut arr));
        let mem = measure::peak_rss_kb();

        println!(
            "{:<15} {:<20} {:<20} {:<15}",
            n,
            report::seconds(elapsed),
            report::memory_kb(mem),
            report::verdict(is_sorted(&arr)),
        );
    }

    compare_cases();
}

// O(n log n) regardless of input shape; the three cases should land close.
fn compare_cases() {
    const N: usize = 100_000;

    println!();
    report::banner("Best vs worst vs average case");
    println!("size: {} elements", N);

    let cases = [
        ("best case (sorted)", generate::ascending(N)),
        ("worst case (reversed)", generate::descending(N)),
        ("average case (random)", generate::random(N, MODULUS)),
    ];

    for (label, buf) in cases {
        match buf {
            Ok(mut arr) => {
                let (_, elapsed) = measure::time(|| merge_sort(&mut arr));
                println!("{:<24} {} s", label, report::seconds(elapsed));
            }
            Err(err) => report::skip(&err),
        }
    }
}
