// Binary search benchmark over consecutive ascending integers, then a
// best-case (middle) vs worst-case (last) comparison at the largest size.

use algo_bench::generate;
use algo_bench::measure;
use algo_bench::report;
use algo_bench::search::binary_search;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn main() {
    report::banner("Binary Search");
    report::header(&[
        ("size (n)", 15),
        ("time (s)", 20),
        ("memory (KB)", 20),
        ("index", 15),
    ]);

    for &n in &SIZES {
        let arr = match generate::ascending(n) {
            Ok(arr) => arr,
            Err(err) => {
                report::skip(&err);
                continue;
            }
        };

        // last element: the lookup that needs the full log2(n) halvings
        let target = (n - 1) as i32;
        let (found, elapsed) = measure::time(|| binary_search(&arr, target));
        let mem = measure::peak_rss_kb();

        println!(
            "{:<15} {:<20} {:<20} {:<15}",
            n,
            report::seconds(elapsed),
            report::memory_kb(mem),
            report::found_index(found),
        );
    }

    compare_cases();
}

fn compare_cases() {
    const N: usize = 100_000;

    println!();
    report::banner("Best vs worst case");

    let arr = match generate::ascending(N) {
        Ok(arr) => arr,
        Err(err) => {
            report::skip(&err);
            return;
        }
    };

    let (best, best_elapsed) = measure::time(|| binary_search(&arr, (N / 2) as i32));
    let (worst, worst_elapsed) = measure::time(|| binary_search(&arr, (N - 1) as i32));

    println!(
        "best case (middle): {:?} (index: {})",
        best_elapsed,
        report::found_index(best),
    );
    println!(
        "worst case (last):  {:?} (index: {})",
        worst_elapsed,
        report::found_index(worst),
    );
}
