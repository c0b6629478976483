// Linear search benchmark. The target is whatever value sits at the end
// of the random fill, so the scan has to get near the tail to match the
// worst case (an earlier duplicate can still cut it short).

use algo_bench::generate;
use algo_bench::measure;
use algo_bench::report;
use algo_bench::search::linear_search;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const MODULUS: i32 = 1_000;

fn main() {
    report::banner("Linear Search");
    report::header(&[
        ("size (n)", 15),
        ("time (s)", 20),
        ("memory (KB)", 20),
        ("index", 15),
    ]);

    for &n in &SIZES {
        let arr = match generate::random(n, MODULUS) {
            Ok(arr) => arr,
            Err(err) => {
                report::skip(&err);
                continue;
            }
        };

        let target = arr[n - 1];
        let (found, elapsed) = measure::time(|| linear_search(&arr, target));
        let mem = measure::peak_rss_kb();

        println!(
            "{:<15} {:<20} {:<20} {:<15}",
            n,
            report::seconds(elapsed),
            report::memory_kb(mem),
            report::found_index(found),
        );
    }
}
