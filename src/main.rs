use blockscan::{join, read_values, Compaction, PrefixScan};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Input .csv file not provided");
        return;
    }

    let values = match read_values(&args[1]) {
        Ok(values) => values,
        Err(_) => {
            eprintln!("Input .csv file does not exist");
            return;
        }
    };

    // Running total of the raw input
    let scan = PrefixScan::new(&values, |a, b| a + b);
    println!("{}", join(&scan.compute_parallel(), ", "));

    // Non-zero values of the same input, with their original indices
    let compaction = Compaction::new(&values);
    let compacted = compaction.compute_parallel();
    println!("{}", join(&compacted.values, ", "));
    println!("{}", join(&compacted.coordinates, ", "));
}
