//! Append trace.
//! This example appends values into a dynamic array and prints every
//! capacity change, then removes a batch of elements from the front.
use clap::Parser;
use dsa_array::{DynamicArray, SortOrder};
use std::time::Instant;

fn main() {
    let args = Args::parse();
    let mut arr = match DynamicArray::with_capacity(args.init_cap) {
        Ok(arr) => arr,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let start = Instant::now();
    let mut cap = arr.capacity();
    for v in 0..args.count {
        arr.append(v);
        if arr.capacity() != cap {
            if args.verbose {
                println!(
                    "size {:>10} capacity {:>10} -> {:>10}",
                    arr.size(),
                    cap,
                    arr.capacity()
                );
            }
            cap = arr.capacity();
        }
    }
    let dur = start.elapsed();
    println!(
        "{:?} appends cost {:?} microseconds, final capacity {}",
        arr.size(),
        dur.as_micros(),
        arr.capacity()
    );

    let n = args.remove.min(arr.size());
    let indices: Vec<isize> = (0..n as isize).collect();
    let start = Instant::now();
    let removed = arr.bulk_remove(&indices).expect("indices are within size");
    println!(
        "{:?} removals cost {:?} microseconds, size {} capacity {}",
        removed.len(),
        start.elapsed().as_micros(),
        arr.size(),
        arr.capacity()
    );

    if args.sort {
        arr.sort(SortOrder::Descending);
        if let Ok(v) = arr.get(0) {
            println!("max value {}", v);
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// initial capacity of the array, negative value is rejected
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    init_cap: isize,

    /// number of values to append
    #[arg(short, long, default_value = "1000000")]
    count: usize,

    /// number of elements to remove from the front
    #[arg(short, long, default_value = "1000")]
    remove: usize,

    /// whether to sort descending at the end
    #[arg(short, long)]
    sort: bool,

    /// whether to print each capacity change
    #[arg(short, long)]
    verbose: bool,
}
