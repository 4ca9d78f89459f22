//! One-shot and streaming hashing example.
//!
//! Run with:
//!     cargo run --example hash_bytes

use xxhrs::{Xxh32, Xxh64, sum32, sum64};

fn main() {
    let inputs: [&[u8]; 3] = [
        b"",
        b"hello world",
        b"the quick brown fox jumps over the lazy dog",
    ];

    println!("One-shot digests:\n");
    for input in inputs {
        println!(
            "xxh32={:08x} xxh64={:016x} {:?}",
            sum32(input, 0),
            sum64(input, 0),
            String::from_utf8_lossy(input)
        );
    }

    // Streaming: same digest regardless of how the input is split
    let mut h32 = Xxh32::new();
    let mut h64 = Xxh64::new();
    for word in ["the quick", " brown fox", " jumps over", " the lazy dog"] {
        h32.update(word.as_bytes());
        h64.update(word.as_bytes());
        println!(
            "\nafter {:>3} bytes: xxh32={} xxh64={}",
            h64.total_len(),
            h32.finalize(),
            h64.finalize()
        );
    }
}
