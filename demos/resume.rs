//! Resumable hashing example.
//!
//! Hashes half of a buffer, persists the engine state, then restores it in
//! a fresh hasher and finishes the job.
//!
//! Run with:
//!     cargo run --example resume

use xxhrs::{Hasher, Xxh64, sum64};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = (0..100_000).map(|i| (i * 7 + 13) as u8).collect();
    let (head, tail) = data.split_at(40_000);

    let mut hasher = Xxh64::with_seed(2024);
    hasher.update(head);

    let state = hasher.marshal_state();
    println!(
        "Saved state after {} bytes ({} byte record): {}",
        hasher.total_len(),
        state.len(),
        hex::encode(&state[..16])
    );

    // Later, possibly in another process
    let mut resumed = Hasher::from_state(&state)?;
    println!("Restored {} hasher, seed {}", resumed.algorithm(), resumed.seed());
    resumed.update(tail);

    let digest = resumed.finalize();
    println!("Resumed digest:    {}", digest);
    println!("Continuous digest: {:016x}", sum64(&data, 2024));
    assert_eq!(digest.to_u64(), sum64(&data, 2024));

    Ok(())
}
