//! Async hashing with parallel streams example.
//!
//! Each stream gets its own hasher and its own task; engines are never
//! shared between tasks.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use tokio_util::compat::TokioAsyncReadCompatExt;
use xxhrs::{Xxh64, digest_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create multiple data streams
    let streams: Vec<Vec<u8>> = vec![
        (0..50_000).map(|i| (i % 256) as u8).collect(),
        (50_000..100_000).map(|i| (i % 256) as u8).collect(),
        (100_000..150_000).map(|i| (i % 256) as u8).collect(),
    ];

    println!("Hashing {} streams concurrently...\n", streams.len());

    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| {
            tokio::spawn(async move {
                let len = data.len();
                let reader = std::io::Cursor::new(data).compat();
                let digest = digest_async(Xxh64::new(), reader).await?;
                Ok::<_, xxhrs::XxhError>((stream_id, len, digest))
            })
        })
        .collect();

    for handle in handles {
        let (stream_id, len, digest) = handle.await??;
        println!("Stream {}: {} bytes, xxh64={}", stream_id, len, digest);
    }

    // Files work the same way through the compat layer
    let file = tokio::fs::File::open("Cargo.toml").await?;
    let digest = digest_async(Xxh64::new(), file.compat()).await?;
    println!("\n{}  Cargo.toml", digest);

    Ok(())
}
