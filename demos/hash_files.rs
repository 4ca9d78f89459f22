//! Checksum tool example.
//!
//! Prints one `<hex>  <path>` line per file, like `xxhsum`. A file that
//! cannot be read is reported and skipped.
//!
//! Run with:
//!     cargo run --example hash_files -- [--bits 32|64] [--seed N] FILE...

use std::env;
use std::fs::File;
use std::process::ExitCode;

use xxhrs::{Algorithm, HashConfig, Hasher, XxhError};

fn hash_file(config: HashConfig, path: &str) -> Result<xxhrs::AnyDigest, XxhError> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new(config)?;
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let mut config = HashConfig::default();
    let mut paths = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bits" => {
                let bits: u32 = args.next().ok_or("--bits needs a value")?.parse()?;
                config = config.with_algorithm(Algorithm::from_bits(bits)?);
            }
            "--seed" => {
                let seed: u64 = args.next().ok_or("--seed needs a value")?.parse()?;
                config = config.with_seed(seed);
            }
            _ => paths.push(arg),
        }
    }
    config.validate()?;

    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    let mut failed = false;
    for path in &paths {
        match hash_file(config, path) {
            Ok(digest) => println!("{}  {}", digest, path),
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
