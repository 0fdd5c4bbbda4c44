//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: the fixed demo walkthrough, single
//! value checks, parallel range scanning, prime generation, the RSA
//! walkthrough, and rayon configuration.

use anyhow::Result;
use primecert::generate::random_prime;
use primecert::rsa::RsaKeyPair;
use primecert::{classify, is_probable_prime, Verdict};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

// ── Demo Walkthrough ────────────────────────────────────────────

/// The walkthrough values: a small prime, the Carmichael numbers 561 and
/// 1105, the prime factor 6700417 of F5, the Mersenne prime 2^61 - 1, and
/// the largest prime below 2^64.
const DEMO_VALUES: [u64; 6] = [
    17,
    561,
    1105,
    6700417,
    2305843009213693951,
    18446744073709551557,
];

/// Print the fixed demonstration values, one verdict per line.
pub fn run_demo() -> Result<()> {
    for &n in DEMO_VALUES.iter() {
        println!("{} is prime? {}", n, is_probable_prime(n));
    }
    Ok(())
}

// ── Single-Value Checks ─────────────────────────────────────────

#[derive(Serialize)]
struct CheckReport {
    n: u64,
    prime: bool,
    verdict: Verdict,
}

/// Check each value, printing either the demo-style line or one JSON
/// object per value with the full verdict.
pub fn run_check(values: &[u64], json: bool) -> Result<()> {
    for &n in values {
        let verdict = classify(n);
        if json {
            let report = CheckReport {
                n,
                prime: verdict.is_prime(),
                verdict,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{} is prime? {}", n, verdict.is_prime());
        }
    }
    Ok(())
}

// ── Range Scanning ──────────────────────────────────────────────

/// Candidates handed to rayon per batch.
const BLOCK_SIZE: u64 = 65_536;

/// Scan the inclusive range [start, end] for primes, testing each block in
/// parallel and printing findings in ascending order.
pub fn run_range(start: u64, end: u64, count_only: bool) -> Result<()> {
    if end < start {
        anyhow::bail!("--end must be at least --start (got {}..={})", start, end);
    }
    info!(start, end, "scanning range for primes");
    let scan_start = Instant::now();

    let mut found: u64 = 0;
    let mut block_start = start;
    loop {
        let block_end = block_start.saturating_add(BLOCK_SIZE - 1).min(end);

        let primes: Vec<u64> = (block_start..=block_end)
            .into_par_iter()
            .filter(|&n| is_probable_prime(n))
            .collect();

        found += primes.len() as u64;
        if !count_only {
            for p in primes {
                println!("{}", p);
            }
        }

        // end may be u64::MAX, so stop before stepping past it.
        if block_end == end {
            break;
        }
        block_start = block_end + 1;
    }

    info!(
        primes = found,
        elapsed_secs = scan_start.elapsed().as_secs_f64(),
        "range scan complete"
    );
    if count_only {
        println!("{}", found);
    }
    Ok(())
}

// ── Prime Generation ────────────────────────────────────────────

/// Draw and print random primes of the requested bit length.
pub fn run_generate(bits: u32, count: u32) -> Result<()> {
    if !(2..=64).contains(&bits) {
        anyhow::bail!("--bits must be between 2 and 64 (got {})", bits);
    }
    let mut rng = rand::rng();
    for _ in 0..count {
        match random_prime(&mut rng, bits) {
            Some(p) => println!("{}", p),
            None => anyhow::bail!("no {}-bit prime could be drawn", bits),
        }
    }
    Ok(())
}

// ── RSA Walkthrough ─────────────────────────────────────────────

/// Generate a keypair and walk a message through encrypt and decrypt,
/// printing each step.
pub fn run_rsa_demo(bits: u32, message: u64) -> Result<()> {
    if !(32..=64).contains(&bits) {
        anyhow::bail!("--bits must be between 32 and 64 (got {})", bits);
    }
    let mut rng = rand::rng();
    let kp = RsaKeyPair::generate(&mut rng, bits)
        .ok_or_else(|| anyhow::anyhow!("keypair generation failed for {} bits", bits))?;
    info!(n = kp.n, bits, "generated RSA keypair");

    println!("Public key: ({}, {})", kp.n, kp.e);
    println!("Private key: ({}, {})", kp.n, kp.d);
    let c = kp.encrypt(message).ok_or_else(|| {
        anyhow::anyhow!(
            "message {} is out of range for modulus {} (try more --bits)",
            message,
            kp.n
        )
    })?;
    println!("Encrypted: {}", c);
    println!("Decrypted: {}", kp.decrypt(c));
    Ok(())
}

// ── Rayon Configuration ─────────────────────────────────────────

/// Configure the rayon global thread pool with an optional thread count.
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        }
    }
}
