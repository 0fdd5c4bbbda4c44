pub mod arith;
pub mod generate;
pub mod miller_rabin;
pub mod montgomery;
pub mod rsa;
pub mod verdict;

pub use miller_rabin::{classify, is_probable_prime, WITNESS_BASES};
pub use verdict::Verdict;

/// Small primes for the trial-division stage: every prime below 40.
pub const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// The smallest prime below 40 dividing n, if any.
///
/// Returns Some(n) when n is itself one of the small primes, and Some(2)
/// for 0 (every prime divides 0). Returns None when n has no factor in the
/// table, which for n > 1 means the witness loop has to decide.
pub fn small_factor(n: u64) -> Option<u64> {
    SMALL_PRIMES.iter().copied().find(|&p| n % p == 0)
}
