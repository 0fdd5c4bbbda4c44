//! # Miller-Rabin — Deterministic 64-Bit Primality
//!
//! The strong-pseudoprime test with a fixed witness set, arranged as a
//! three-stage pipeline:
//!
//! 1. **Range check** dispatching n < 2 immediately.
//! 2. **Trial division** by every prime below 40, which settles all small
//!    inputs and cheaply strips composites with small factors.
//! 3. **Witness loop** over the fixed bases {2, 3, 5, 7, 11, 13, 17},
//!    replacing the classical random sampling with a deterministic sweep.
//!
//! Every verdict carries its evidence (see [`Verdict`]): the dividing small
//! prime, or the base that witnessed compositeness.
//!
//! ## Algorithm: Strong Pseudoprime Test
//!
//! For odd n, write n - 1 = d * 2^r with d odd. A base a passes if
//! a^d = 1 (mod n) or a^(d * 2^j) = n - 1 (mod n) for some j < r; otherwise
//! a is a witness and n is composite. For prime n every base passes, so a
//! single failing base is a proof of compositeness. The exponentiations run
//! on plain u128-widened arithmetic ([`crate::arith::pow_mod`]), which
//! covers the full u64 range without a precomputed context.
//!
//! ## References
//!
//! - Gary L. Miller, "Riemann's hypothesis and tests for primality",
//!   Journal of Computer and System Sciences 13 (1976), 300-317.
//! - Michael O. Rabin, "Probabilistic algorithm for testing primality",
//!   Journal of Number Theory 12 (1980), 128-138.
//! - Gerhard Jaeschke, "On strong pseudoprimes to several bases",
//!   Mathematics of Computation 61 (1993), 915-926.

use crate::arith::{mul_mod, pow_mod};
use crate::small_factor;
use crate::verdict::Verdict;

/// The fixed Miller-Rabin witness bases, tried in ascending order.
pub const WITNESS_BASES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Split an even number as d * 2^r with d odd.
#[inline]
fn decompose(n_minus_one: u64) -> (u64, u32) {
    debug_assert!(n_minus_one > 0, "cannot decompose zero");
    let r = n_minus_one.trailing_zeros();
    (n_minus_one >> r, r)
}

/// One strong-pseudoprime round: does base a fail to witness n composite?
///
/// n must be odd with n - 1 = d * 2^r, d odd, and 1 < a < n.
fn passes_witness(n: u64, d: u64, r: u32, a: u64) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..r {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

/// Run the full pipeline and report how the question was settled.
///
/// Deterministic: the same n always yields the same verdict.
pub fn classify(n: u64) -> Verdict {
    if n < 2 {
        return Verdict::BelowTwo;
    }
    if let Some(p) = small_factor(n) {
        return if n == p {
            Verdict::SmallPrime { prime: p }
        } else {
            Verdict::SmallFactor { factor: p }
        };
    }

    let (d, r) = decompose(n - 1);
    for &a in WITNESS_BASES.iter() {
        // A base at or above n carries no information about n.
        if a >= n || a % n == 0 {
            continue;
        }
        if !passes_witness(n, d, r, a) {
            return Verdict::Witnessed { witness: a };
        }
    }
    Verdict::PassedAllBases
}

/// Is n prime? Deterministic over the whole u64 range.
///
/// The boolean view of [`classify`]; see there for the pipeline.
#[inline]
pub fn is_probable_prime(n: u64) -> bool {
    classify(n).is_prime()
}
