//! # Arith — Overflow-Safe Modular Arithmetic
//!
//! Scalar building blocks shared by the primality test, prime generation,
//! and the RSA walkthrough:
//!
//! 1. **Widening multiplication** (`mul_mod`) carrying the product in u128
//!    so no operand pair can overflow before reduction.
//! 2. **Modular exponentiation** (`pow_mod`) via the binary method.
//! 3. **Euclidean tools** (`gcd`, `egcd`, `mod_inverse`) for coprimality
//!    checks and private-exponent derivation.
//!
//! ## Algorithm: Binary Exponentiation
//!
//! `pow_mod` maintains an accumulator starting at 1; for each set bit of the
//! exponent (scanned low to high) it multiplies the accumulator by the
//! running square of the base. Every multiplication goes through `mul_mod`,
//! so intermediates stay below the modulus and the whole computation fits
//! native words. `log2(exp) + 1` iterations.
//!
//! ## References
//!
//! - Donald E. Knuth, "The Art of Computer Programming", vol. 2,
//!   section 4.6.3 (evaluation of powers).
//! - Extended Euclidean algorithm: Knuth vol. 2, section 4.5.2.

/// Widening modular multiplication: (a * b) mod m.
///
/// The product is formed in u128, so the result is exact for every pair of
/// u64 operands. The modulus must be nonzero.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "mul_mod requires a nonzero modulus");
    (a as u128 * b as u128 % m as u128) as u64
}

/// Modular exponentiation: base^exp mod modulus.
///
/// Binary square-and-multiply over `mul_mod`. An exponent of 0 yields 1 and
/// a modulus of 1 yields 0, matching the mathematical conventions. The base
/// is reduced on entry, so values at or above the modulus are accepted.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Extended Euclidean algorithm: returns (g, x, y) with a*x + b*y = g = gcd(a, b).
///
/// The Bezout coefficients are signed and can be negative even for unsigned
/// inputs; i128 holds them without overflow for the full u64 input range.
pub fn egcd(a: u64, b: u64) -> (u64, i128, i128) {
    let (mut r0, mut r1) = (a as i128, b as i128);
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        let r = r0 - q * r1;
        r0 = r1;
        r1 = r;
        let x = x0 - q * x1;
        x0 = x1;
        x1 = x;
        let y = y0 - q * y1;
        y0 = y1;
        y1 = y;
    }
    (r0 as u64, x0, y0)
}

/// Modular inverse for an arbitrary modulus: the x with a*x = 1 (mod m),
/// or None when gcd(a, m) != 1.
///
/// Computed via `egcd`, so the modulus need not be prime. RSA key derivation
/// depends on this: the totient it inverts against is composite.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }
    let (g, x, _) = egcd(a % m, m);
    if g != 1 {
        return None;
    }
    let m_i = m as i128;
    Some((((x % m_i) + m_i) % m_i) as u64)
}
