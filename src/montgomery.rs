//! # Montgomery — REDC-Based Modular Multiplication
//!
//! Montgomery arithmetic for odd 64-bit moduli, used to speed up repeated
//! exponentiation against a fixed modulus (the RSA walkthrough's hot path):
//!
//! 1. **Precomputed context** holding n' = -n^{-1} mod 2^64 and the residues
//!    of R = 2^64 and R^2 modulo n.
//! 2. **REDC reduction** replacing the division in each modular multiply
//!    with shifts and word multiplies.
//! 3. **Domain conversion** in and out of Montgomery form, so callers hand
//!    in plain residues and get plain residues back.
//!
//! ## Algorithm: Montgomery Reduction
//!
//! For t < n*R, REDC computes t*R^{-1} mod n without dividing by n:
//! m = (t mod R) * n' mod R, then u = (t + m*n) / R, which is exact because
//! t + m*n = 0 (mod R). One conditional subtraction brings u below n.
//! Multiplying two Montgomery-form values (aR)(bR) and reducing yields abR,
//! so the form is closed under multiplication. n' comes from Hensel's lemma:
//! starting from inv = n (an inverse of n mod 2^3), each Newton step
//! inv = inv * (2 - n * inv) doubles the number of correct low bits, so six
//! steps exceed 64 bits.
//!
//! The context requires an odd modulus with 1 < n < 2^63; the upper bound
//! keeps t + m*n inside u128 for all reachable t.
//!
//! ## References
//!
//! - Peter L. Montgomery, "Modular multiplication without trial division",
//!   Mathematics of Computation 44 (1985), 519-521.

/// Precomputed constants for Montgomery arithmetic modulo a fixed odd n.
#[derive(Clone, Copy, Debug)]
pub struct Montgomery {
    n: u64,
    n_prime: u64,
    r_mod_n: u64,
    r2_mod_n: u64,
}

impl Montgomery {
    /// Build a context for the odd modulus n, with 1 < n < 2^63.
    pub fn new(n: u64) -> Self {
        debug_assert!(n > 1 && n & 1 == 1, "Montgomery requires an odd modulus > 1");
        debug_assert!(n < 1 << 63, "Montgomery modulus must stay below 2^63");

        // Hensel lifting: six Newton steps lift the inverse of n mod 2^3
        // past 64 correct bits.
        let mut inv: u64 = n;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(n.wrapping_mul(inv)));
        }
        let n_prime = inv.wrapping_neg();

        let r_mod_n = ((1u128 << 64) % n as u128) as u64;
        let r2_mod_n = (r_mod_n as u128 * r_mod_n as u128 % n as u128) as u64;

        Montgomery {
            n,
            n_prime,
            r_mod_n,
            r2_mod_n,
        }
    }

    /// The modulus this context reduces by.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.n
    }

    /// REDC: t * R^{-1} mod n for t < n * R.
    #[inline]
    fn redc(&self, t: u128) -> u64 {
        let m = (t as u64).wrapping_mul(self.n_prime);
        let u = (t + m as u128 * self.n as u128) >> 64;
        let mut r = u as u64;
        if r >= self.n {
            r -= self.n;
        }
        r
    }

    /// Convert a plain residue into Montgomery form: a -> aR mod n.
    #[inline]
    pub fn to_mont(&self, a: u64) -> u64 {
        self.mul(a % self.n, self.r2_mod_n)
    }

    /// Convert a Montgomery-form value back to a plain residue: aR -> a.
    #[inline]
    pub fn from_mont(&self, a: u64) -> u64 {
        self.redc(a as u128)
    }

    /// Multiply two Montgomery-form values, staying in Montgomery form.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        self.redc(a as u128 * b as u128)
    }

    /// Square a Montgomery-form value.
    #[inline]
    pub fn square(&self, a: u64) -> u64 {
        self.redc(a as u128 * a as u128)
    }

    /// The multiplicative identity in Montgomery form: R mod n.
    #[inline]
    pub fn one(&self) -> u64 {
        self.r_mod_n
    }

    /// Modular exponentiation on plain residues: base^exp mod n.
    ///
    /// Converts once, runs square-and-multiply entirely in Montgomery form,
    /// and converts back. Matches `arith::pow_mod` for every odd modulus in
    /// range.
    pub fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let mut b = self.to_mont(base);
        let mut acc = self.one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul(acc, b);
            }
            exp >>= 1;
            if exp > 0 {
                b = self.square(b);
            }
        }
        self.from_mont(acc)
    }
}
