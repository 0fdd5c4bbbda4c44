//! # RSA — Textbook Keypair Walkthrough
//!
//! Small-modulus RSA over u64, tying the crate's pieces together:
//!
//! 1. **Key generation** drawing two random primes of half the requested
//!    width, with the usual redraw rules (distinct primes, totient coprime
//!    to the public exponent).
//! 2. **Private exponent** derived with the extended Euclidean inverse.
//! 3. **Encryption and decryption** as plain modular exponentiation,
//!    routed through Montgomery arithmetic where the modulus allows.
//!
//! This is textbook RSA without padding: a demonstration of the prime and
//! modular machinery, not a secure cryptosystem. Moduli fit in one machine
//! word, so every key here can be factored in microseconds.
//!
//! ## References
//!
//! - Ronald L. Rivest, Adi Shamir, and Leonard Adleman, "A method for
//!   obtaining digital signatures and public-key cryptosystems",
//!   Communications of the ACM 21 (1978), 120-126.

use rand::Rng;

use crate::arith::{gcd, mod_inverse, pow_mod};
use crate::generate::random_prime;
use crate::montgomery::Montgomery;

/// The fixed public exponent, F4 = 2^16 + 1.
pub const PUBLIC_EXPONENT: u64 = 65537;

/// An RSA keypair with a single-word modulus.
///
/// Holds the public pair (n, e) and the private exponent d. The generating
/// primes are discarded after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub n: u64,
    pub e: u64,
    pub d: u64,
}

/// Exponentiation dispatch: odd moduli below 2^63 go through a Montgomery
/// context, everything else through plain widening arithmetic.
fn fast_pow_mod(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus > 1 && modulus & 1 == 1 && modulus < 1 << 63 {
        Montgomery::new(modulus).pow(base, exp)
    } else {
        pow_mod(base, exp, modulus)
    }
}

impl RsaKeyPair {
    /// Generate a keypair with a modulus of roughly the requested width,
    /// for bits in 32..=64. Returns None for widths outside that range.
    ///
    /// Draws primes of bits/2 and bits - bits/2 bits, so the modulus has
    /// bits or bits - 1 significant bits. Redraws when the primes collide
    /// or when the totient shares a factor with e = 65537.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> Option<RsaKeyPair> {
        if !(32..=64).contains(&bits) {
            return None;
        }
        let p_bits = bits / 2;
        let q_bits = bits - p_bits;
        loop {
            let p = random_prime(rng, p_bits)?;
            let q = random_prime(rng, q_bits)?;
            if p == q {
                continue;
            }
            let n = p * q;
            let phi = (p - 1) * (q - 1);
            if gcd(PUBLIC_EXPONENT, phi) != 1 {
                continue;
            }
            let d = mod_inverse(PUBLIC_EXPONENT, phi)?;
            return Some(RsaKeyPair {
                n,
                e: PUBLIC_EXPONENT,
                d,
            });
        }
    }

    /// Encrypt a message residue: m^e mod n, defined only for m < n.
    pub fn encrypt(&self, m: u64) -> Option<u64> {
        if m >= self.n {
            return None;
        }
        Some(fast_pow_mod(m, self.e, self.n))
    }

    /// Decrypt a ciphertext residue: c^d mod n.
    pub fn decrypt(&self, c: u64) -> u64 {
        fast_pow_mod(c, self.d, self.n)
    }
}

#[cfg(test)]
mod tests {
    //! # RSA Walkthrough Tests
    //!
    //! The published classroom vector (p = 61, q = 53, n = 3233, e = 17,
    //! d = 2753) pins down the arithmetic; generated keypairs are checked
    //! for the round-trip identity decrypt(encrypt(m)) = m across the
    //! message space, including the edge residues 0, 1, and n - 1.

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ── Fixed Classroom Vector ──────────────────────────────────────────

    /// Wikipedia's worked example: 65^17 mod 3233 = 2790 and back.
    #[test]
    fn classroom_vector_roundtrip() {
        let kp = RsaKeyPair {
            n: 3233,
            e: 17,
            d: 2753,
        };
        assert_eq!(kp.encrypt(65), Some(2790));
        assert_eq!(kp.decrypt(2790), 65);
        for m in 0..100 {
            assert_eq!(kp.decrypt(kp.encrypt(m).unwrap()), m, "m={}", m);
        }
    }

    /// Messages at or past the modulus are not encryptable.
    #[test]
    fn encrypt_rejects_out_of_range_messages() {
        let kp = RsaKeyPair {
            n: 3233,
            e: 17,
            d: 2753,
        };
        assert_eq!(kp.encrypt(3233), None);
        assert_eq!(kp.encrypt(3234), None);
        assert_eq!(kp.encrypt(u64::MAX), None);
        assert!(kp.encrypt(3232).is_some()); // n - 1 is still in range
    }

    // ── Generated Keypairs ──────────────────────────────────────────────

    /// Round-trip across widths, including the 64-bit top where the
    /// modulus may exceed the Montgomery ceiling, and the edge residues
    /// 0, 1, and n - 1 ((n-1)^e = -1 mod n for odd e).
    #[test]
    fn generated_keys_roundtrip_across_widths() {
        let mut rng = StdRng::seed_from_u64(1234);
        for bits in [32u32, 40, 48, 56, 64] {
            let kp = RsaKeyPair::generate(&mut rng, bits).unwrap();
            assert_eq!(kp.e, PUBLIC_EXPONENT);
            for m in [0u64, 1, 2, 42, 65535, kp.n - 1] {
                let c = kp.encrypt(m).unwrap();
                assert_eq!(kp.decrypt(c), m, "bits={} m={} n={}", bits, m, kp.n);
            }
        }
    }

    /// The modulus width lands within one bit of the request (the product
    /// of two half-width primes can lose one bit).
    #[test]
    fn modulus_width_tracks_request() {
        let mut rng = StdRng::seed_from_u64(5);
        for bits in [32u32, 48, 64] {
            let kp = RsaKeyPair::generate(&mut rng, bits).unwrap();
            let width = 64 - kp.n.leading_zeros();
            assert!(
                width == bits || width == bits - 1,
                "bits={} produced a {}-bit modulus {}",
                bits,
                width,
                kp.n
            );
        }
    }

    /// Widths outside 32..=64 are rejected before any drawing happens.
    #[test]
    fn generate_rejects_bad_widths() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(RsaKeyPair::generate(&mut rng, 0), None);
        assert_eq!(RsaKeyPair::generate(&mut rng, 31), None);
        assert_eq!(RsaKeyPair::generate(&mut rng, 65), None);
    }

    /// The same seed generates the same keypair.
    #[test]
    fn generate_is_seed_reproducible() {
        let a = RsaKeyPair::generate(&mut StdRng::seed_from_u64(77), 48);
        let b = RsaKeyPair::generate(&mut StdRng::seed_from_u64(77), 48);
        assert_eq!(a, b);
    }

    // ── Exponentiation Dispatch ─────────────────────────────────────────

    /// Both dispatch arms agree with plain pow_mod: the Montgomery side for
    /// odd moduli in range, the fallback for even moduli, moduli at or
    /// above 2^63, and the degenerate modulus 1.
    #[test]
    fn fast_pow_mod_agrees_with_plain_everywhere() {
        let cases: &[(u64, u64, u64)] = &[
            (65, 17, 3233),                          // Montgomery arm
            (42, 65537, 999_999_999_999_999_877),    // Montgomery arm, wide
            (42, 65537, (1 << 63) + 29),             // odd but past the ceiling
            (42, 65537, 1 << 40),                    // even modulus
            (7, 3, 1),                               // single-residue ring
            (0, 0, 97),                              // empty product
        ];
        for &(b, e, m) in cases {
            assert_eq!(
                fast_pow_mod(b, e, m),
                pow_mod(b, e, m),
                "base={} exp={} modulus={}",
                b,
                e,
                m
            );
        }
    }
}
