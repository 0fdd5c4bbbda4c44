//! # Verdict — Primality Evidence
//!
//! The structured answer behind every primality check: not just a boolean,
//! but which stage of the pipeline settled the question and with what
//! evidence. Serializes as tagged JSON for the `check --json` output.

use serde::{Deserialize, Serialize};

/// How a primality check was decided.
///
/// The variants follow the pipeline order: range check, trial division by
/// the small primes, then the Miller-Rabin witness loop. A `Witnessed`
/// verdict carries a base that proves compositeness; `PassedAllBases` means
/// every base in the deterministic set failed to find one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Verdict {
    /// n < 2: below the smallest prime, composite-by-definition territory.
    BelowTwo,
    /// n is itself one of the small trial-division primes.
    SmallPrime { prime: u64 },
    /// A small prime divides n strictly, so n is composite.
    SmallFactor { factor: u64 },
    /// This Miller-Rabin base witnessed that n is composite.
    Witnessed { witness: u64 },
    /// No base in the deterministic set could witness compositeness.
    PassedAllBases,
}

impl Verdict {
    /// Collapse the evidence to the boolean answer.
    #[inline]
    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::SmallPrime { .. } | Verdict::PassedAllBases)
    }
}
