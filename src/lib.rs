#![deny(missing_docs)]

//! # qbf_ip
//!
//! An executable rendition of the interactive proof placing TQBF in IP
//! (Shamir's PSPACE ⊆ IP).  A quantified Boolean formula in prenex CNF is
//! arithmetized into an integer polynomial, an honest [`Prover`] precomputes
//! the polynomial in force before every protocol step, and a seeded
//! [`Verifier`] checks the prover's univariate answers round by round over a
//! prime field.
//!
//! Each protocol step is a [`ProofOperator`]: the quantifier step `(v, 0)`
//! eliminating `x_v`, followed by linearization steps `(v, 1) … (v, v)` that
//! keep every degree bounded.  A formula with `n` variables takes
//! `Σ_{v=1}^{n} (1 + v)` rounds after the handshake.
//!
//! ## Usage
//!
//! ```rust
//! use qbf_ip::{formulas, run_verifier, HonestProver, Prover, Transcript};
//!
//! let qbf = formulas::simple_equality();
//! let prover = HonestProver::new(&qbf).unwrap();
//! let mut transcript = Transcript::new();
//! let accepted = run_verifier(&qbf, &prover, prover.prime(), 7, &mut transcript).unwrap();
//! assert!(accepted);
//! assert_eq!(transcript.rounds.len(), qbf.round_count());
//! ```
//!
//! Protocol events reach a [`ProtocolObserver`]; [`TracingObserver`]
//! narrates them through `tracing` and [`Transcript`] records them for
//! persistence.

mod config;
mod error;
mod field;
pub mod formulas;
mod observer;
mod operator;
pub mod polynomial;
mod prime;
mod prng;
mod prover;
mod qbf;
mod transcript;
mod verifier;

pub use config::ProtocolConfig;
pub use error::{ConfigError, ProtocolViolation, TranscriptError, ValidationError};
pub use field::Field;
pub use observer::{NoopObserver, ProtocolObserver, TracingObserver};
pub use operator::ProofOperator;
pub use polynomial::{FieldPolynomial, Monomial, Polynomial, UnivariatePolynomial};
pub use prime::{is_prime, next_prime};
pub use prng::SimplePrng;
pub use prover::{HonestProver, Prover};
pub use qbf::{Clause, Qbf, Quantifier, Variable, DEFAULT_SOUNDNESS_BITS, MAX_PRIME_LOWER_BOUND};
pub use transcript::{RoundRecord, Transcript};
pub use verifier::{
    run_many, run_verifier, RandomChoices, Rejection, Verdict, Verifier, VerifierState,
    VERIFIER_DEFAULT_SEED,
};
