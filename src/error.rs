//! Error types shared across the crate.
//!
//! A rejected proof is not an error: the verifier reports it through
//! [`Verdict`](crate::Verdict).  The types here cover malformed formulas,
//! broken internal invariants and I/O around configuration and transcripts.

use crate::operator::ProofOperator;
use std::path::PathBuf;
use thiserror::Error;

/// Formula construction failures.  The formula is left unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Variable ids start at 1.
    #[error("variable id must be at least 1")]
    ZeroVariableId,
    /// Adding `id` would leave positions without a variable.
    #[error("variable id {id} would leave a gap after {count} defined variables")]
    VariableGap {
        /// Requested id.
        id: usize,
        /// Number of variables defined so far.
        count: usize,
    },
    /// Literals are nonzero by construction.
    #[error("clause contains the zero literal")]
    ZeroLiteral,
    /// A clause mentions a variable that was never added.
    #[error("variable {0} is not defined")]
    UndefinedVariable(usize),
}

/// Internal invariant breaches.  These indicate a defect in prover
/// construction rather than a dishonest prover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    /// The answer for `operator` still depends on more than its active variable.
    #[error("polynomial for operator {operator} is not univariate in x{expected}: depends on {variables:?}")]
    NotUnivariate {
        /// Operator being answered.
        operator: ProofOperator,
        /// Variable the answer should be univariate in.
        expected: usize,
        /// Variables the answer actually depends on.
        variables: Vec<usize>,
    },
    /// Eliminating every variable did not leave a constant.
    #[error("fully quantified polynomial still depends on {0:?}")]
    NonGroundValue(Vec<usize>),
    /// The prover has no polynomial recorded for the operator.
    #[error("no polynomial recorded for operator {0}")]
    MissingOperator(ProofOperator),
    /// A linearization round referenced a variable with no random choice on record.
    #[error("operator {operator} needs a random choice for x{variable}, none recorded")]
    UnresolvedVariable {
        /// Operator being checked.
        operator: ProofOperator,
        /// Variable without a recorded choice.
        variable: usize,
    },
    /// The requested modulus is not an odd prime.
    #[error("{0} is not an odd prime")]
    UnsupportedPrime(u64),
    /// No suitable prime fits in a machine word.
    #[error("no prime >= {0} fits in 64 bits")]
    PrimeSearchExhausted(u64),
}

/// Failures loading a [`ProtocolConfig`](crate::ProtocolConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for the expected schema.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures persisting, decoding or authenticating a [`Transcript`](crate::Transcript).
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Writing the record failed.
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding or decoding JSON failed.
    #[error("transcript encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A record line with the given prefix is absent.
    #[error("transcript record has no `{0}` line")]
    MissingLine(&'static str),
    /// The stored digest does not match the decoded transcript.
    #[error("transcript digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch {
        /// Digest found in the record.
        stored: String,
        /// Digest of the decoded transcript.
        computed: String,
    },
}
