//! Recorded protocol runs.
//!
//! A [`Transcript`] is a [`ProtocolObserver`] that keeps every event of a
//! run in serializable form.  Records are newline-delimited ASCII: a
//! human-readable summary, the canonical JSON encoding on a `json:` line and
//! a BLAKE2b-256 digest of that encoding on a `digest:` line.  Reading a
//! record back recomputes the digest and refuses tampered files.

use crate::error::TranscriptError;
use crate::observer::ProtocolObserver;
use crate::operator::ProofOperator;
use crate::polynomial::UnivariatePolynomial;
use crate::verifier::{RandomChoices, Rejection};
use blake2::digest::{consts::U32, Digest};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

type Blake2b256 = blake2::Blake2b<U32>;

const JSON_PREFIX: &str = "json:";
const DIGEST_PREFIX: &str = "digest:";

/// One passing round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Operator checked in this round.
    pub operator: ProofOperator,
    /// The prover's answer.
    pub polynomial: UnivariatePolynomial,
    /// Claim the answer was checked against.
    pub previous_claim: u64,
    /// Challenge drawn for the active variable.
    pub challenge: u64,
    /// Claim after the round.
    pub claim: u64,
    /// Choice replaced by a linearization round.
    pub previous_linearized_value: Option<u64>,
    /// Every resolved choice after the round, by ascending variable.
    pub random_choices: Vec<(usize, u64)>,
}

/// Everything observed during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Field prime announced at the handshake.
    pub prime: Option<u64>,
    /// The prover's opening claim.
    pub initial_claim: Option<u64>,
    /// Passing rounds in order.
    pub rounds: Vec<RoundRecord>,
    /// The failing check, for rejected runs.
    pub rejection: Option<Rejection>,
    /// Verdict, once the run has terminated.
    pub accepted: Option<bool>,
}

impl Transcript {
    /// Empty transcript, ready to observe a run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical JSON encoding.
    pub fn to_json(&self) -> Result<String, TranscriptError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes [`Transcript::to_json`] output.
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hex BLAKE2b-256 digest of the canonical JSON encoding.
    pub fn digest(&self) -> Result<String, TranscriptError> {
        let json = self.to_json()?;
        Ok(hex::encode(Blake2b256::digest(json.as_bytes())))
    }

    /// Renders the ASCII record.
    pub fn to_lines(&self) -> Result<Vec<String>, TranscriptError> {
        let mut lines = Vec::with_capacity(self.rounds.len() + 6);
        if let Some(prime) = self.prime {
            lines.push(format!("prime:{prime}"));
        }
        if let Some(claim) = self.initial_claim {
            lines.push(format!("claim:{claim}"));
        }
        for round in &self.rounds {
            lines.push(format!(
                "round {} {}: s = {}; c {} -> {}; x{} = {}",
                round.operator.round_number(),
                round.operator,
                round.polynomial,
                round.previous_claim,
                round.claim,
                round.operator.active_variable(),
                round.challenge,
            ));
        }
        if let Some(rejection) = &self.rejection {
            lines.push(format!("rejected:{rejection}"));
        }
        match self.accepted {
            Some(true) => lines.push("verdict:accepted".to_string()),
            Some(false) => lines.push("verdict:rejected".to_string()),
            None => {}
        }
        lines.push(format!("{JSON_PREFIX}{}", self.to_json()?));
        lines.push(format!("{DIGEST_PREFIX}{}", self.digest()?));
        Ok(lines)
    }

    /// Parses a record produced by [`Transcript::to_lines`] and checks its
    /// digest.  Summary lines are ignored.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, TranscriptError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut json = None;
        let mut stored = None;
        for line in lines {
            if let Some(tail) = line.strip_prefix(JSON_PREFIX) {
                json = Some(tail);
            } else if let Some(tail) = line.strip_prefix(DIGEST_PREFIX) {
                stored = Some(tail.trim());
            }
        }
        let json = json.ok_or(TranscriptError::MissingLine(JSON_PREFIX))?;
        let stored = stored.ok_or(TranscriptError::MissingLine(DIGEST_PREFIX))?;
        let transcript = Self::from_json(json)?;
        let computed = transcript.digest()?;
        if computed != stored {
            return Err(TranscriptError::DigestMismatch {
                stored: stored.to_string(),
                computed,
            });
        }
        Ok(transcript)
    }

    /// Writes the record to `dir/prefix_NNNN.txt`, creating `dir` if needed.
    pub fn write(
        &self,
        dir: impl AsRef<Path>,
        prefix: &str,
        index: usize,
    ) -> Result<PathBuf, TranscriptError> {
        let dir = dir.as_ref();
        create_dir_all(dir)?;
        let path = dir.join(format!("{prefix}_{index:04}.txt"));
        let mut writer = BufWriter::new(File::create(&path)?);
        for line in self.to_lines()? {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(path)
    }
}

impl ProtocolObserver for Transcript {
    fn on_handshake(&mut self, prime: u64, claim: u64) {
        self.prime = Some(prime);
        self.initial_claim = Some(claim);
    }

    fn on_new_round(
        &mut self,
        operator: ProofOperator,
        polynomial: &UnivariatePolynomial,
        previous_claim: u64,
        random_choices: &RandomChoices,
        claim: u64,
        previous_linearized_value: Option<u64>,
    ) {
        self.rounds.push(RoundRecord {
            operator,
            polynomial: polynomial.clone(),
            previous_claim,
            challenge: random_choices
                .get(operator.active_variable())
                .unwrap_or_default(),
            claim,
            previous_linearized_value,
            random_choices: random_choices.iter().collect(),
        });
    }

    fn on_rejected(&mut self, rejection: &Rejection) {
        self.rejection = Some(rejection.clone());
    }

    fn on_terminated(&mut self, accepted: bool) {
        self.accepted = Some(accepted);
    }
}
