//! Verifier side of the protocol.
//!
//! The verifier never evaluates the formula's truth table.  It holds a
//! running claim `c` about the polynomial in force and, for every operator
//! in canonical order, asks the prover for a univariate polynomial `s` and
//! checks it against `c`:
//!
//! * quantifier `(v, 0)`: `s(0)·s(1) = c` for `∀`, `s(0) + s(1) = c` for `∃`;
//! * linearization `(v, lv)`: `a·s(1) + (1 − a)·s(0) = c` where `a` is the
//!   choice currently on record for `x_lv`.
//!
//! After each passing check a fresh challenge is drawn for the active
//! variable and `c := s(challenge)`.  Once the terminal operator has been
//! checked, the verifier evaluates the arithmetized matrix itself at the
//! recorded choices and compares it with the final claim.

use crate::error::ProtocolViolation;
use crate::observer::{NoopObserver, ProtocolObserver};
use crate::operator::ProofOperator;
use crate::prover::Prover;
use crate::qbf::{Qbf, Quantifier};
use crate::{Field, SimplePrng};
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default seed for the verifier's random source.
pub const VERIFIER_DEFAULT_SEED: u64 = 0xcafe + 0xbeef;

/// The verifier's random choices, indexed by variable id.
///
/// A variable is *resolved* once a challenge has been drawn for it; later
/// linearization rounds may overwrite its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomChoices {
    values: Vec<u64>,
    resolved: Vec<u64>,
}

impl RandomChoices {
    /// Empty state for a formula with `n` variables.
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![0; n],
            resolved: vec![0; n.div_ceil(64)],
        }
    }

    /// Number of variables tracked.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variables are tracked.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `x_v` has a recorded choice.
    pub fn is_resolved(&self, v: usize) -> bool {
        if v == 0 || v > self.values.len() {
            return false;
        }
        (self.resolved[(v - 1) / 64] >> ((v - 1) % 64)) & 1 == 1
    }

    /// Recorded choice for `x_v`.
    pub fn get(&self, v: usize) -> Option<u64> {
        self.is_resolved(v).then(|| self.values[v - 1])
    }

    /// Records `a` as the choice for `x_v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is outside `1..=len`.
    pub fn set(&mut self, v: usize, a: u64) {
        assert!(v >= 1 && v <= self.values.len(), "variable x{v} out of range");
        self.values[v - 1] = a;
        self.resolved[(v - 1) / 64] |= 1 << ((v - 1) % 64);
    }

    /// Number of resolved variables.
    pub fn resolved_count(&self) -> usize {
        self.resolved.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if every variable in `1..=v` is resolved.
    pub fn resolved_through(&self, v: usize) -> bool {
        (1..=v).all(|x| self.is_resolved(x))
    }

    /// Resolved `(variable, value)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        (1..=self.values.len()).filter_map(move |v| self.get(v).map(|a| (v, a)))
    }

    /// Recorded values indexed by `v - 1`; unresolved entries read as 0.
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

/// Why a run was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The prover's opening claim is zero, conceding the formula is false.
    ZeroClaim,
    /// `s(0)·s(1)` or `s(0) + s(1)` disagreed with the running claim.
    QuantifierCheck {
        /// Round that failed.
        operator: ProofOperator,
        /// Running claim.
        expected: u64,
        /// Value computed from the prover's answer.
        actual: u64,
    },
    /// `a·s(1) + (1 − a)·s(0)` disagreed with the running claim.
    LinearizationCheck {
        /// Round that failed.
        operator: ProofOperator,
        /// Running claim.
        expected: u64,
        /// Value computed from the prover's answer.
        actual: u64,
    },
    /// The arithmetized matrix at the final random point disagreed with the
    /// last claim.
    FinalEvaluation {
        /// Last running claim.
        expected: u64,
        /// Verifier's own evaluation.
        actual: u64,
    },
}

impl Rejection {
    /// Round that failed, if the failure happened inside a round.
    pub fn operator(&self) -> Option<ProofOperator> {
        match self {
            Rejection::QuantifierCheck { operator, .. }
            | Rejection::LinearizationCheck { operator, .. } => Some(*operator),
            Rejection::ZeroClaim | Rejection::FinalEvaluation { .. } => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ZeroClaim => write!(f, "prover claimed the value 0"),
            Rejection::QuantifierCheck {
                operator,
                expected,
                actual,
            } => write!(
                f,
                "quantifier check failed at {operator}: got {actual}, expected {expected}"
            ),
            Rejection::LinearizationCheck {
                operator,
                expected,
                actual,
            } => write!(
                f,
                "linearization check failed at {operator}: got {actual}, expected {expected}"
            ),
            Rejection::FinalEvaluation { expected, actual } => write!(
                f,
                "final evaluation check failed: got {actual}, expected {expected}"
            ),
        }
    }
}

/// Outcome of a protocol run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every check passed.
    Accepted,
    /// The first failing check.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Position of the verifier in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierState {
    /// Nothing has been exchanged yet.
    Init,
    /// The next step checks `operator`.
    Round(ProofOperator),
    /// Terminal: accepted.
    Accepted,
    /// Terminal: rejected.
    Rejected,
}

/// Round-by-round verifier for a single protocol run.
pub struct Verifier<'a, P: Prover + ?Sized> {
    qbf: &'a Qbf,
    prover: &'a P,
    field: Field,
    prng: SimplePrng,
    choices: RandomChoices,
    claim: u64,
    state: VerifierState,
    verdict: Option<Verdict>,
}

impl<'a, P: Prover + ?Sized> Verifier<'a, P> {
    /// Prepares a run over `F_prime` whose challenges are derived from `seed`.
    ///
    /// Fails with [`ProtocolViolation::UnsupportedPrime`] unless `prime` is an
    /// odd prime.
    pub fn new(
        qbf: &'a Qbf,
        prover: &'a P,
        prime: u64,
        seed: u64,
    ) -> Result<Self, ProtocolViolation> {
        let field = Field::try_new(prime).ok_or(ProtocolViolation::UnsupportedPrime(prime))?;
        Ok(Self {
            qbf,
            prover,
            field,
            prng: SimplePrng::new(seed),
            choices: RandomChoices::new(qbf.variable_count()),
            claim: 0,
            state: VerifierState::Init,
            verdict: None,
        })
    }

    /// Current protocol state.
    pub fn state(&self) -> VerifierState {
        self.state
    }

    /// Current running claim.
    pub fn claim(&self) -> u64 {
        self.claim
    }

    /// Random choices drawn so far.
    pub fn random_choices(&self) -> &RandomChoices {
        &self.choices
    }

    /// Final verdict, once the run has terminated.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Runs the protocol to completion.
    pub fn run(
        mut self,
        observer: &mut dyn ProtocolObserver,
    ) -> Result<Verdict, ProtocolViolation> {
        loop {
            if let Some(verdict) = self.step(observer)? {
                return Ok(verdict);
            }
        }
    }

    /// Performs the handshake or the next round.  Returns the verdict once
    /// the run terminates.
    pub fn step(
        &mut self,
        observer: &mut dyn ProtocolObserver,
    ) -> Result<Option<Verdict>, ProtocolViolation> {
        match self.state {
            VerifierState::Init => self.handshake(observer),
            VerifierState::Round(operator) => self.round(operator, observer),
            VerifierState::Accepted | VerifierState::Rejected => Ok(self.verdict.clone()),
        }
    }

    fn handshake(
        &mut self,
        observer: &mut dyn ProtocolObserver,
    ) -> Result<Option<Verdict>, ProtocolViolation> {
        self.claim = self.field.reduce(self.prover.value_of_entire_polynomial());
        observer.on_handshake(self.field.modulus(), self.claim);
        if self.claim == 0 {
            return Ok(Some(self.reject(Rejection::ZeroClaim, observer)));
        }
        match ProofOperator::sequence(self.qbf.variable_count()).next() {
            Some(first) => {
                self.state = VerifierState::Round(first);
                Ok(None)
            }
            None => Ok(Some(self.finish(observer))),
        }
    }

    fn round(
        &mut self,
        operator: ProofOperator,
        observer: &mut dyn ProtocolObserver,
    ) -> Result<Option<Verdict>, ProtocolViolation> {
        let field = self.field;
        let s = self.prover.operator_polynomial(operator, &self.choices)?;
        let s0 = field.reduce(s.evaluate(0));
        let s1 = field.reduce(s.evaluate(1));
        let active = operator.active_variable();

        let previous_linearized = if operator.is_quantifier() {
            let actual = match self.qbf.quantifier(operator.variable()) {
                Some(Quantifier::Universal) => field.mul(s0, s1),
                _ => field.add(s0, s1),
            };
            if actual != self.claim {
                let rejection = Rejection::QuantifierCheck {
                    operator,
                    expected: self.claim,
                    actual,
                };
                return Ok(Some(self.reject(rejection, observer)));
            }
            None
        } else {
            let a = self
                .choices
                .get(active)
                .ok_or(ProtocolViolation::UnresolvedVariable {
                    operator,
                    variable: active,
                })?;
            let actual = field.add(field.mul(a, s1), field.mul(field.sub(1, a), s0));
            if actual != self.claim {
                let rejection = Rejection::LinearizationCheck {
                    operator,
                    expected: self.claim,
                    actual,
                };
                return Ok(Some(self.reject(rejection, observer)));
            }
            Some(a)
        };

        let challenge = self.prng.gen_below(field.modulus());
        self.choices.set(active, challenge);
        let previous_claim = self.claim;
        self.claim = field.reduce(s.evaluate(challenge));
        observer.on_new_round(
            operator,
            &s,
            previous_claim,
            &self.choices,
            self.claim,
            previous_linearized,
        );

        match operator.next(self.qbf.variable_count()) {
            Some(next) => {
                self.state = VerifierState::Round(next);
                Ok(None)
            }
            None => Ok(Some(self.finish(observer))),
        }
    }

    fn finish(&mut self, observer: &mut dyn ProtocolObserver) -> Verdict {
        let actual = self
            .qbf
            .arithmetized_value(&self.field, self.choices.values());
        if actual != self.claim {
            let rejection = Rejection::FinalEvaluation {
                expected: self.claim,
                actual,
            };
            return self.reject(rejection, observer);
        }
        self.state = VerifierState::Accepted;
        self.verdict = Some(Verdict::Accepted);
        observer.on_terminated(true);
        Verdict::Accepted
    }

    fn reject(&mut self, rejection: Rejection, observer: &mut dyn ProtocolObserver) -> Verdict {
        observer.on_rejected(&rejection);
        observer.on_terminated(false);
        self.state = VerifierState::Rejected;
        let verdict = Verdict::Rejected(rejection);
        self.verdict = Some(verdict.clone());
        verdict
    }
}

/// Runs one protocol instance and returns whether the verifier accepted.
///
/// Besides the per-round checks, the run is also rejected after the
/// terminal operator `(n, n)` when the arithmetized matrix at the recorded
/// choices disagrees with the final claim.
///
/// The same `(qbf, prover, prime, seed)` always produces the same sequence
/// of observer events.  A `prime` that is not an odd prime is reported as
/// [`ProtocolViolation::UnsupportedPrime`].
pub fn run_verifier<P: Prover + ?Sized>(
    qbf: &Qbf,
    prover: &P,
    prime: u64,
    seed: u64,
    observer: &mut dyn ProtocolObserver,
) -> Result<bool, ProtocolViolation> {
    Verifier::new(qbf, prover, prime, seed)?
        .run(observer)
        .map(|verdict| verdict.is_accepted())
}

/// Runs independent protocol instances, one per seed, sharing the prover.
///
/// Verdicts are returned in seed order.
pub fn run_many<P: Prover + Sync + ?Sized>(
    qbf: &Qbf,
    prover: &P,
    prime: u64,
    seeds: &[u64],
) -> Result<Vec<bool>, ProtocolViolation> {
    let run = |&seed: &u64| run_verifier(qbf, prover, prime, seed, &mut NoopObserver);
    #[cfg(not(target_arch = "wasm32"))]
    let verdicts = seeds.par_iter().map(run).collect();
    #[cfg(target_arch = "wasm32")]
    let verdicts = seeds.iter().map(run).collect();
    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas;
    use crate::polynomial::UnivariatePolynomial;
    use crate::prover::HonestProver;
    use crate::transcript::Transcript;

    fn honest(qbf: &Qbf) -> HonestProver {
        HonestProver::new(qbf).unwrap()
    }

    #[test]
    fn test_random_choices_bitset() {
        let mut rc = RandomChoices::new(70);
        assert_eq!(rc.get(3), None);
        rc.set(3, 9);
        rc.set(66, 0);
        assert_eq!(rc.get(3), Some(9));
        assert_eq!(rc.get(66), Some(0));
        assert!(!rc.is_resolved(0));
        assert!(!rc.is_resolved(71));
        assert_eq!(rc.resolved_count(), 2);
        assert_eq!(rc.iter().collect::<Vec<_>>(), vec![(3, 9), (66, 0)]);
        assert!(!rc.resolved_through(3));
        rc.set(1, 1);
        rc.set(2, 2);
        assert!(rc.resolved_through(3));
    }

    #[test]
    fn test_equality_is_accepted_for_every_seed() {
        let qbf = formulas::simple_equality();
        let prover = honest(&qbf);
        for seed in 0..25 {
            assert!(run_verifier(&qbf, &prover, prover.prime(), seed, &mut NoopObserver).unwrap());
        }
    }

    #[test]
    fn test_false_formula_rejected_at_handshake() {
        let qbf = formulas::simple_equality_unsat();
        let prover = honest(&qbf);
        assert_eq!(prover.value_of_entire_polynomial(), 0);
        for seed in 0..10 {
            let mut transcript = Transcript::new();
            let accepted =
                run_verifier(&qbf, &prover, prover.prime(), seed, &mut transcript).unwrap();
            assert!(!accepted);
            assert!(transcript.rounds.is_empty());
            assert_eq!(transcript.rejection, Some(Rejection::ZeroClaim));
            assert_eq!(transcript.accepted, Some(false));
        }
    }

    #[test]
    fn test_true_sample_formulas_are_accepted() {
        for qbf in [
            formulas::default_example(),
            formulas::extended_equality(),
            formulas::single_clause_or(4),
            formulas::forall_tautology(),
            formulas::prime_eval(),
        ] {
            let prover = honest(&qbf);
            for seed in [0, 1, VERIFIER_DEFAULT_SEED] {
                let verdict = Verifier::new(&qbf, &prover, prover.prime(), seed)
                    .unwrap()
                    .run(&mut NoopObserver)
                    .unwrap();
                assert_eq!(verdict, Verdict::Accepted, "{qbf}");
            }
        }
    }

    #[test]
    fn test_completeness_on_random_true_formulas() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut checked = 0;
        while checked < 12 {
            let qbf = formulas::random(&mut rng, 4, 5);
            let prover = honest(&qbf);
            let accepted =
                run_verifier(&qbf, &prover, prover.prime(), 7, &mut NoopObserver).unwrap();
            assert_eq!(accepted, qbf.is_true(), "{qbf}");
            if qbf.is_true() {
                checked += 1;
            }
        }
    }

    #[test]
    fn test_round_order_is_canonical() {
        let qbf = formulas::simple_equality();
        let prover = honest(&qbf);
        let mut transcript = Transcript::new();
        assert!(run_verifier(&qbf, &prover, prover.prime(), 3, &mut transcript).unwrap());
        let ops: Vec<(usize, usize)> = transcript
            .rounds
            .iter()
            .map(|r| (r.operator.variable(), r.operator.linearized()))
            .collect();
        assert_eq!(ops, vec![(1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(transcript.rounds[0].previous_linearized_value, None);
        assert_eq!(
            transcript.rounds[1].previous_linearized_value,
            transcript.rounds[0].random_choices.first().map(|&(_, a)| a)
        );
    }

    #[test]
    fn test_transcripts_are_deterministic() {
        let qbf = formulas::default_example();
        let prover = honest(&qbf);
        let record = |seed| {
            let mut transcript = Transcript::new();
            run_verifier(&qbf, &prover, prover.prime(), seed, &mut transcript).unwrap();
            transcript
        };
        let a = record(42);
        let b = record(42);
        assert_eq!(a, b);
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_ne!(a.digest().unwrap(), record(43).digest().unwrap());
    }

    #[test]
    fn test_stepping_exposes_states() {
        let qbf = formulas::simple_equality();
        let prover = honest(&qbf);
        let mut verifier = Verifier::new(&qbf, &prover, prover.prime(), 1).unwrap();
        assert_eq!(verifier.state(), VerifierState::Init);
        assert_eq!(verifier.step(&mut NoopObserver).unwrap(), None);
        assert_eq!(verifier.state(), VerifierState::Round(ProofOperator::first()));
        let mut steps = 1;
        loop {
            steps += 1;
            if verifier.step(&mut NoopObserver).unwrap().is_some() {
                break;
            }
        }
        // Handshake plus Σ_{v=1}^{2} (1 + v) rounds.
        assert_eq!(steps, 1 + qbf.round_count());
        assert_eq!(verifier.state(), VerifierState::Accepted);
        assert!(verifier.random_choices().resolved_through(2));
        assert_eq!(verifier.verdict(), Some(&Verdict::Accepted));
    }

    /// Opens with a wrong claim and answers every round honestly.
    struct LyingClaim<'a>(&'a HonestProver);

    impl Prover for LyingClaim<'_> {
        fn prime(&self) -> u64 {
            self.0.prime()
        }

        fn value_of_entire_polynomial(&self) -> u64 {
            self.0.field().add(self.0.value_of_entire_polynomial(), 1)
        }

        fn operator_polynomial(
            &self,
            operator: ProofOperator,
            random_choices: &RandomChoices,
        ) -> Result<UnivariatePolynomial, ProtocolViolation> {
            self.0.operator_polynomial(operator, random_choices)
        }
    }

    /// Lies about an existential first variable and patches the first answer
    /// with `+ x₁` so the opening check passes; the lie survives only if the
    /// first challenge is 0.
    struct ShiftedFirstRound<'a>(&'a HonestProver);

    impl Prover for ShiftedFirstRound<'_> {
        fn prime(&self) -> u64 {
            self.0.prime()
        }

        fn value_of_entire_polynomial(&self) -> u64 {
            self.0.field().add(self.0.value_of_entire_polynomial(), 1)
        }

        fn operator_polynomial(
            &self,
            operator: ProofOperator,
            random_choices: &RandomChoices,
        ) -> Result<UnivariatePolynomial, ProtocolViolation> {
            let honest = self.0.operator_polynomial(operator, random_choices)?;
            if operator != ProofOperator::first() {
                return Ok(honest);
            }
            let shift = UnivariatePolynomial::new(*self.0.field(), 1, vec![0, 1]);
            Ok(&honest + &shift)
        }
    }

    /// Honest except that the terminal answer gains `x(x − 1)`, which
    /// vanishes on {0, 1} and so slips past the last round check.
    struct TamperedLastRound<'a>(&'a HonestProver, usize);

    impl Prover for TamperedLastRound<'_> {
        fn prime(&self) -> u64 {
            self.0.prime()
        }

        fn value_of_entire_polynomial(&self) -> u64 {
            self.0.value_of_entire_polynomial()
        }

        fn operator_polynomial(
            &self,
            operator: ProofOperator,
            random_choices: &RandomChoices,
        ) -> Result<UnivariatePolynomial, ProtocolViolation> {
            let honest = self.0.operator_polynomial(operator, random_choices)?;
            if operator != ProofOperator::last(self.1) {
                return Ok(honest);
            }
            let field = *self.0.field();
            let bump = UnivariatePolynomial::new(field, self.1, vec![0, field.neg(1), 1]);
            Ok(&honest + &bump)
        }
    }

    fn exists_then_forall_false() -> Qbf {
        // ∃x ∀y : (x ∨ y) ∧ (¬x ∨ y) fails for y = 0.
        let mut qbf = Qbf::new();
        qbf.add_variable(1, Quantifier::Existential, "x").unwrap();
        qbf.add_variable(2, Quantifier::Universal, "y").unwrap();
        qbf.add_clause([1, 2]).unwrap();
        qbf.add_clause([-1, 2]).unwrap();
        qbf
    }

    #[test]
    fn test_wrong_claim_rejected_in_first_round() {
        let qbf = formulas::simple_equality_unsat();
        let honest = honest(&qbf);
        let liar = LyingClaim(&honest);
        for seed in 0..10 {
            let mut transcript = Transcript::new();
            assert!(!run_verifier(&qbf, &liar, liar.prime(), seed, &mut transcript).unwrap());
            match transcript.rejection {
                Some(Rejection::QuantifierCheck { operator, expected, .. }) => {
                    assert_eq!(operator, ProofOperator::first());
                    assert_eq!(expected, 1);
                }
                other => panic!("unexpected rejection {other:?}"),
            }
        }
    }

    #[test]
    fn test_small_fields_admit_more_spurious_accepts() {
        let qbf = exists_then_forall_false();
        assert!(!qbf.is_true());
        let seeds: Vec<u64> = (0..400).collect();

        let small = HonestProver::with_prime_lower_bound(&qbf, 5).unwrap();
        assert_eq!(small.prime(), 5);
        let cheat = ShiftedFirstRound(&small);
        let small_accepts = run_many(&qbf, &cheat, cheat.prime(), &seeds)
            .unwrap()
            .into_iter()
            .filter(|&a| a)
            .count();

        let large = HonestProver::new(&qbf).unwrap();
        let cheat = ShiftedFirstRound(&large);
        let large_accepts = run_many(&qbf, &cheat, cheat.prime(), &seeds)
            .unwrap()
            .into_iter()
            .filter(|&a| a)
            .count();

        // Acceptance requires the first challenge to be 0: probability 1/p.
        assert!(small_accepts > 20 && small_accepts < 200, "{small_accepts}");
        assert_eq!(large_accepts, 0);
    }

    #[test]
    fn test_final_evaluation_catches_tampered_last_round() {
        let qbf = formulas::extended_equality();
        let honest = honest(&qbf);
        let cheat = TamperedLastRound(&honest, qbf.variable_count());
        for seed in 0..10 {
            let verdict = Verifier::new(&qbf, &cheat, cheat.prime(), seed)
                .unwrap()
                .run(&mut NoopObserver)
                .unwrap();
            assert!(matches!(
                verdict,
                Verdict::Rejected(Rejection::FinalEvaluation { .. })
            ));
        }
    }

    #[test]
    fn test_run_many_matches_sequential_runs() {
        let qbf = formulas::extended_equality();
        let prover = honest(&qbf);
        let seeds: Vec<u64> = (10..20).collect();
        let verdicts = run_many(&qbf, &prover, prover.prime(), &seeds).unwrap();
        assert_eq!(verdicts, vec![true; seeds.len()]);
    }

    #[test]
    fn test_formula_without_variables() {
        let qbf = Qbf::new();
        let prover = honest(&qbf);
        assert_eq!(prover.value_of_entire_polynomial(), 1);
        assert!(run_verifier(&qbf, &prover, prover.prime(), 0, &mut NoopObserver).unwrap());
    }

    #[test]
    fn test_unsupported_primes_are_reported() {
        let qbf = formulas::simple_equality();
        let prover = honest(&qbf);
        for prime in [0, 1, 2, 4, 9] {
            let err = run_verifier(&qbf, &prover, prime, 1, &mut NoopObserver).unwrap_err();
            assert_eq!(err, ProtocolViolation::UnsupportedPrime(prime));
        }
        let err = run_many(&qbf, &prover, 2, &[0, 1]).unwrap_err();
        assert_eq!(err, ProtocolViolation::UnsupportedPrime(2));
    }

    #[test]
    fn test_completeness_with_prime_near_word_size() {
        let qbf = formulas::default_example();
        let prover = HonestProver::with_prime_lower_bound(&qbf, u64::MAX - (1 << 40)).unwrap();
        assert!(prover.prime() > 1 << 63);
        for seed in 0..20 {
            assert!(run_verifier(&qbf, &prover, prover.prime(), seed, &mut NoopObserver).unwrap());
        }
    }
}
