//! Protocol event hooks.
//!
//! The verifier reports every step to a [`ProtocolObserver`].  Observers are
//! passive: they cannot influence the run, and every method has a no-op
//! default so implementations only override what they need.

use crate::operator::ProofOperator;
use crate::polynomial::UnivariatePolynomial;
use crate::qbf::Qbf;
use crate::verifier::{RandomChoices, Rejection};
use tracing::{debug, info, warn};

/// Receives protocol events in the order they happen.
pub trait ProtocolObserver {
    /// The prover announced the field prime and its opening claim.
    fn on_handshake(&mut self, _prime: u64, _claim: u64) {}

    /// A round passed its check and a fresh challenge was drawn.
    ///
    /// `random_choices` already holds the new challenge for the active
    /// variable.  For linearization rounds `previous_linearized_value` is the
    /// choice that challenge replaced.
    fn on_new_round(
        &mut self,
        _operator: ProofOperator,
        _polynomial: &UnivariatePolynomial,
        _previous_claim: u64,
        _random_choices: &RandomChoices,
        _claim: u64,
        _previous_linearized_value: Option<u64>,
    ) {
    }

    /// A check failed.  Always followed by `on_terminated(false)`.
    fn on_rejected(&mut self, _rejection: &Rejection) {}

    /// The run ended.
    fn on_terminated(&mut self, _accepted: bool) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProtocolObserver for NoopObserver {}

/// Narrates a run through `tracing`, in the verifier's voice.
#[derive(Debug, Clone)]
pub struct TracingObserver<'a> {
    qbf: &'a Qbf,
}

impl<'a> TracingObserver<'a> {
    /// Observer labelling operators with the variable names of `qbf`.
    pub fn new(qbf: &'a Qbf) -> Self {
        Self { qbf }
    }
}

impl ProtocolObserver for TracingObserver<'_> {
    fn on_handshake(&mut self, prime: u64, claim: u64) {
        info!("[P] working over F_{prime}, value of the quantified formula is {claim}");
        if claim == 0 {
            info!("[V] prover concedes the formula is false");
        }
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
        let label = operator.label(self.qbf);
        let name = self.qbf.name(operator.active_variable());
        info!(
            "[V] round {} {label}: s({name}) = {polynomial} checks against c = {previous_claim}",
            operator.round_number()
        );
        if let Some(old) = previous_linearized_value {
            debug!("[V] {name} was {old}");
        }
        let challenge = random_choices
            .get(operator.active_variable())
            .unwrap_or_default();
        info!("[V] chose {name} = {challenge}, new claim c = {claim}");
    }

    fn on_rejected(&mut self, rejection: &Rejection) {
        warn!("[V] {rejection}");
    }

    fn on_terminated(&mut self, accepted: bool) {
        if accepted {
            info!("[V] accepted");
        } else {
            info!("[V] rejected");
        }
    }
}
