//! Prover side of the protocol.
//!
//! The honest prover precomputes, for every [`ProofOperator`], the polynomial
//! in force just before that operator is applied.  The table is built by
//! walking the operators backwards from the arithmetized matrix:
//!
//! ```text
//! cur = P_φ
//! for v = n..1:
//!     for lv = v..1:  table[(v, lv)] = cur;  cur = L_lv(cur)
//!     table[(v, 0)] = cur;                   cur = Q_v(cur)
//! ```
//!
//! where `L_lv` is the multilinear extension step in `x_lv` and `Q_v` the
//! quantifier of `x_v` (product for `∀`, sum for `∃`).  The walk runs over
//! the integers so the final ground value is exact; the prime is fixed
//! afterwards and the whole table reduced once.

use crate::error::ProtocolViolation;
use crate::operator::ProofOperator;
use crate::polynomial::{FieldPolynomial, Polynomial, UnivariatePolynomial};
use crate::qbf::{Qbf, Quantifier};
use crate::verifier::RandomChoices;
use crate::{next_prime, Field};
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;
use tracing::debug;

/// Query interface the verifier drives.
///
/// Implementations other than [`HonestProver`] are useful for exercising the
/// verifier's soundness checks.
pub trait Prover {
    /// Field prime the prover's answers are reduced into.
    fn prime(&self) -> u64;

    /// Claimed value of the fully quantified polynomial.
    fn value_of_entire_polynomial(&self) -> u64;

    /// Polynomial for `operator`, with every resolved random choice
    /// substituted except the operator's active variable.
    fn operator_polynomial(
        &self,
        operator: ProofOperator,
        random_choices: &RandomChoices,
    ) -> Result<UnivariatePolynomial, ProtocolViolation>;
}

/// Prover that answers every query from a precomputed table.
#[derive(Debug, Clone)]
pub struct HonestProver {
    field: Field,
    raw_value: BigInt,
    value: u64,
    table: BTreeMap<ProofOperator, FieldPolynomial>,
}

impl HonestProver {
    /// Builds the prover using [`Qbf::field_prime_lower_bound`].
    pub fn new(qbf: &Qbf) -> Result<Self, ProtocolViolation> {
        Self::with_prime_lower_bound(qbf, qbf.field_prime_lower_bound())
    }

    /// Builds the prover, choosing the least prime `>= lower_bound` that does
    /// not divide a nonzero ground value.
    pub fn with_prime_lower_bound(
        qbf: &Qbf,
        lower_bound: u64,
    ) -> Result<Self, ProtocolViolation> {
        let (table, raw_value) = build_table(qbf)?;
        let prime = select_prime(&raw_value, lower_bound)?;
        let field = Field::new(prime);
        debug!(prime, raw_value = %raw_value, "fixed protocol field");
        let table = table
            .into_iter()
            .map(|(op, poly)| (op, poly.reduce(&field)))
            .collect();
        Ok(Self {
            field,
            value: field.reduce_bigint(&raw_value),
            raw_value,
            table,
        })
    }

    /// The protocol field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Exact integer value of the fully quantified polynomial.
    pub fn raw_value(&self) -> &BigInt {
        &self.raw_value
    }

    /// The reduced polynomial recorded for `operator`.
    pub fn polynomial(&self, operator: ProofOperator) -> Option<&FieldPolynomial> {
        self.table.get(&operator)
    }

    /// Operators with a recorded polynomial, in canonical order.
    pub fn operators(&self) -> impl Iterator<Item = ProofOperator> + '_ {
        self.table.keys().copied()
    }
}

impl Prover for HonestProver {
    fn prime(&self) -> u64 {
        self.field.modulus()
    }

    fn value_of_entire_polynomial(&self) -> u64 {
        self.value
    }

    fn operator_polynomial(
        &self,
        operator: ProofOperator,
        random_choices: &RandomChoices,
    ) -> Result<UnivariatePolynomial, ProtocolViolation> {
        let active = operator.active_variable();
        let mut poly = self
            .table
            .get(&operator)
            .cloned()
            .ok_or(ProtocolViolation::MissingOperator(operator))?;
        for (v, a) in random_choices.iter() {
            if v == active {
                continue;
            }
            poly = poly.substitute(v, a);
        }
        poly.to_univariate(active)
            .ok_or_else(|| ProtocolViolation::NotUnivariate {
                operator,
                expected: active,
                variables: poly.variables().into_iter().collect(),
            })
    }
}

fn build_table(
    qbf: &Qbf,
) -> Result<(BTreeMap<ProofOperator, Polynomial>, BigInt), ProtocolViolation> {
    let mut table = BTreeMap::new();
    let mut cur = qbf.arithmetize();
    debug!(terms = cur.num_terms(), polynomial = %cur, "arithmetized matrix");

    for variable in qbf.variables().iter().rev() {
        let v = variable.id;
        for lv in (1..=v).rev() {
            let op = ProofOperator::linearization(v, lv);
            debug!(operator = %op, polynomial = %cur, "recorded operator polynomial");
            let next = cur.linearize(lv);
            table.insert(op, cur);
            cur = next;
        }
        let op = ProofOperator::quantifier(v);
        debug!(operator = %op, polynomial = %cur, "recorded operator polynomial");
        table.insert(op, cur.clone());
        cur = match variable.quantifier {
            Quantifier::Universal => cur.forall(v),
            Quantifier::Existential => cur.exists(v),
        };
    }

    let raw_value = cur.as_constant().ok_or_else(|| {
        ProtocolViolation::NonGroundValue(cur.variables().into_iter().collect())
    })?;
    Ok((table, raw_value))
}

fn select_prime(raw_value: &BigInt, lower_bound: u64) -> Result<u64, ProtocolViolation> {
    let mut prime = next_prime(lower_bound.max(3))
        .ok_or(ProtocolViolation::PrimeSearchExhausted(lower_bound))?;
    if raw_value.is_zero() {
        return Ok(prime);
    }
    while (raw_value % BigInt::from(prime)).is_zero() {
        debug!(prime, "prime divides the ground value, advancing");
        let bound = prime.saturating_add(1);
        prime = next_prime(bound).ok_or(ProtocolViolation::PrimeSearchExhausted(bound))?;
    }
    Ok(prime)
}
