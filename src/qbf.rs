//! Quantified Boolean formulas in prenex conjunctive normal form.
//!
//! A [`Qbf`] is an ordered list of quantified variables followed by a
//! matrix of clauses.  The quantifier prefix is exactly the variable-id
//! order: `x₁` is the outermost variable, `xₙ` the innermost.
//!
//! Literals follow the DIMACS convention: the magnitude is the variable id
//! and a negative sign negates it.

use crate::error::ValidationError;
use crate::polynomial::Polynomial;
use crate::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Default soundness parameter, in bits, used to size the protocol field.
pub const DEFAULT_SOUNDNESS_BITS: u32 = 32;

/// Largest lower bound handed to the prime search.
pub const MAX_PRIME_LOWER_BOUND: u64 = 1 << 62;

/// Quantifier attached to a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    /// `∀`: the matrix must hold for both values.
    Universal,
    /// `∃`: the matrix must hold for at least one value.
    Existential,
}

impl Quantifier {
    /// Unicode symbol of the quantifier.
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantifier::Universal => "∀",
            Quantifier::Existential => "∃",
        }
    }
}

/// A quantified variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable id, also the index of its polynomial indeterminate.
    pub id: usize,
    /// Quantifier binding the variable.
    pub quantifier: Quantifier,
    /// Display name.
    pub name: String,
}

/// A disjunction of literals.
pub type Clause = BTreeSet<i64>;

/// A quantified Boolean formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qbf {
    variables: Vec<Variable>,
    clauses: Vec<Clause>,
}

fn literal_variable(literal: i64) -> usize {
    literal.unsigned_abs() as usize
}

impl Qbf {
    /// Creates an empty formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the variable `id`, or overwrites it if it already exists.
    ///
    /// `id` must be at least 1 and at most one past the current count.
    pub fn add_variable(
        &mut self,
        id: usize,
        quantifier: Quantifier,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        if id == 0 {
            return Err(ValidationError::ZeroVariableId);
        }
        let count = self.variables.len();
        let variable = Variable {
            id,
            quantifier,
            name: name.into(),
        };
        if id == count + 1 {
            self.variables.push(variable);
        } else if id <= count {
            self.variables[id - 1] = variable;
        } else {
            return Err(ValidationError::VariableGap { id, count });
        }
        Ok(())
    }

    /// Appends a clause.  Fails without modifying the formula if a literal is
    /// zero or references an undefined variable.
    pub fn add_clause<I>(&mut self, literals: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = i64>,
    {
        let clause: Clause = literals.into_iter().collect();
        for &literal in &clause {
            if literal == 0 {
                return Err(ValidationError::ZeroLiteral);
            }
            let v = literal_variable(literal);
            if v > self.variables.len() {
                return Err(ValidationError::UndefinedVariable(v));
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The variables in quantifier order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The clause matrix.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Looks up variable `id`.
    pub fn variable(&self, id: usize) -> Option<&Variable> {
        id.checked_sub(1).and_then(|idx| self.variables.get(idx))
    }

    /// Quantifier of variable `id`.
    pub fn quantifier(&self, id: usize) -> Option<Quantifier> {
        self.variable(id).map(|v| v.quantifier)
    }

    /// Display name of variable `id`, falling back to `x{id}`.
    pub fn name(&self, id: usize) -> String {
        self.variable(id)
            .map(|v| v.name.clone())
            .unwrap_or_else(|| format!("x{id}"))
    }

    /// Evaluates the matrix under a Boolean assignment (`assignment[v - 1]`).
    pub fn evaluate_matrix(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|&literal| {
                let value = assignment[literal_variable(literal) - 1];
                if literal > 0 {
                    value
                } else {
                    !value
                }
            })
        })
    }

    /// Decides the formula by exhaustive expansion of the quantifier prefix.
    ///
    /// Exponential in the number of variables; intended as a reference for
    /// small formulas.
    pub fn is_true(&self) -> bool {
        let mut assignment = vec![false; self.variables.len()];
        self.decide_from(0, &mut assignment)
    }

    fn decide_from(&self, depth: usize, assignment: &mut [bool]) -> bool {
        if depth == self.variables.len() {
            return self.evaluate_matrix(assignment);
        }
        assignment[depth] = false;
        let low = self.decide_from(depth + 1, assignment);
        match self.variables[depth].quantifier {
            Quantifier::Universal if !low => return false,
            Quantifier::Existential if low => return true,
            _ => {}
        }
        assignment[depth] = true;
        self.decide_from(depth + 1, assignment)
    }

    /// Builds `P = Π_clauses (1 − Π_literals t(lit))` where a positive literal
    /// contributes `1 − x` and a negative literal contributes `x`.
    ///
    /// On every Boolean point `P` is 1 if the matrix is satisfied and 0
    /// otherwise.
    pub fn arithmetize(&self) -> Polynomial {
        self.clauses.iter().fold(Polynomial::one(), |acc, clause| {
            let falsified = clause.iter().fold(Polynomial::one(), |prod, &literal| {
                &prod * &literal_factor(literal)
            });
            &acc * &(&Polynomial::one() - &falsified)
        })
    }

    /// Evaluates the arithmetization at a field point (`point[v - 1]`)
    /// without expanding the product.
    pub fn arithmetized_value(&self, field: &Field, point: &[u64]) -> u64 {
        self.clauses.iter().fold(1u64, |acc, clause| {
            let falsified = clause.iter().fold(1u64, |prod, &literal| {
                let x = point[literal_variable(literal) - 1];
                let factor = if literal > 0 { field.sub(1, x) } else { x };
                field.mul(prod, factor)
            });
            field.mul(acc, field.sub(1, falsified))
        })
    }

    /// Degree of the arithmetization in `x_v`.
    pub fn arithmetized_degree(&self, v: usize) -> usize {
        self.clauses
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .filter(|&&literal| literal_variable(literal) == v)
                    .count()
            })
            .sum()
    }

    /// Upper bound on the degree of any univariate polynomial exchanged in a
    /// protocol round.
    ///
    /// Linearized polynomials are affine in every variable, and a universal
    /// step at most doubles that, so only the raw arithmetization (first
    /// linearization of `xₙ`) can exceed 2.
    pub fn max_round_degree(&self) -> usize {
        (1..=self.variables.len())
            .map(|v| self.arithmetized_degree(v))
            .max()
            .unwrap_or(0)
            .max(2)
    }

    /// Number of protocol rounds, handshake excluded: `Σ_{v=1}^{n} (1 + v)`.
    pub fn round_count(&self) -> usize {
        let n = self.variables.len();
        n + n * (n + 1) / 2
    }

    /// Lower bound for the protocol prime with the default soundness parameter.
    pub fn field_prime_lower_bound(&self) -> u64 {
        self.field_prime_lower_bound_with(DEFAULT_SOUNDNESS_BITS)
    }

    /// Lower bound for the protocol prime: `max(2ⁿ, R · d · 2^λ)`.
    ///
    /// `R` is [`round_count`](Self::round_count), `d` is
    /// [`max_round_degree`](Self::max_round_degree) and `λ` is
    /// `soundness_bits`.  A prime above this bound keeps the chance that a
    /// dishonest prover survives every round below `2^-λ`.  The result is
    /// capped at 2⁶².
    pub fn field_prime_lower_bound_with(&self, soundness_bits: u32) -> u64 {
        let n = self.variables.len() as u32;
        let hypercube = 1u128.checked_shl(n).unwrap_or(u128::MAX);
        let rounds = self.round_count().max(1) as u128;
        let degree = self.max_round_degree() as u128;
        let soundness = 1u128
            .checked_shl(soundness_bits)
            .and_then(|scale| scale.checked_mul(rounds * degree))
            .unwrap_or(u128::MAX);
        hypercube
            .max(soundness)
            .max(3)
            .min(MAX_PRIME_LOWER_BOUND as u128) as u64
    }
}

fn literal_factor(literal: i64) -> Polynomial {
    let x = Polynomial::variable(literal_variable(literal));
    if literal > 0 {
        &Polynomial::one() - &x
    } else {
        x
    }
}

impl fmt::Display for Qbf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: Vec<String> = self
            .variables
            .iter()
            .map(|v| format!("{}{}", v.quantifier.symbol(), v.name))
            .collect();
        write!(f, "{} :", prefix.join(" "))?;
        let clauses: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| {
                let mut literals: Vec<i64> = clause.iter().copied().collect();
                literals.sort_by_key(|l| (l.unsigned_abs(), *l < 0));
                let rendered: Vec<String> = literals
                    .iter()
                    .map(|&l| {
                        let name = self.name(literal_variable(l));
                        if l < 0 {
                            format!("¬{name}")
                        } else {
                            name
                        }
                    })
                    .collect();
                format!("({})", rendered.join(" ∨ "))
            })
            .collect();
        if clauses.is_empty() {
            write!(f, " ⊤")
        } else {
            write!(f, " {}", clauses.join(" ∧ "))
        }
    }
}
