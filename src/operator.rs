//! Canonical indexing of protocol steps.
//!
//! Every round of the protocol applies one operator to the polynomial in
//! force: a quantifier step `(v, 0)` eliminating `x_v`, or a linearization
//! step `(v, lv)` making the polynomial affine in `x_lv` while `x_v` is
//! being eliminated.  The derived ordering on `(variable, linearized)` is
//! exactly the canonical round order:
//!
//! ```text
//! (1,0) (1,1) (2,0) (2,1) (2,2) (3,0) (3,1) (3,2) (3,3) …
//! ```

use crate::qbf::{Qbf, Quantifier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One protocol step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProofOperator {
    variable: usize,
    linearized: usize,
}

impl ProofOperator {
    /// Quantifier step eliminating `x_v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is zero.
    pub fn quantifier(v: usize) -> Self {
        assert!(v >= 1, "variables are numbered from 1");
        Self {
            variable: v,
            linearized: 0,
        }
    }

    /// Linearization of `x_lv` while eliminating `x_v`.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= lv <= v`.
    pub fn linearization(v: usize, lv: usize) -> Self {
        assert!(
            lv >= 1 && lv <= v,
            "linearized variable must lie in 1..=v"
        );
        Self {
            variable: v,
            linearized: lv,
        }
    }

    /// First operator of every protocol run, `(1, 0)`.
    pub fn first() -> Self {
        Self::quantifier(1)
    }

    /// Terminal operator `(n, n)` for a formula with `n >= 1` variables.
    pub fn last(n: usize) -> Self {
        Self::linearization(n, n)
    }

    /// Variable being eliminated.
    pub fn variable(&self) -> usize {
        self.variable
    }

    /// Linearized variable, or 0 for a quantifier step.
    pub fn linearized(&self) -> usize {
        self.linearized
    }

    /// Returns `true` for a quantifier step.
    pub fn is_quantifier(&self) -> bool {
        self.linearized == 0
    }

    /// Returns `true` if this step linearizes `x_v`.
    pub fn is_linearization_of(&self, v: usize) -> bool {
        self.linearized != 0 && self.linearized == v
    }

    /// The variable the round's univariate answer is expressed in.
    pub fn active_variable(&self) -> usize {
        if self.is_quantifier() {
            self.variable
        } else {
            self.linearized
        }
    }

    /// Successor in canonical order for a formula with `n` variables.
    pub fn next(&self, n: usize) -> Option<Self> {
        if self.linearized < self.variable {
            Some(Self::linearization(self.variable, self.linearized + 1))
        } else if self.variable < n {
            Some(Self::quantifier(self.variable + 1))
        } else {
            None
        }
    }

    /// 1-based position of this round; the handshake is round 0.
    pub fn round_number(&self) -> usize {
        let before = self.variable - 1;
        before + before * (before + 1) / 2 + self.linearized + 1
    }

    /// All operators for a formula with `n` variables, in canonical order.
    pub fn sequence(n: usize) -> impl Iterator<Item = ProofOperator> {
        let first = (n >= 1).then(Self::first);
        std::iter::successors(first, move |op| op.next(n))
    }

    /// Short label such as `A_x`, `E_y` or `L_x`.
    pub fn label(&self, qbf: &Qbf) -> String {
        if !self.is_quantifier() {
            return format!("L_{}", qbf.name(self.linearized));
        }
        let prefix = match qbf.quantifier(self.variable) {
            Some(Quantifier::Universal) => "A",
            Some(Quantifier::Existential) => "E",
            None => "?",
        };
        format!("{prefix}_{}", qbf.name(self.variable))
    }
}

impl fmt::Display for ProofOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.variable, self.linearized)
    }
}
