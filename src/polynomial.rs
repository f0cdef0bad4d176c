//! Sparse polynomial arithmetic for arithmetized formulas.
//!
//! Three representations are used along the protocol pipeline:
//!
//! * [`Polynomial`] keeps exact integer coefficients.  The prover builds its
//!   whole operator table with it, so the ground value of the fully
//!   quantified polynomial is known exactly before any prime is fixed.
//! * [`FieldPolynomial`] is the same sparse shape with coefficients reduced
//!   modulo a [`Field`].  Table entries are stored in this form and partially
//!   evaluated at the verifier's random choices.
//! * [`UnivariatePolynomial`] is the dense answer sent for a single round.
//!
//! Indeterminates are identified by the variable id (`1..=n`) of the formula
//! they arithmetize.  Monomials keep their exponents sorted by variable, so
//! two polynomials with equal values have equal term maps.

use crate::Field;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A product of indeterminates with positive exponents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Monomial(Vec<(usize, u32)>);

impl Monomial {
    /// The empty product.
    pub fn one() -> Self {
        Monomial(Vec::new())
    }

    /// The monomial `x_v`.
    pub fn variable(v: usize) -> Self {
        Monomial(vec![(v, 1)])
    }

    /// Returns `true` for the empty product.
    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `(variable, exponent)` pairs sorted by variable.
    pub fn powers(&self) -> &[(usize, u32)] {
        &self.0
    }

    /// Exponent of `x_v` in this monomial.
    pub fn degree_in(&self, v: usize) -> u32 {
        self.0
            .binary_search_by_key(&v, |&(var, _)| var)
            .map(|idx| self.0[idx].1)
            .unwrap_or(0)
    }

    /// Splits `x_v^e` off the monomial, returning `e` and the remaining factor.
    pub fn split(&self, v: usize) -> (u32, Monomial) {
        match self.0.binary_search_by_key(&v, |&(var, _)| var) {
            Ok(idx) => {
                let mut rest = self.0.clone();
                let (_, e) = rest.remove(idx);
                (e, Monomial(rest))
            }
            Err(_) => (0, self.clone()),
        }
    }

    /// Multiplies two monomials by merging their exponent lists.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut out = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            let (va, ea) = self.0[i];
            let (vb, eb) = other.0[j];
            if va == vb {
                out.push((va, ea + eb));
                i += 1;
                j += 1;
            } else if va < vb {
                out.push((va, ea));
                i += 1;
            } else {
                out.push((vb, eb));
                j += 1;
            }
        }
        out.extend_from_slice(&self.0[i..]);
        out.extend_from_slice(&other.0[j..]);
        Monomial(out)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &(v, e)) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, "*")?;
            }
            if e == 1 {
                write!(f, "x{v}")?;
            } else {
                write!(f, "x{v}^{e}")?;
            }
        }
        Ok(())
    }
}

/// Sparse multivariate polynomial with integer coefficients.
///
/// Zero coefficients are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, BigInt>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// A constant polynomial.
    pub fn constant(c: impl Into<BigInt>) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::one(), c.into());
        poly
    }

    /// The polynomial `x_v`.
    pub fn variable(v: usize) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::variable(v), BigInt::one());
        poly
    }

    /// Returns `true` if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(monomial, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &BigInt)> {
        self.terms.iter()
    }

    /// Number of stored terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    fn add_term(&mut self, monomial: Monomial, coeff: BigInt) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += coeff;
                if slot.get().is_zero() {
                    slot.remove();
                }
            }
        }
    }

    /// Variables the polynomial depends on.
    pub fn variables(&self) -> BTreeSet<usize> {
        self.terms
            .keys()
            .flat_map(|m| m.powers().iter().map(|&(v, _)| v))
            .collect()
    }

    /// Degree of the polynomial in `x_v`.
    pub fn degree_in(&self, v: usize) -> u32 {
        self.terms.keys().map(|m| m.degree_in(v)).max().unwrap_or(0)
    }

    /// Returns the constant value if the polynomial has no indeterminates.
    pub fn as_constant(&self) -> Option<BigInt> {
        match self.terms.len() {
            0 => Some(BigInt::zero()),
            1 => self
                .terms
                .iter()
                .next()
                .filter(|(m, _)| m.is_constant())
                .map(|(_, c)| c.clone()),
            _ => None,
        }
    }

    /// Fixes `x_v := value`.
    pub fn substitute(&self, v: usize, value: &BigInt) -> Polynomial {
        let mut out = Polynomial::zero();
        for (monomial, coeff) in &self.terms {
            let (e, rest) = monomial.split(v);
            if e == 0 {
                out.add_term(rest, coeff.clone());
            } else {
                out.add_term(rest, coeff * value.pow(e));
            }
        }
        out
    }

    /// Replaces the dependence on `x_v` by its affine interpolant through
    /// `x_v = 0` and `x_v = 1`: `x_v·P|₁ + (1 − x_v)·P|₀`.
    pub fn linearize(&self, v: usize) -> Polynomial {
        let at_zero = self.substitute(v, &BigInt::zero());
        let at_one = self.substitute(v, &BigInt::one());
        &at_zero + &(&Polynomial::variable(v) * &(&at_one - &at_zero))
    }

    /// Eliminates `x_v` universally: `P|₀ · P|₁`.
    pub fn forall(&self, v: usize) -> Polynomial {
        &self.substitute(v, &BigInt::zero()) * &self.substitute(v, &BigInt::one())
    }

    /// Eliminates `x_v` existentially: `P|₀ + P|₁`.
    pub fn exists(&self, v: usize) -> Polynomial {
        &self.substitute(v, &BigInt::zero()) + &self.substitute(v, &BigInt::one())
    }

    /// Evaluates the polynomial with `x_v := point[v - 1]`.
    ///
    /// # Panics
    ///
    /// Panics if a variable has no entry in `point`.
    pub fn evaluate(&self, point: &[i64]) -> BigInt {
        self.terms
            .iter()
            .map(|(monomial, coeff)| {
                monomial
                    .powers()
                    .iter()
                    .fold(coeff.clone(), |acc, &(v, e)| {
                        acc * BigInt::from(point[v - 1]).pow(e)
                    })
            })
            .sum()
    }

    /// Reduces every coefficient modulo the field prime.
    pub fn reduce(&self, field: &Field) -> FieldPolynomial {
        let mut out = FieldPolynomial::zero(*field);
        for (monomial, coeff) in &self.terms {
            out.add_term(monomial.clone(), field.reduce_bigint(coeff));
        }
        out
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (monomial, coeff) in &rhs.terms {
            out.add_term(monomial.clone(), coeff.clone());
        }
        out
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = self.clone();
        for (monomial, coeff) in &rhs.terms {
            out.add_term(monomial.clone(), -coeff);
        }
        out
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        let mut out = Polynomial::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.add_term(ma.mul(mb), ca * cb);
            }
        }
        out
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, (monomial, coeff)) in self.terms.iter().rev().enumerate() {
            let magnitude = coeff.abs();
            if idx == 0 {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write_term(f, &magnitude.to_string(), magnitude.is_one(), monomial)?;
        }
        Ok(())
    }
}

fn write_term(
    f: &mut fmt::Formatter<'_>,
    coeff: &str,
    coeff_is_one: bool,
    monomial: &Monomial,
) -> fmt::Result {
    if monomial.is_constant() {
        write!(f, "{coeff}")
    } else if coeff_is_one {
        write!(f, "{monomial}")
    } else {
        write!(f, "{coeff}*{monomial}")
    }
}

/// Sparse multivariate polynomial over a prime field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolynomial {
    field: Field,
    terms: BTreeMap<Monomial, u64>,
}

impl FieldPolynomial {
    /// The zero polynomial over `field`.
    pub fn zero(field: Field) -> Self {
        Self {
            field,
            terms: BTreeMap::new(),
        }
    }

    /// A constant polynomial.
    pub fn constant(field: Field, c: u64) -> Self {
        let mut poly = Self::zero(field);
        poly.add_term(Monomial::one(), c);
        poly
    }

    /// The polynomial `x_v`.
    pub fn variable(field: Field, v: usize) -> Self {
        let mut poly = Self::zero(field);
        poly.add_term(Monomial::variable(v), 1);
        poly
    }

    /// Field the coefficients live in.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns `true` if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(monomial, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &u64)> {
        self.terms.iter()
    }

    fn add_term(&mut self, monomial: Monomial, coeff: u64) {
        let coeff = self.field.reduce(coeff);
        if coeff == 0 {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = self.field.add(*slot.get(), coeff);
                if sum == 0 {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Variables the polynomial depends on.
    pub fn variables(&self) -> BTreeSet<usize> {
        self.terms
            .keys()
            .flat_map(|m| m.powers().iter().map(|&(v, _)| v))
            .collect()
    }

    /// Degree of the polynomial in `x_v`.
    pub fn degree_in(&self, v: usize) -> u32 {
        self.terms.keys().map(|m| m.degree_in(v)).max().unwrap_or(0)
    }

    /// Fixes `x_v := a`.
    pub fn substitute(&self, v: usize, a: u64) -> FieldPolynomial {
        let mut out = FieldPolynomial::zero(self.field);
        for (monomial, &coeff) in &self.terms {
            let (e, rest) = monomial.split(v);
            let scaled = self.field.mul(coeff, self.field.pow(a, e as u64));
            out.add_term(rest, scaled);
        }
        out
    }

    /// Evaluates the polynomial with `x_v := point[v - 1]`.
    ///
    /// # Panics
    ///
    /// Panics if a variable has no entry in `point`.
    pub fn evaluate(&self, point: &[u64]) -> u64 {
        let field = &self.field;
        self.terms.iter().fold(0u64, |acc, (monomial, &coeff)| {
            let term = monomial.powers().iter().fold(coeff, |t, &(v, e)| {
                field.mul(t, field.pow(point[v - 1], e as u64))
            });
            field.add(acc, term)
        })
    }

    /// Restricts the polynomial to dense univariate form in `x_v`.
    ///
    /// Returns `None` if any other variable is still present.  Constants are
    /// accepted and returned as degree-0 polynomials in `x_v`.
    pub fn to_univariate(&self, v: usize) -> Option<UnivariatePolynomial> {
        let degree = self.degree_in(v) as usize;
        let mut coefficients = vec![0u64; degree + 1];
        for (monomial, &coeff) in &self.terms {
            let (e, rest) = monomial.split(v);
            if !rest.is_constant() {
                return None;
            }
            coefficients[e as usize] = self.field.add(coefficients[e as usize], coeff);
        }
        Some(UnivariatePolynomial::new(self.field, v, coefficients))
    }
}

impl<'a> Add<&'a FieldPolynomial> for &'a FieldPolynomial {
    type Output = FieldPolynomial;

    fn add(self, rhs: &'a FieldPolynomial) -> FieldPolynomial {
        assert_eq!(self.field, rhs.field, "field mismatch");
        let mut out = self.clone();
        for (monomial, &coeff) in &rhs.terms {
            out.add_term(monomial.clone(), coeff);
        }
        out
    }
}

impl<'a> Mul<&'a FieldPolynomial> for &'a FieldPolynomial {
    type Output = FieldPolynomial;

    fn mul(self, rhs: &'a FieldPolynomial) -> FieldPolynomial {
        assert_eq!(self.field, rhs.field, "field mismatch");
        let mut out = FieldPolynomial::zero(self.field);
        for (ma, &ca) in &self.terms {
            for (mb, &cb) in &rhs.terms {
                out.add_term(ma.mul(mb), self.field.mul(ca, cb));
            }
        }
        out
    }
}

impl fmt::Display for FieldPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, (monomial, coeff)) in self.terms.iter().rev().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write_term(f, &coeff.to_string(), *coeff == 1, monomial)?;
        }
        Ok(())
    }
}

/// Dense univariate polynomial over a prime field.
///
/// `coefficients[i]` multiplies `x^i`; trailing zeros are trimmed so the
/// zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnivariatePolynomial {
    field: Field,
    variable: usize,
    coefficients: Vec<u64>,
}

impl UnivariatePolynomial {
    /// Creates a polynomial in `x_variable`, reducing and trimming the coefficients.
    pub fn new(field: Field, variable: usize, coefficients: Vec<u64>) -> Self {
        let mut coefficients: Vec<u64> =
            coefficients.into_iter().map(|c| field.reduce(c)).collect();
        while coefficients.last() == Some(&0) {
            coefficients.pop();
        }
        Self {
            field,
            variable,
            coefficients,
        }
    }

    /// A constant polynomial.
    pub fn constant(field: Field, variable: usize, c: u64) -> Self {
        Self::new(field, variable, vec![c])
    }

    /// Field the coefficients live in.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Variable id of the indeterminate.
    pub fn variable(&self) -> usize {
        self.variable
    }

    /// Coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    /// Degree of the polynomial; constants (including zero) have degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns `true` if the polynomial does not depend on its variable.
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    pub fn evaluate(&self, x: u64) -> u64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0u64, |acc, &c| self.field.add(self.field.mul(acc, x), c))
    }
}

impl<'a> Add<&'a UnivariatePolynomial> for &'a UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn add(self, rhs: &'a UnivariatePolynomial) -> UnivariatePolynomial {
        assert_eq!(self.field, rhs.field, "field mismatch");
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let coefficients = (0..len)
            .map(|i| {
                let a = self.coefficients.get(i).copied().unwrap_or(0);
                let b = rhs.coefficients.get(i).copied().unwrap_or(0);
                self.field.add(a, b)
            })
            .collect();
        UnivariatePolynomial::new(self.field, self.variable, coefficients)
    }
}

impl fmt::Display for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        for (power, &coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }
            if wrote {
                write!(f, " + ")?;
            }
            let monomial = match power {
                0 => Monomial::one(),
                e => Monomial(vec![(self.variable, e as u32)]),
            };
            write_term(f, &coeff.to_string(), coeff == 1, &monomial)?;
            wrote = true;
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn x(v: usize) -> Polynomial {
        Polynomial::variable(v)
    }

    #[test]
    fn test_monomial_mul_merges_exponents() {
        let a = Monomial(vec![(1, 2), (3, 1)]);
        let b = Monomial(vec![(2, 1), (3, 2)]);
        assert_eq!(a.mul(&b), Monomial(vec![(1, 2), (2, 1), (3, 3)]));
        assert_eq!(a.degree_in(3), 1);
        assert_eq!(a.degree_in(2), 0);
        let (e, rest) = a.split(1);
        assert_eq!(e, 2);
        assert_eq!(rest, Monomial(vec![(3, 1)]));
    }

    #[test]
    fn test_cancellation_removes_terms() {
        let p = &x(1) - &x(1);
        assert!(p.is_zero());
        assert_eq!(p.as_constant(), Some(BigInt::zero()));
        let q = &(&x(1) + &Polynomial::one()) * &(&Polynomial::one() - &x(1));
        // (1 + x)(1 - x) = 1 - x^2
        assert_eq!(q.num_terms(), 2);
        assert_eq!(q.degree_in(1), 2);
        assert_eq!(q.to_string(), "-x1^2 + 1");
    }

    #[test]
    fn test_linearize_preserves_boolean_points() {
        // x1^3 * x2 + 2 x1^2
        let p = &(&(&(&x(1) * &x(1)) * &x(1)) * &x(2))
            + &(&Polynomial::constant(2) * &(&x(1) * &x(1)));
        let lin = p.linearize(1);
        assert_eq!(lin.degree_in(1), 1);
        for a in 0..=1 {
            for b in 0..=1 {
                assert_eq!(lin.evaluate(&[a, b]), p.evaluate(&[a, b]));
            }
        }
    }

    #[test]
    fn test_quantifiers() {
        let p = &x(1) + &x(2);
        assert_eq!(p.exists(1), &(&x(2) + &x(2)) + &Polynomial::one());
        assert_eq!(p.forall(1), &(&x(2) * &x(2)) + &x(2));
        assert!(p.forall(1).forall(2).as_constant() == Some(BigInt::from(0)));
        assert!(p.exists(1).exists(2).as_constant() == Some(BigInt::from(4)));
    }

    #[test]
    fn test_to_univariate() {
        let field = Field::new(13);
        let p = (&(&x(1) * &x(2)) + &Polynomial::constant(5)).reduce(&field);
        assert!(p.to_univariate(2).is_none());
        let q = p.substitute(1, 3);
        let uni = q.to_univariate(2).expect("univariate in x2");
        assert_eq!(uni.coefficients(), &[5, 3]);
        assert_eq!(uni.evaluate(4), (5 + 12) % 13);
        let constant = FieldPolynomial::constant(field, 7).to_univariate(1).unwrap();
        assert!(constant.is_constant());
        assert_eq!(constant.evaluate(11), 7);
    }

    #[test]
    fn test_univariate_add_and_display() {
        let field = Field::new(7);
        let a = UnivariatePolynomial::new(field, 2, vec![1, 0, 3]);
        let b = UnivariatePolynomial::new(field, 2, vec![6, 1, 4]);
        let sum = &a + &b;
        assert_eq!(sum.coefficients(), &[0, 1]);
        assert_eq!(sum.degree(), 1);
        assert_eq!(a.to_string(), "3*x2^2 + 1");
        assert_eq!(UnivariatePolynomial::new(field, 1, vec![0, 0]).to_string(), "0");
    }

    fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec(
            (-50i64..50, prop::collection::vec((1usize..4, 1u32..3), 0..3)),
            0..6,
        )
        .prop_map(|terms| {
            terms.into_iter().fold(Polynomial::zero(), |acc, (c, powers)| {
                let term = powers
                    .into_iter()
                    .fold(Polynomial::constant(c), |t, (v, e)| {
                        (0..e).fold(t, |t, _| &t * &Polynomial::variable(v))
                    });
                &acc + &term
            })
        })
    }

    proptest! {
        #[test]
        fn prop_reduction_commutes_with_substitution(
            p in arb_polynomial(),
            v in 1usize..4,
            value in -30i64..30,
        ) {
            let field = Field::new(31);
            let lhs = p.substitute(v, &BigInt::from(value)).reduce(&field);
            let a = field.reduce_bigint(&BigInt::from(value));
            let rhs = p.reduce(&field).substitute(v, a);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn prop_reduction_is_a_ring_homomorphism(
            p in arb_polynomial(),
            q in arb_polynomial(),
        ) {
            let field = Field::new(29);
            prop_assert_eq!((&p * &q).reduce(&field), &p.reduce(&field) * &q.reduce(&field));
            prop_assert_eq!((&p + &q).reduce(&field), &p.reduce(&field) + &q.reduce(&field));
        }

        #[test]
        fn prop_evaluation_matches_reduced_evaluation(
            p in arb_polynomial(),
            point in prop::collection::vec(-20i64..20, 3),
        ) {
            let field = Field::new(101);
            let exact = field.reduce_bigint(&p.evaluate(&point));
            let reduced_point: Vec<u64> = point
                .iter()
                .map(|&c| field.reduce_bigint(&BigInt::from(c)))
                .collect();
            prop_assert_eq!(p.reduce(&field).evaluate(&reduced_point), exact);
        }

        #[test]
        fn prop_linearization_is_affine_and_agrees_on_cube(
            p in arb_polynomial(),
            v in 1usize..4,
        ) {
            let lin = p.linearize(v);
            prop_assert!(lin.degree_in(v) <= 1);
            for bits in 0..8i64 {
                let point = [bits & 1, (bits >> 1) & 1, (bits >> 2) & 1];
                prop_assert_eq!(lin.evaluate(&point), p.evaluate(&point));
            }
        }
    }
}
