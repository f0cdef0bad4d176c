//! Sample formulas used by the CLI and the test-suite.
//!
//! Each constructor only uses ids it has just declared, so construction
//! cannot fail; errors from [`Qbf`] therefore never surface here.

use crate::qbf::Quantifier::{Existential as E, Universal as A};
use crate::qbf::{Qbf, Quantifier};
use rand::Rng;

fn build(prefix: &[(Quantifier, &str)], clauses: &[&[i64]]) -> Qbf {
    let mut qbf = Qbf::new();
    for (idx, &(quantifier, name)) in prefix.iter().enumerate() {
        qbf.add_variable(idx + 1, quantifier, name)
            .unwrap_or_else(|err| unreachable!("sequential ids are always valid: {err}"));
    }
    for clause in clauses {
        qbf.add_clause(clause.iter().copied())
            .unwrap_or_else(|err| unreachable!("sample clauses use declared ids: {err}"));
    }
    qbf
}

/// `∃x ∀y ∃z ∀w : (x ∨ y ∨ ¬z) ∧ (¬x ∨ ¬y ∨ ¬w) ∧ (¬y ∨ w ∨ z)`.
pub fn default_example() -> Qbf {
    build(
        &[(E, "x"), (A, "y"), (E, "z"), (A, "w")],
        &[&[1, 2, -3], &[-1, -2, -4], &[-2, 4, 3]],
    )
}

/// `∀x ∃y : (x ∨ ¬y) ∧ (¬x ∨ y)`; `y` is forced to equal `x`, so it is true.
pub fn simple_equality() -> Qbf {
    build(&[(A, "x"), (E, "y")], &[&[1, -2], &[-1, 2]])
}

/// [`simple_equality`] plus the clause `(x ∨ y)`, which fails for `x = 0`.
pub fn simple_equality_unsat() -> Qbf {
    build(&[(A, "x"), (E, "y")], &[&[1, -2], &[-1, 2], &[1, 2]])
}

/// `∀x ∃y ∀z : (x ∨ ¬y ∨ z) ∧ (¬x ∨ y ∨ z)`.
pub fn extended_equality() -> Qbf {
    build(
        &[(A, "x"), (E, "y"), (A, "z")],
        &[&[1, -2, 3], &[-1, 2, 3]],
    )
}

/// [`extended_equality`] with `(x ∨ y)` added, which makes it false.
pub fn extended_equality_unsat() -> Qbf {
    build(
        &[(A, "x"), (E, "y"), (A, "z")],
        &[&[1, -2, 3], &[-1, 2, 3], &[1, 2]],
    )
}

/// A single clause `(x₁ ∨ … ∨ xₙ)` over `n` existential variables.
pub fn single_clause_or(n: usize) -> Qbf {
    let names: Vec<String> = (1..=n).map(|i| format!("x{i}")).collect();
    let prefix: Vec<(Quantifier, &str)> =
        names.iter().map(|name| (E, name.as_str())).collect();
    let clause: Vec<i64> = (1..=n as i64).collect();
    build(&prefix, &[clause.as_slice()])
}

/// `∀x ∀y ∀z ∀w : (x ∨ ¬x)`.
pub fn forall_tautology() -> Qbf {
    build(
        &[(A, "x"), (A, "y"), (A, "z"), (A, "w")],
        &[&[1, -1]],
    )
}

/// A five-variable formula whose fully quantified polynomial equals 37,
/// the least prime above `2⁵`.
pub fn prime_eval() -> Qbf {
    build(
        &[(E, "x"), (A, "y"), (E, "z"), (E, "u"), (E, "w")],
        &[&[1, -3], &[-3, -4, -5], &[-1, -2, -4, -5], &[-2, -3]],
    )
}

/// A random formula with `n` variables and `clauses` clauses of up to
/// three literals each.
pub fn random<R: Rng>(rng: &mut R, n: usize, clauses: usize) -> Qbf {
    let mut qbf = Qbf::new();
    for id in 1..=n {
        let quantifier = if rng.gen_bool(0.5) { A } else { E };
        qbf.add_variable(id, quantifier, format!("x{id}"))
            .unwrap_or_else(|err| unreachable!("sequential ids are always valid: {err}"));
    }
    if n == 0 {
        return qbf;
    }
    for _ in 0..clauses {
        let width = rng.gen_range(1..=3);
        let literals: Vec<i64> = (0..width)
            .map(|_| {
                let v = rng.gen_range(1..=n) as i64;
                if rng.gen_bool(0.5) {
                    -v
                } else {
                    v
                }
            })
            .collect();
        qbf.add_clause(literals)
            .unwrap_or_else(|err| unreachable!("random literals use declared ids: {err}"));
    }
    qbf
}

/// Looks up a sample formula by name.
pub fn by_name(name: &str) -> Option<Qbf> {
    let qbf = match name {
        "default" => default_example(),
        "equality" => simple_equality(),
        "equality-unsat" => simple_equality_unsat(),
        "extended-equality" => extended_equality(),
        "extended-equality-unsat" => extended_equality_unsat(),
        "tautology" => forall_tautology(),
        "prime-eval" => prime_eval(),
        other => {
            let n = other.strip_prefix("or-")?.parse().ok()?;
            single_clause_or(n)
        }
    };
    Some(qbf)
}

/// Names accepted by [`by_name`]; `or-N` selects [`single_clause_or`].
pub const NAMES: &[&str] = &[
    "default",
    "equality",
    "equality-unsat",
    "extended-equality",
    "extended-equality-unsat",
    "tautology",
    "prime-eval",
    "or-N",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_truth_values() {
        assert!(default_example().is_true());
        assert!(simple_equality().is_true());
        assert!(!simple_equality_unsat().is_true());
        assert!(extended_equality().is_true());
        assert!(!extended_equality_unsat().is_true());
        assert!(single_clause_or(5).is_true());
        assert!(forall_tautology().is_true());
        assert!(prime_eval().is_true());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("equality"), Some(simple_equality()));
        assert_eq!(by_name("or-3"), Some(single_clause_or(3)));
        assert_eq!(by_name("or-x"), None);
        assert_eq!(by_name("missing"), None);
    }

    #[test]
    fn test_random_formula_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(11);
        let qbf = random(&mut rng, 4, 6);
        assert_eq!(qbf.variable_count(), 4);
        assert_eq!(qbf.clause_count(), 6);
    }
}
