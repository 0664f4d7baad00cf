//! Weighted inequalities over literals

use super::literal::Literal;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// One `coeff * literal` summand
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    pub coeff: BigUint,
    pub literal: Literal,
}

impl Term {
    pub fn new(coeff: impl Into<BigUint>, literal: Literal) -> Self {
        Self {
            coeff: coeff.into(),
            literal,
        }
    }

    /// Unit-weight term
    pub fn unit(literal: Literal) -> Self {
        Self {
            coeff: BigUint::one(),
            literal,
        }
    }
}

/// Pseudo-Boolean inequality `Σ coeff * literal >= bound`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub terms: Vec<Term>,
    pub bound: BigUint,
}

impl Constraint {
    pub fn new(terms: Vec<Term>, bound: impl Into<BigUint>) -> Self {
        Self {
            terms,
            bound: bound.into(),
        }
    }

    /// Clause `l_1 + ... + l_n >= 1`
    pub fn clause(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            terms: literals.into_iter().map(Term::unit).collect(),
            bound: BigUint::one(),
        }
    }

    /// Prepend `1 literal`, relaxing the constraint whenever `literal` holds
    pub fn weaken_by(mut self, literal: Literal) -> Self {
        self.terms.insert(0, Term::unit(literal));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any term mentions `name` (either polarity)
    pub fn mentions(&self, name: &str) -> bool {
        self.terms.iter().any(|t| t.literal.name() == name)
    }

    /// Evaluate under an assignment of identifiers to truth values
    pub fn is_satisfied_by<F>(&self, assignment: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let lhs = self
            .terms
            .iter()
            .filter(|t| t.literal.holds(assignment(t.literal.name())))
            .fold(BigUint::zero(), |acc, t| acc + &t.coeff);
        lhs >= self.bound
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            write!(f, "{} {} ", term.coeff, term.literal)?;
        }
        write!(f, ">= {} ;", self.bound)
    }
}
