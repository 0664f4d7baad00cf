//! Variable/value facts and partial assignments
//!
//! A fact pins one finite-domain variable to one value. Conditions are sorted
//! lists of facts that mention each variable at most once.

use crate::naming;
use crate::pb::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Atomic fact `var = value`
///
/// Ordered by `(var, value)`, which is the canonical order of conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fact {
    pub var: usize,
    pub value: usize,
}

impl Fact {
    pub fn new(var: usize, value: usize) -> Self {
        Self { var, value }
    }

    /// Proxy literal `var_<var>_<value>`
    pub fn literal(&self) -> Literal {
        Literal::pos(naming::value_fact(self.var, self.value))
    }

    /// Next-state proxy literal `prime^var_<var>_<value>`
    pub fn primed_literal(&self) -> Literal {
        self.literal().prime()
    }
}

impl From<(usize, usize)> for Fact {
    fn from((var, value): (usize, usize)) -> Self {
        Fact::new(var, value)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}: {}", self.var, self.value)
    }
}

/// Partial assignment, kept sorted by variable
pub type Condition = Vec<Fact>;

/// Build a sorted condition from `(var, value)` pairs
pub fn condition<I, F>(facts: I) -> Condition
where
    I: IntoIterator<Item = F>,
    F: Into<Fact>,
{
    let mut facts: Condition = facts.into_iter().map(Into::into).collect();
    facts.sort();
    facts
}

/// Proxy literals of every fact in a condition
pub fn literals(facts: &[Fact]) -> Vec<Literal> {
    facts.iter().map(Fact::literal).collect()
}

/// Next-state proxy literals of every fact in a condition
pub fn primed_literals(facts: &[Fact]) -> Vec<Literal> {
    facts.iter().map(Fact::primed_literal).collect()
}
