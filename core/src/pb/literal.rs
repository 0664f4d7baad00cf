//! Signed literals

use crate::naming;
use std::fmt;

/// An identifier together with its polarity
///
/// Rendered as `name` or `~name` in the certificate stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    name: String,
    negated: bool,
}

impl Literal {
    /// Positive literal for an identifier
    pub fn pos(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: false,
        }
    }

    /// Negative literal for an identifier
    pub fn neg(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: true,
        }
    }

    /// Flip the polarity; `l.negate().negate() == l`
    pub fn negate(&self) -> Self {
        Self {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }

    /// Same polarity over the next-state copy of the identifier
    pub fn prime(&self) -> Self {
        Self {
            name: naming::primed(&self.name),
            negated: self.negated,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Truth value of this literal given the value of its identifier
    pub fn holds(&self, variable_value: bool) -> bool {
        variable_value != self.negated
    }
}

impl From<String> for Literal {
    fn from(name: String) -> Self {
        Literal::pos(name)
    }
}

impl From<&str> for Literal {
    fn from(name: &str) -> Self {
        Literal::pos(name)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_involution() {
        let lit = Literal::pos("var_0_1");
        assert_eq!(lit.negate().negate(), lit);
        assert_eq!(lit.negate(), Literal::neg("var_0_1"));

        let neg = Literal::neg("goal");
        assert_eq!(neg.negate().negate(), neg);
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::pos("op_0").to_string(), "op_0");
        assert_eq!(Literal::neg("op_0").to_string(), "~op_0");
    }

    #[test]
    fn test_prime_keeps_polarity() {
        let lit = Literal::neg("var_2_0").prime();
        assert_eq!(lit.to_string(), "~prime^var_2_0");
        assert!(lit.is_negated());
        assert_eq!(lit.name(), "prime^var_2_0");
    }

    #[test]
    fn test_holds() {
        assert!(Literal::pos("x").holds(true));
        assert!(!Literal::pos("x").holds(false));
        assert!(Literal::neg("x").holds(false));
        assert!(!Literal::neg("x").holds(true));
    }
}
