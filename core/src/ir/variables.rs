//! Finite-domain state variables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer code written for primary (non-derived) variables
pub const PRIMARY_LAYER_CODE: i64 = -1;

/// Parallel per-variable tables: domain size, axiom layer and value names
///
/// A variable with `axiom_layers[v] == None` is primary (set by operators);
/// `Some(layer)` marks a derived variable evaluated in that axiom layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    pub ranges: Vec<usize>,
    pub axiom_layers: Vec<Option<u32>>,
    pub value_names: Vec<Vec<String>>,
}

impl VariableSet {
    pub fn new(
        ranges: Vec<usize>,
        axiom_layers: Vec<Option<u32>>,
        value_names: Vec<Vec<String>>,
    ) -> Self {
        Self {
            ranges,
            axiom_layers,
            value_names,
        }
    }

    /// Primary variables named `Atom v<i>-<j>` after their values
    pub fn primary(ranges: Vec<usize>) -> Self {
        let value_names = ranges
            .iter()
            .enumerate()
            .map(|(var, &range)| (0..range).map(|val| format!("Atom v{}-{}", var, val)).collect())
            .collect();
        let axiom_layers = vec![None; ranges.len()];
        Self::new(ranges, axiom_layers, value_names)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn range(&self, var: usize) -> Option<usize> {
        self.ranges.get(var).copied()
    }

    pub fn layer(&self, var: usize) -> Option<u32> {
        self.axiom_layers.get(var).copied().flatten()
    }

    pub fn is_derived(&self, var: usize) -> bool {
        self.layer(var).is_some()
    }

    /// Primary variables in index order
    pub fn primary_variables(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&var| !self.is_derived(var))
    }

    /// Layer as written in the legacy format (`-1` for primary variables)
    pub fn layer_code(&self, var: usize) -> i64 {
        self.layer(var).map_or(PRIMARY_LAYER_CODE, i64::from)
    }

    /// A variable with range k weighs k + 1
    pub fn encoding_size(&self) -> usize {
        self.len() + self.ranges.iter().sum::<usize>()
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, range) in self.ranges.iter().enumerate() {
            let values: Vec<usize> = (0..*range).collect();
            write!(f, "v{} in {{{:?}}}", var, values)?;
            if let Some(layer) = self.layer(var) {
                write!(f, " [axiom layer {}]", layer)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers() {
        let vars = VariableSet::new(
            vec![3, 2],
            vec![None, Some(0)],
            vec![
                vec!["a".into(), "b".into(), "c".into()],
                vec!["t".into(), "f".into()],
            ],
        );
        assert!(!vars.is_derived(0));
        assert!(vars.is_derived(1));
        assert_eq!(vars.layer_code(0), -1);
        assert_eq!(vars.layer_code(1), 0);
        assert_eq!(vars.primary_variables().collect::<Vec<_>>(), vec![0]);
        assert_eq!(vars.encoding_size(), 7);
    }

    #[test]
    fn test_primary_constructor() {
        let vars = VariableSet::primary(vec![2, 3]);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.value_names[1][2], "Atom v1-2");
        assert_eq!(vars.range(1), Some(3));
        assert_eq!(vars.range(2), None);
    }

    #[test]
    fn test_dump() {
        let vars = VariableSet::new(
            vec![2, 2],
            vec![None, Some(1)],
            vec![vec!["x".into(), "y".into()], vec!["x".into(), "y".into()]],
        );
        assert_eq!(
            vars.to_string(),
            "v0 in {[0, 1]}\nv1 in {[0, 1]} [axiom layer 1]\n"
        );
    }
}
