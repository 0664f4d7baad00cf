//! Task model for finite-domain planning tasks
//!
//! - **facts**: variable/value facts and sorted conditions
//! - **variables**: domains, axiom layers and value names
//! - **task**: mutex groups, initial state, goal, operators, axioms and the task itself
//! - **validate**: structural invariants, checked on demand
//!
//! # Example
//!
//! ```rust
//! use sas_certify_core::ir::*;
//!
//! let variables = VariableSet::primary(vec![2, 2]);
//! let op = Operator::new("flip", vec![], vec![PrePost::simple(0, Some(0), 1)], 1);
//! let task = Task::new(
//!     variables,
//!     vec![],
//!     InitialState::new(vec![0, 0]),
//!     Goal::new(vec![Fact::new(0, 1)]),
//!     vec![op],
//!     vec![],
//!     false,
//! );
//!
//! assert!(task.validate().is_ok());
//! assert_eq!(task.max_cost(), 1);
//! ```

mod facts;
mod task;
mod validate;
mod variables;

pub use facts::{condition, literals, primed_literals, Condition, Fact};
pub use task::{Axiom, Goal, InitialState, MutexGroup, Operator, PrePost, Task};
pub use validate::{ValidationError, ValidationResult};
pub use variables::{VariableSet, PRIMARY_LAYER_CODE};
