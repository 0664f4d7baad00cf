//! SAS Certify Core
//!
//! Serializes finite-domain planning tasks to the legacy text format together
//! with a pseudo-Boolean certificate of the encoding

pub mod naming;   // Identifier templates shared with the native search
pub mod pb;       // Literals, constraints and reification builders
pub mod cost;     // Binary cost register and delta certificate
pub mod ir;       // Task model and validator
pub mod encode;   // Dual-stream encoder
pub mod loader;   // JSON task loader

pub use naming::{CostRelation, NAMING_SCHEME_VERSION};
pub use pb::{Constraint, Literal, Term};
pub use cost::CostRegister;
pub use ir::*;
pub use encode::{
    encode, encode_to_strings, EncodeError, EncodeResult, EncodeSummary, Encoder, EncoderConfig,
    Stream,
};
pub use loader::{load_task, load_tasks, LoadError, LoadResult};
