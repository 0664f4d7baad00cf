//! Dual-stream encoder
//!
//! One ordered traversal of a [`Task`](crate::ir::Task) writes the legacy
//! task encoding and, section by section, the pseudo-Boolean certificate that
//! justifies it.
//!
//! - **accumulator**: the init/update/finalize protocol and certificate blocks
//! - **legacy**: line writer for the legacy text format
//! - **encoder**: the section state machine driving both streams

pub mod accumulator;
mod encoder;
pub mod legacy;

pub use accumulator::{Accumulator, CertificateBlock};
pub use encoder::{encode, encode_to_strings, EncodeSummary, Encoder, EncoderConfig, Section};

use crate::ir::ValidationError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Output sink an I/O error occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Legacy,
    Certificate,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Legacy => f.write_str("legacy"),
            Stream::Certificate => f.write_str("certificate"),
        }
    }
}

/// Fatal encoding failure; output already written must be discarded
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("I/O error on {stream} stream: {source}")]
    Io {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    #[error("invalid task: {0}")]
    InvalidTask(#[from] ValidationError),

    #[error("{context} references unknown variable {var}")]
    UnknownVariable { context: String, var: usize },

    #[error("axiom {axiom} has non-binary effect value {value}")]
    NonBinaryAxiomEffect { axiom: usize, value: usize },

    #[error("operator cost {cost} does not fit a cost register of {bits} bits")]
    CostExceedsRegister { cost: u32, bits: u32 },

    #[error("unknown cost comparator: {0}")]
    UnknownComparator(String),
}

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

impl EncodeError {
    pub(crate) fn io(stream: Stream) -> impl FnOnce(io::Error) -> EncodeError {
        move |source| EncodeError::Io { stream, source }
    }
}
