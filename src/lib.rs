//! # Concept-Learn: symbolic concept learning over labeled tables
//!
//! This library implements two classic supervised concept-learning routines
//! over small labeled tabular datasets: Find-S and Candidate-Elimination
//! (version-space learning with a specific boundary S and a bounded,
//! per-attribute general boundary G).
//!
//! ## Features
//!
//! - **Hypothesis model**: attribute tokens, the `?` wildcard, and the
//!   generality partial order over hypothesis vectors
//! - **Example ingestion**: rectangular row tables split into attribute
//!   vectors plus a trailing label column
//! - **Candidate-Elimination**: coupled S/G boundary maintenance with
//!   redundancy pruning of fully wildcarded general hypotheses
//! - **Find-S**: the single-hypothesis restriction tracking only S
//! - **Dispatch**: algorithm selection by identifier with structured errors
//!
//! All learners are pure functions: each invocation allocates fresh working
//! structures and no state is shared across calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Attribute values, the wildcard, hypotheses, and label recognition
pub mod hypothesis;

/// Example tables: ingestion and shape validation
pub mod dataset;

/// The learning algorithms: Candidate-Elimination and Find-S
pub mod learning;

/// Algorithm selection and the request/output boundary contracts
pub mod dispatch;

// Re-export commonly used types
pub use dataset::{Example, ExampleTable};
pub use dispatch::{execute, Algorithm, LearnRequest, LearnerOutput};
pub use hypothesis::{AttributeValue, Hypothesis};
pub use learning::{CandidateEliminationOutput, FindSOutput};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum ConceptLearnError {
    /// A required input (table or algorithm identifier) was not provided
    #[error("missing input: {0}")]
    InputMissing(String),

    /// The algorithm identifier is not in the recognized set
    #[error("invalid algorithm selection: {0:?}")]
    InvalidSelection(String),

    /// Malformed table or unsatisfiable algorithm precondition
    #[error("data error: {0}")]
    Data(String),

    /// Unexpected failure during computation
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, ConceptLearnError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        dataset::{Example, ExampleTable},
        dispatch::{execute, Algorithm, LearnRequest, LearnerOutput},
        hypothesis::{AttributeValue, Hypothesis},
        learning::{candidate_elimination, find_s, CandidateEliminationOutput, FindSOutput},
        ConceptLearnError, Result,
    };
}
