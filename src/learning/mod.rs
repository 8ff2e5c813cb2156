//! The learning algorithms
//!
//! Both learners consume a validated [`ExampleTable`](crate::ExampleTable)
//! in a single left-to-right pass and allocate fresh working structures per
//! invocation.

pub mod candidate_elimination;
pub mod find_s;

pub use candidate_elimination::CandidateEliminationOutput;
pub use find_s::FindSOutput;
