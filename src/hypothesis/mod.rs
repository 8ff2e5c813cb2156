//! Domain model: attribute tokens, the wildcard, hypotheses, and labels

mod label;
mod value;
mod vector;

pub use vector::Hypothesis;
pub use label::{is_positive_for_candidate_elimination, is_positive_for_find_s};
pub use value::{AttributeValue, WILDCARD};
