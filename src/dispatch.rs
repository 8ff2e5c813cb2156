//! Algorithm selection and the request/output boundary contracts
//!
//! This is the surface a serving layer talks to: inputs arrive as an
//! optional identifier plus optional raw rows, and every failure comes back
//! as a structured error before or during one isolated, stateless
//! computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::dataset::ExampleTable;
use crate::learning::{candidate_elimination, find_s, CandidateEliminationOutput, FindSOutput};
use crate::{ConceptLearnError, Result};

/// The closed set of runnable algorithms
///
/// Identifiers are matched after trimming and lowercasing. The original
/// system also exposed a decision-tree identifier that delegated wholesale
/// to an external classifier library; that branch lives outside this crate,
/// so its identifier is rejected here like any other unknown selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Version-space boundary maintenance (S and G)
    CandidateElimination,
    /// The single-hypothesis restriction (S only)
    FindS,
}

impl Algorithm {
    /// The wire identifier for this algorithm
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::CandidateElimination => "candidate-elimination",
            Algorithm::FindS => "find-s",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = ConceptLearnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "candidate-elimination" => Ok(Algorithm::CandidateElimination),
            "find-s" => Ok(Algorithm::FindS),
            other => Err(ConceptLearnError::InvalidSelection(other.to_string())),
        }
    }
}

/// One invocation's inputs, both optional so missing pieces can be rejected
/// with a precise error
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LearnRequest {
    /// Algorithm identifier, e.g. `"candidate-elimination"`
    pub algorithm: Option<String>,
    /// Raw table rows; last column is the label
    pub rows: Option<Vec<Vec<String>>>,
}

impl LearnRequest {
    /// Convenience constructor with both inputs present
    pub fn new(algorithm: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        LearnRequest {
            algorithm: Some(algorithm.into()),
            rows: Some(rows),
        }
    }
}

/// Output of a successful invocation, shaped per algorithm
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearnerOutput {
    /// Candidate-Elimination boundaries
    CandidateElimination(CandidateEliminationOutput),
    /// Find-S hypothesis
    FindS(FindSOutput),
}

/// Validate the request, ingest the table, and run the selected learner
///
/// Missing inputs and unrecognized identifiers are rejected before any data
/// is touched. Each call allocates fresh working structures; nothing is
/// shared across invocations.
pub fn execute(request: &LearnRequest) -> Result<LearnerOutput> {
    let selection = request
        .algorithm
        .as_deref()
        .ok_or_else(|| ConceptLearnError::InputMissing("no algorithm identifier provided".to_string()))?;
    let rows = request
        .rows
        .as_ref()
        .ok_or_else(|| ConceptLearnError::InputMissing("no example table provided".to_string()))?;

    let algorithm = selection.parse::<Algorithm>().map_err(|err| {
        warn!(selection, "rejected unrecognized algorithm identifier");
        err
    })?;

    debug!(algorithm = %algorithm, rows = rows.len(), "dispatching learner");
    let table = ExampleTable::from_rows(rows.clone())?;

    match algorithm {
        Algorithm::CandidateElimination => {
            Ok(LearnerOutput::CandidateElimination(candidate_elimination::learn(&table)?))
        }
        Algorithm::FindS => Ok(LearnerOutput::FindS(find_s::learn(&table)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_identifier_parsing_trims_and_lowercases() {
        assert_eq!(
            " Candidate-Elimination ".parse::<Algorithm>().unwrap(),
            Algorithm::CandidateElimination
        );
        assert_eq!("FIND-S".parse::<Algorithm>().unwrap(), Algorithm::FindS);
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = "find-g".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, ConceptLearnError::InvalidSelection(_)));
    }

    #[test]
    fn test_decision_tree_identifier_routes_elsewhere() {
        // the external classifier branch is not served by this crate
        let err = "id3_algorithm".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, ConceptLearnError::InvalidSelection(_)));
    }

    #[test]
    fn test_missing_inputs_rejected_before_computation() {
        let err = execute(&LearnRequest::default()).unwrap_err();
        assert!(matches!(err, ConceptLearnError::InputMissing(_)));

        let err = execute(&LearnRequest {
            algorithm: Some("find-s".to_string()),
            rows: None,
        })
        .unwrap_err();
        assert!(matches!(err, ConceptLearnError::InputMissing(_)));
    }

    #[test]
    fn test_invalid_selection_checked_before_data() {
        // bad identifier wins over a table that would also fail validation
        let err = execute(&LearnRequest::new("id3_algorithm", Vec::new())).unwrap_err();
        assert!(matches!(err, ConceptLearnError::InvalidSelection(_)));
    }

    #[test]
    fn test_dispatch_runs_selected_learner() {
        let data = rows(&[&["sunny", "warm", "YES"], &["rainy", "warm", "NO"]]);

        let out = execute(&LearnRequest::new("candidate-elimination", data.clone())).unwrap();
        assert!(matches!(out, LearnerOutput::CandidateElimination(_)));

        let out = execute(&LearnRequest::new("find-s", data)).unwrap();
        assert!(matches!(out, LearnerOutput::FindS(_)));
    }

    #[test]
    fn test_output_contract_shapes() {
        let data = rows(&[&["sunny", "warm", "YES"], &["rainy", "warm", "NO"]]);

        let out = execute(&LearnRequest::new("candidate-elimination", data.clone())).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["specific_hypothesis"], serde_json::json!(["sunny", "warm"]));
        assert_eq!(json["general_hypotheses"], serde_json::json!([["sunny", "?"]]));

        let out = execute(&LearnRequest::new("find-s", data)).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["hypothesis"], serde_json::json!(["sunny", "warm"]));
    }
}
