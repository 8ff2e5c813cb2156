//! Candidate-Elimination: coupled specific/general boundary maintenance
//!
//! The general boundary is a bounded, per-attribute-slot approximation of
//! the textbook version space: a fixed n-by-n arena with one candidate row
//! per attribute index, specialized only at its own diagonal slot. It cannot
//! represent general hypotheses constraining more than one attribute, which
//! diverges from textbook results on datasets that need them.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::ExampleTable;
use crate::hypothesis::{is_positive_for_candidate_elimination, AttributeValue, Hypothesis};
use crate::{ConceptLearnError, Result};

/// Final boundaries after the full pass and redundancy pruning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEliminationOutput {
    /// The specific boundary S
    pub specific_hypothesis: Hypothesis,
    /// Surviving general-boundary candidates, ascending by attribute index
    pub general_hypotheses: Vec<Hypothesis>,
}

/// Run Candidate-Elimination over the table
///
/// S is seeded from the first row's attribute vector regardless of its
/// label. A positive example generalizes every mismatched slot of S and
/// clears the matching diagonal slot of G; any other label specializes the
/// diagonal to S on mismatch and resets it to the wildcard on match.
/// Unrecognized labels deliberately take the negative branch.
pub fn learn(table: &ExampleTable) -> Result<CandidateEliminationOutput> {
    let first = table
        .get(0)
        .ok_or_else(|| ConceptLearnError::Data("example table is empty".to_string()))?;

    let n = table.n_attributes();
    let mut specific = Hypothesis::new(first.attributes.clone());
    let mut general = Array2::from_elem((n, n), AttributeValue::Wildcard);

    debug!(rows = table.len(), attributes = n, "maintaining version-space boundaries");

    for example in table {
        if is_positive_for_candidate_elimination(&example.label) {
            for x in 0..n {
                if example.attributes[x] != *specific.slot(x) {
                    specific.generalize_slot(x);
                    general[[x, x]] = AttributeValue::Wildcard;
                }
            }
        } else {
            for x in 0..n {
                if example.attributes[x] != *specific.slot(x) {
                    general[[x, x]] = specific.slot(x).clone();
                } else {
                    general[[x, x]] = AttributeValue::Wildcard;
                }
            }
        }
    }

    let general_hypotheses = prune_redundant(&general);
    debug!(
        surviving = general_hypotheses.len(),
        "pruned fully wildcarded general hypotheses"
    );

    Ok(CandidateEliminationOutput {
        specific_hypothesis: specific,
        general_hypotheses,
    })
}

/// Drop every all-wildcard row of the general arena, preserving the
/// ascending attribute-index order of the survivors
fn prune_redundant(general: &Array2<AttributeValue>) -> Vec<Hypothesis> {
    general
        .rows()
        .into_iter()
        .map(|row| Hypothesis::new(row.to_vec()))
        .filter(|candidate| !candidate.is_all_wildcard())
        .collect()
}
