//! Find-S: the single-hypothesis restriction of version-space learning
//!
//! Tracks only the specific boundary. Negative examples are ignored
//! entirely; there is no general-boundary computation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::ExampleTable;
use crate::hypothesis::{is_positive_for_find_s, Hypothesis};
use crate::{ConceptLearnError, Result};

/// The maximally specific hypothesis consistent with all positive examples
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindSOutput {
    /// Final hypothesis vector, one slot per attribute column
    pub hypothesis: Hypothesis,
}

/// Run Find-S over the table
///
/// The first positive example seeds the hypothesis; a second full pass then
/// generalizes every slot where a positive example disagrees. Because the
/// update rule only looks at value mismatches, the seed's row position does
/// not affect the result. Fails when the table holds no positive example.
pub fn learn(table: &ExampleTable) -> Result<FindSOutput> {
    let (seed_index, seed) = table
        .iter()
        .enumerate()
        .find(|(_, example)| is_positive_for_find_s(&example.label))
        .ok_or_else(|| ConceptLearnError::Data("no positive examples found".to_string()))?;

    debug!(seed_index, "seeding hypothesis from first positive example");
    let mut hypothesis = Hypothesis::new(seed.attributes.clone());

    for example in table {
        if is_positive_for_find_s(&example.label) {
            for x in 0..hypothesis.len() {
                if example.attributes[x] != *hypothesis.slot(x) {
                    hypothesis.generalize_slot(x);
                }
            }
        }
    }

    Ok(FindSOutput { hypothesis })
}
