//! Example tables: row ingestion and shape validation
//!
//! A table is an ordered sequence of rows; the last column of every row is
//! the label and all preceding columns are attributes. Validation happens at
//! construction so the learners can assume a rectangular, non-empty table.

use serde::{Deserialize, Serialize};

use crate::hypothesis::AttributeValue;
use crate::{ConceptLearnError, Result};

/// One labeled training example: an attribute vector plus its raw label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Attribute values in column order
    pub attributes: Vec<AttributeValue>,
    /// The label cell, kept as the raw token from the table
    pub label: String,
}

/// A validated rectangular table of labeled examples
#[derive(Clone, Debug)]
pub struct ExampleTable {
    examples: Vec<Example>,
    n_attributes: usize,
}

impl ExampleTable {
    /// Build a table from raw rows, splitting off the trailing label column
    ///
    /// Fails with a data error when the sequence is empty, when rows have
    /// differing widths, or when rows are too narrow to hold at least one
    /// attribute plus the label.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| ConceptLearnError::Data("example table is empty".to_string()))?;

        let width = first.len();
        if width < 2 {
            return Err(ConceptLearnError::Data(format!(
                "rows must have at least one attribute column plus a label, got width {}",
                width
            )));
        }

        let mut examples = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ConceptLearnError::Data(format!(
                    "ragged table: row {} has width {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            let label = row.pop().unwrap_or_default();
            examples.push(Example {
                attributes: row.into_iter().map(AttributeValue::from).collect(),
                label,
            });
        }

        Ok(ExampleTable {
            examples,
            n_attributes: width - 1,
        })
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the table holds no examples (never true for a constructed
    /// table)
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of attribute columns (label excluded)
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Example at the given row index
    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    /// Examples in input row order
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Iterate examples in input row order
    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }
}

impl<'a> IntoIterator for &'a ExampleTable {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
