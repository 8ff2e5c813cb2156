//! Hypothesis vectors and the generality partial order

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::AttributeValue;

/// An ordered vector of attribute slots, one per attribute column
///
/// Each slot holds either a concrete token or the wildcard. Hypotheses are
/// compared by the generality partial order: `h1` is more general than or
/// equal to `h2` iff, slot-wise, `h1`'s slot is the wildcard or equals
/// `h2`'s slot.
///
/// Serializes as a flat list of strings, wildcards as `"?"`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypothesis {
    slots: Vec<AttributeValue>,
}

impl Hypothesis {
    /// Create a hypothesis from slot values
    pub fn new(slots: Vec<AttributeValue>) -> Self {
        Hypothesis { slots }
    }

    /// Create a hypothesis from raw cell tokens (`"?"` becomes the wildcard)
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Hypothesis {
            slots: tokens
                .into_iter()
                .map(|t| AttributeValue::from(t.into()))
                .collect(),
        }
    }

    /// All-wildcard hypothesis of the given width
    pub fn all_wildcard(width: usize) -> Self {
        Hypothesis {
            slots: vec![AttributeValue::Wildcard; width],
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the hypothesis has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at the given index
    pub fn slot(&self, index: usize) -> &AttributeValue {
        &self.slots[index]
    }

    /// All slots in order
    pub fn slots(&self) -> &[AttributeValue] {
        &self.slots
    }

    /// Widen the slot at `index` to the wildcard; idempotent
    ///
    /// A wildcard slot never reverts to a concrete value, so repeated
    /// generalization is monotone.
    pub fn generalize_slot(&mut self, index: usize) {
        self.slots[index] = AttributeValue::Wildcard;
    }

    /// Whether every slot is the wildcard (the hypothesis carries no
    /// constraint)
    pub fn is_all_wildcard(&self) -> bool {
        self.slots.iter().all(AttributeValue::is_wildcard)
    }

    /// Generality test against another hypothesis of the same width
    ///
    /// Returns `false` for hypotheses of differing width, which are never
    /// comparable.
    pub fn is_more_general_or_equal(&self, other: &Hypothesis) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|(a, b)| a.is_more_general_or_equal(b))
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, ">")
    }
}

impl fmt::Debug for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hypothesis{}", self)
    }
}
