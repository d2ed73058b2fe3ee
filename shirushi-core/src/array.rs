use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{label::Label, query::Query};

/// An ordered list of labels, typically the full label set of one endpoint.
/// Duplicates are kept and order is preserved, but neither carries meaning for
/// [LabelArray::contains] or [LabelArray::has].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelArray(Vec<Label>);

impl LabelArray {
    pub fn new(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    /// Checks whether every label of `needed` is present in `self`
    ///
    /// ### Arguments
    ///
    /// * `needed` - The labels that must all be found in `self`, an empty array is always contained
    ///
    pub fn contains(&self, needed: &LabelArray) -> bool {
        needed.iter().all(|label| self.0.contains(label))
    }

    /// Returns the labels of `needed` that are missing from `self`, in the order of `needed`
    pub fn lacks(&self, needed: &LabelArray) -> LabelArray {
        needed
            .iter()
            .filter(|label| !self.0.contains(label))
            .cloned()
            .collect()
    }

    /// Checks whether a label matching the lookup expression is present, ignoring values.
    /// The expression is either a bare `key` or `source.key`; anything else never matches.
    pub fn has(&self, query: &str) -> bool {
        let query_expr = Query::parse(query);
        if query_expr == Query::Invalid {
            tracing::trace!("rejecting label lookup with unsupported shape: {:?}", query);
            return false;
        }

        self.0.iter().any(|label| query_expr.matches(label))
    }

    /// Element-wise equality, order included
    pub fn same(&self, other: &LabelArray) -> bool {
        self.0 == other.0
    }

    /// Sorts by key, then source, then value. The sort is stable.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| {
            a.key
                .cmp(&b.key)
                .then_with(|| a.source.cmp(&b.source))
                .then_with(|| a.value.cmp(&b.value))
        });
    }

    pub fn sorted(&self) -> LabelArray {
        let mut labels = self.clone();
        labels.sort();
        labels
    }

    pub fn to_model(&self) -> Vec<String> {
        self.0.iter().map(|label| label.to_string()).collect()
    }

    pub fn into_inner(self) -> Vec<Label> {
        self.0
    }
}

impl Deref for LabelArray {
    type Target = [Label];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Label>> for LabelArray {
    fn from(labels: Vec<Label>) -> Self {
        Self(labels)
    }
}

impl FromIterator<Label> for LabelArray {
    fn from_iter<T: IntoIterator<Item = Label>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LabelArray {
    type Item = Label;
    type IntoIter = std::vec::IntoIter<Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LabelArray {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
