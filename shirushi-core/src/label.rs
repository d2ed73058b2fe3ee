use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LabelSource, PATH_DELIMITER, SOURCE_DELIMITER, VALUE_DELIMITER};

/// A [Label] is a single `(source, key, value)` attribute of an endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Label {
    pub key: String,
    pub value: String,
    pub source: String,
}

impl Label {
    /// Creates a label from its parts, no validation is performed
    ///
    /// ### Arguments
    ///
    /// * `key` - The label key
    /// * `value` - The label value, may be empty
    /// * `source` - The namespace the label originates from
    ///
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source: source.into(),
        }
    }

    /// Returns the `source.key` form understood by [crate::array::LabelArray::has]
    pub fn extended_key(&self) -> String {
        format!("{}{}{}", self.source, PATH_DELIMITER, self.key)
    }

    pub fn is_any_source(&self) -> bool {
        self.source == LabelSource::Any.as_str()
    }

    pub fn is_reserved_source(&self) -> bool {
        self.source == LabelSource::Reserved.as_str()
    }

    /// Checks whether `self`, used as a selector, selects `target`.
    /// Key and value must be equal; a selector with the `any` source accepts every source.
    pub fn matches(&self, target: &Label) -> bool {
        self.key == target.key
            && self.value == target.value
            && (self.is_any_source() || self.source == target.source)
    }
}

/// Renders `source:key=value`, or `source:key` for an empty value. A label with an
/// empty source renders as `:key`, which parses back with the parser's default source,
/// so such labels do not survive a render and parse round trip.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}{}{}", self.source, SOURCE_DELIMITER, self.key)
        } else {
            write!(
                f,
                "{}{}{}{}{}",
                self.source, SOURCE_DELIMITER, self.key, VALUE_DELIMITER, self.value
            )
        }
    }
}
