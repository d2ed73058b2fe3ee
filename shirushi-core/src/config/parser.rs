use serde::Deserialize;

use crate::constants::LabelSource;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Parser {
    /// Source given to labels parsed without one
    pub default_source: String,

    /// Source given to selector labels parsed without one
    pub select_source: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            default_source: LabelSource::Unspec.to_string(),
            select_source: LabelSource::Any.to_string(),
        }
    }
}
