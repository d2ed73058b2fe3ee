use shirushi_core::{
    config::Config,
    constants::{self, LabelSource, RESERVED_SHORTHAND, SOURCE_DELIMITER, VALUE_DELIMITER},
    label::Label,
    types,
};

use crate::LabelParser;

/// Parses tokens of the form `[source:]key[=value]`, where a leading `$` stands for `reserved:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardLabelParser {
    default_source: String,
    select_source: String,
}

impl Default for StandardLabelParser {
    fn default() -> Self {
        Self {
            default_source: LabelSource::Unspec.to_string(),
            select_source: LabelSource::Any.to_string(),
        }
    }
}

impl LabelParser for StandardLabelParser {
    fn parse_label(&self, token: &str) -> Label {
        Self::parse_with_source(token, &self.default_source)
    }

    fn parse_select_label(&self, token: &str) -> Label {
        Self::parse_with_source(token, &self.select_source)
    }
}

impl StandardLabelParser {
    pub fn new(default_source: LabelSource, select_source: LabelSource) -> Self {
        Self {
            default_source: default_source.to_string(),
            select_source: select_source.to_string(),
        }
    }

    /// Builds a parser from the `parser` config section, both sources must be well-known ones
    pub fn from_config(config: &Config) -> types::Result<Self> {
        let default_source = constants::parse_source(&config.parser.default_source)?;
        let select_source = constants::parse_source(&config.parser.select_source)?;

        tracing::debug!(
            "using label parser with default source '{}' and select source '{}'",
            default_source,
            select_source
        );

        Ok(Self::new(default_source, select_source))
    }

    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    pub fn select_source(&self) -> &str {
        &self.select_source
    }

    fn parse_with_source(token: &str, default_source: &str) -> Label {
        let (source, rest) = match token.strip_prefix(RESERVED_SHORTHAND) {
            Some(rest) => (LabelSource::Reserved.to_string(), rest),
            None => match token.split_once(SOURCE_DELIMITER) {
                Some((source, rest)) if !source.is_empty() => (source.to_string(), rest),
                Some((_, rest)) => (default_source.to_string(), rest),
                None => (default_source.to_string(), token),
            },
        };

        let (key, value) = rest.split_once(VALUE_DELIMITER).unwrap_or((rest, ""));

        Label::new(key, value, source)
    }
}
