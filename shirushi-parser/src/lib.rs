use lazy_static::lazy_static;
use shirushi_core::{array::LabelArray, label::Label};

pub mod parser;

use parser::StandardLabelParser;

lazy_static! {
    static ref DEFAULT_PARSER: StandardLabelParser = StandardLabelParser::default();
}

/// The [LabelParser] turns raw label tokens into labels. Parsing is total: every token yields a label.
pub trait LabelParser: Send + Sync {
    /// Parses a single label token
    ///
    /// ### Arguments
    ///
    /// * `token` - A raw token such as `key`, `key=value` or `source:key=value`
    ///
    fn parse_label(&self, token: &str) -> Label;

    /// Parses a single token into a selector label, whose missing source is the wildcard
    fn parse_select_label(&self, token: &str) -> Label;

    /// Parses every token in order, zero tokens give the empty [LabelArray]
    fn parse_label_array<I, S>(&self, tokens: I) -> LabelArray
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| self.parse_label(token.as_ref()))
            .collect()
    }

    fn parse_select_label_array<I, S>(&self, tokens: I) -> LabelArray
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| self.parse_select_label(token.as_ref()))
            .collect()
    }
}

pub fn parse_label(token: &str) -> Label {
    DEFAULT_PARSER.parse_label(token)
}

pub fn parse_select_label(token: &str) -> Label {
    DEFAULT_PARSER.parse_select_label(token)
}

pub fn parse_label_array<I, S>(tokens: I) -> LabelArray
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_PARSER.parse_label_array(tokens)
}

pub fn parse_select_label_array<I, S>(tokens: I) -> LabelArray
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_PARSER.parse_select_label_array(tokens)
}
