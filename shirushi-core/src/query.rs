use crate::{
    constants::{LabelSource, PATH_DELIMITER, SOURCE_DELIMITER, VALUE_DELIMITER},
    label::Label,
};

/// A classified lookup expression for [crate::array::LabelArray::has]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// A key name only, matched regardless of the label source
    Bare(&'a str),

    /// A `source.key` expression; the `any` source matches labels of every source
    Qualified { source: &'a str, key: &'a str },

    /// An expression that can never match
    Invalid,
}

impl<'a> Query<'a> {
    pub fn parse(query: &'a str) -> Self {
        if query.is_empty()
            || query.contains(SOURCE_DELIMITER)
            || query.contains(VALUE_DELIMITER)
        {
            return Self::Invalid;
        }

        // a lone wildcard names a source without a key
        if query == LabelSource::Any.as_str() {
            return Self::Invalid;
        }

        match query.split_once(PATH_DELIMITER) {
            Some((source, key)) if source.is_empty() || key.is_empty() => Self::Invalid,
            Some((source, key)) => Self::Qualified { source, key },
            None => Self::Bare(query),
        }
    }

    pub fn matches(&self, label: &Label) -> bool {
        match self {
            Self::Bare(key) => label.key == *key,
            Self::Qualified { source, key } => {
                label.key == *key
                    && (*source == LabelSource::Any.as_str() || label.source == *source)
            }
            Self::Invalid => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Query;
    use crate::label::Label;

    #[test]
    fn test_parse_bare() {
        assert_eq!(Query::parse("env"), Query::Bare("env"));
        assert_eq!(Query::parse("container"), Query::Bare("container"));
    }

    #[test]
    fn test_parse_qualified() {
        assert_eq!(
            Query::parse("container.user"),
            Query::Qualified { source: "container", key: "user" }
        );
    }

    #[test]
    fn test_parse_qualified_key_keeps_later_dots() {
        assert_eq!(
            Query::parse("k8s.io.kubernetes.pod.namespace"),
            Query::Qualified { source: "k8s", key: "io.kubernetes.pod.namespace" }
        );
    }

    #[test]
    fn test_parse_invalid() {
        for query in ["", "any", "container:env", "env=devel", "any.", ".env", "."] {
            assert_eq!(Query::parse(query), Query::Invalid, "query {:?}", query);
        }
    }

    #[test]
    fn test_invalid_never_matches() {
        assert!(!Query::Invalid.matches(&Label::new("", "", "")));
        assert!(!Query::Invalid.matches(&Label::new("any", "", "any")));
    }

    #[test]
    fn test_wildcard_only_on_query_side() {
        let label = Label::new("env", "devel", "any");

        assert!(Query::parse("any.env").matches(&label));
        assert!(!Query::parse("container.env").matches(&label));
        assert!(Query::parse("any.user").matches(&Label::new("user", "bob", "container")));
    }
}
