use std::str::FromStr;

use crate::{errors::Error, types};

/// Well-known label sources. A [crate::label::Label] may still carry any
/// source string, these are the ones that carry meaning on their own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
pub enum LabelSource {
    /// Wildcard sentinel, matches labels of every source when used in a query or selector
    #[strum(serialize = "any")]
    Any,

    /// Source of labels parsed without an explicit source
    #[strum(serialize = "unspec")]
    Unspec,

    #[strum(serialize = "container")]
    Container,

    #[strum(serialize = "k8s")]
    Kubernetes,

    #[strum(serialize = "mesos")]
    Mesos,

    /// Labels assigned by the networking layer itself, written as `$key` in short form
    #[strum(serialize = "reserved")]
    Reserved,

    #[strum(serialize = "cilium-generated")]
    Generated,
}

impl LabelSource {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Separates the source from the key in a qualified lookup, `source.key`
pub const PATH_DELIMITER: char = '.';

/// Separates the source from the rest of a label token, `source:key=value`
pub const SOURCE_DELIMITER: char = ':';

/// Separates the key from the value of a label token
pub const VALUE_DELIMITER: char = '=';

/// Prefix of a label token that is shorthand for the reserved source
pub const RESERVED_SHORTHAND: char = '$';

pub fn parse_source(name: &str) -> types::Result<LabelSource> {
    LabelSource::from_str(name).map_err(|_| Error::InvalidLabelSource {
        source_name: name.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(LabelSource::Any.to_string(), "any");
        assert_eq!(LabelSource::Kubernetes.to_string(), "k8s");
        assert_eq!(LabelSource::Generated.to_string(), "cilium-generated");
    }

    #[test]
    fn test_source_as_str() {
        assert_eq!(LabelSource::Any.as_str(), "any");
        assert_eq!(LabelSource::Reserved.as_str(), LabelSource::Reserved.to_string());
    }

    #[test]
    fn test_parse_known_source() {
        assert_eq!(parse_source("container").unwrap(), LabelSource::Container);
        assert_eq!(parse_source("reserved").unwrap(), LabelSource::Reserved);
    }

    #[test]
    fn test_parse_unknown_source_error() {
        let result = parse_source("kubernetes");

        assert!(matches!(
            result,
            Err(Error::InvalidLabelSource { source_name }) if source_name == "kubernetes"
        ));
    }
}
