//! Namespace-qualified names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A namespace-qualified name as resolved by the host engine.
///
/// Identity is namespace URI plus local name; the lexical prefix a document
/// happened to use is not part of the name and lives on the document layer
/// instead (see [`crate::document`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QName {
    pub namespace: String,
    pub local: String,
}

impl QName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Clark notation, e.g. {http://www.xbrl.org/2003/instance}context
        write!(f, "{{{}}}{}", self.namespace, self.local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_nothing_but_prefix() {
        let a = QName::new("urn:example", "item");
        let b = QName::new("urn:example", "item");
        let c = QName::new("urn:other", "item");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn clark_notation_display() {
        let name = QName::new("http://www.xbrl.org/2003/instance", "unit");
        assert_eq!(
            name.to_string(),
            "{http://www.xbrl.org/2003/instance}unit"
        );
    }
}
