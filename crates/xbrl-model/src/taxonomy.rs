//! Taxonomy (DTS) metadata the rules cross-reference.

use std::collections::HashMap;

use crate::document::NamespaceDecl;
use crate::qname::QName;

/// Item type of a taxonomy concept, reduced to what the filing rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Monetary,
    Pure,
    Decimal,
    Integer,
    Shares,
    String,
    Date,
    Boolean,
    Other,
}

impl ItemType {
    pub fn is_monetary(self) -> bool {
        self == ItemType::Monetary
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ItemType::Monetary | ItemType::Pure | ItemType::Decimal | ItemType::Integer
                | ItemType::Shares
        )
    }

    pub fn is_string(self) -> bool {
        self == ItemType::String
    }
}

/// A schema-defined reporting element.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub name: QName,
    pub item_type: ItemType,
}

impl Concept {
    pub fn new(name: QName, item_type: ItemType) -> Self {
        Self { name, item_type }
    }
}

/// A label resource attached to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub role: String,
    pub text: String,
}

/// A table grouping with its labels, e.g. the source of filing-indicator
/// codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: String,
    pub labels: Vec<Label>,
}

impl Table {
    pub fn labels_with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Label> {
        self.labels.iter().filter(move |label| label.role == role)
    }
}

/// One taxonomy schema document, with the namespace bindings its author
/// declared on the schema root.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomySchema {
    pub target_namespace: String,
    pub namespace_decls: Vec<NamespaceDecl>,
}

impl TaxonomySchema {
    /// The prefix the schema itself binds to its target namespace.
    pub fn canonical_prefix(&self) -> Option<&str> {
        self.namespace_decls
            .iter()
            .find(|decl| decl.prefix.is_some() && decl.uri == self.target_namespace)
            .and_then(|decl| decl.prefix.as_deref())
    }
}

/// The discoverable taxonomy set of an instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dts {
    pub concepts: HashMap<QName, Concept>,
    pub tables: Vec<Table>,
    pub schemas: Vec<TaxonomySchema>,
}

impl Dts {
    pub fn resolve_concept(&self, name: &QName) -> Option<&Concept> {
        self.concepts.get(name)
    }

    pub fn add_concept(&mut self, concept: Concept) {
        self.concepts.insert(concept.name.clone(), concept);
    }
}
