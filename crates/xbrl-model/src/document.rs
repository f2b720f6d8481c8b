//! XML document layer of a validated instance.
//!
//! The host exposes the serialized form of the filing (encoding, standalone
//! declaration, element tree with namespace declarations and schema-typed
//! values). Rules that care about lexical details, such as namespace prefix
//! hygiene or forbidden attributes, walk this layer.

use chrono::NaiveDate;

use crate::qname::QName;

/// One parsed instance document as the host hands it over.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub uri: String,
    /// Character encoding scheme from the XML declaration.
    pub encoding: String,
    /// Value of the standalone pseudo-attribute, if declared at all.
    pub standalone: Option<bool>,
    pub root: Element,
}

/// An element node with its attributes and namespace declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: QName,
    /// Lexical prefix used in the document, `None` for the default namespace.
    pub prefix: Option<String>,
    pub attributes: Vec<Attribute>,
    /// Namespace declarations appearing on this element.
    pub namespace_decls: Vec<NamespaceDecl>,
    pub children: Vec<Element>,
    /// Schema-validated value of the element content, where the host
    /// computed one.
    pub typed_value: Option<TypedValue>,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            prefix: None,
            attributes: Vec::new(),
            namespace_decls: Vec::new(),
            children: Vec::new(),
            typed_value: None,
        }
    }

    pub fn find_attribute(&self, name: &QName) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == *name)
    }

    /// Depth-first, pre-order traversal of this subtree, including `self`.
    ///
    /// The iterator is lazy and restartable; an explicit work stack keeps
    /// stack depth bounded on deeply nested documents.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// An attribute node, with the lexical prefix it was written with.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QName,
    pub prefix: Option<String>,
    pub value: String,
    pub typed_value: Option<TypedValue>,
}

impl Attribute {
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            prefix: None,
            value: value.into(),
            typed_value: None,
        }
    }
}

/// A namespace declaration (`xmlns` or `xmlns:prefix`).
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    /// `None` for the default namespace declaration.
    pub prefix: Option<String>,
    pub uri: String,
}

impl NamespaceDecl {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            uri: uri.into(),
        }
    }
}

/// A schema-validated ("actual") value as computed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Str(String),
    /// QName-typed content keeps the lexical prefix it dereferenced.
    QName {
        prefix: Option<String>,
        value: QName,
    },
    Date(NaiveDate),
    Other,
}

/// Iterator over a subtree in document order.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Reversed so that the first child is visited next.
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
