//! Read-only object model for validated XBRL filings.
//!
//! The host validation engine parses and structurally validates an instance
//! document against its taxonomy, then hands the resulting object graph to
//! the filing-rule checks. Everything in this crate is plain data the host
//! materializes once; the checks only read it and append findings to an
//! [`ErrorLog`].

pub mod aspect;
pub mod diagnostics;
pub mod document;
pub mod instance;
pub mod ns;
pub mod qname;
pub mod taxonomy;

pub use aspect::{Aspect, AspectValue, ConstraintSet};
pub use diagnostics::{ErrorLog, Finding, Location, Severity};
pub use document::{Attribute, Document, Element, NamespaceDecl, TypedValue};
pub use instance::{
    Context, DimensionValue, EntityIdentifier, Fact, Footnote, FootnoteLink, Instance,
    InstantValue, LinkbaseRef, Locator, MemberValue, Period, Scenario, SchemaRef, Unit,
};
pub use qname::QName;
pub use taxonomy::{Concept, Dts, ItemType, Label, Table, TaxonomySchema};
