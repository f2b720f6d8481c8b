//! The validated instance graph: contexts, units, facts and links.
//!
//! All collections keep document order. The query methods compare contexts
//! and units by their aspect signature rather than by id, so a fact pointing
//! at a duplicate of a context still counts as a use of that context.

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use crate::aspect::ConstraintSet;
use crate::document::Document;
use crate::ns;
use crate::qname::QName;
use crate::taxonomy::Dts;

/// Entity identifier of a context (`@scheme` plus identifier content).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityIdentifier {
    pub scheme: String,
    pub value: String,
}

impl EntityIdentifier {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }
}

/// An instant as reported, keeping what the lexical form carried so rules
/// can reject dateTime-typed or timezone-bearing values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstantValue {
    pub date: NaiveDate,
    /// Present when the value was typed as `xs:dateTime` rather than `xs:date`.
    pub time: Option<NaiveTime>,
    pub offset: Option<FixedOffset>,
}

impl InstantValue {
    pub fn date(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            offset: None,
        }
    }
}

/// The period of a context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Period {
    Instant(InstantValue),
    Duration {
        start: InstantValue,
        end: InstantValue,
    },
    Forever,
}

impl Period {
    pub fn is_instant(&self) -> bool {
        matches!(self, Period::Instant(_))
    }
}

/// A dimensional member value inside a segment or scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberValue {
    Explicit(QName),
    Typed(String),
}

/// One dimension binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionValue {
    pub dimension: QName,
    pub value: MemberValue,
}

/// Scenario content of a context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Scenario {
    pub members: Vec<DimensionValue>,
    /// True when the scenario carries children other than explicit or typed
    /// dimension members.
    pub has_other_content: bool,
}

/// A `xbrli:context`.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub id: String,
    pub entity: EntityIdentifier,
    /// Raw segment content; the filing rules forbid any segment, so the
    /// model only needs to carry it opaquely.
    pub segment: Option<String>,
    pub period: Period,
    pub scenario: Option<Scenario>,
}

impl Context {
    /// Look up the explicit member bound to `dimension` in the scenario.
    pub fn explicit_member(&self, dimension: &QName) -> Option<&QName> {
        let scenario = self.scenario.as_ref()?;
        scenario
            .members
            .iter()
            .find(|member| member.dimension == *dimension)
            .and_then(|member| match &member.value {
                MemberValue::Explicit(name) => Some(name),
                MemberValue::Typed(_) => None,
            })
    }
}

/// A `xbrli:unit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: String,
    pub measures: Vec<QName>,
}

impl Unit {
    pub fn new(id: impl Into<String>, measures: Vec<QName>) -> Self {
        Self {
            id: id.into(),
            measures,
        }
    }

    /// A monetary unit has a single ISO 4217 currency measure.
    pub fn is_monetary(&self) -> bool {
        matches!(self.measures.as_slice(), [measure] if measure.namespace == ns::ISO4217)
    }

    pub fn currency(&self) -> Option<&str> {
        match self.measures.as_slice() {
            [measure] if measure.namespace == ns::ISO4217 => Some(&measure.local),
            _ => None,
        }
    }

    /// The `xbrli:pure` unit: a single measure with local name `pure` in the
    /// XBRL instance namespace.
    pub fn is_pure(&self) -> bool {
        matches!(
            self.measures.as_slice(),
            [measure] if measure.namespace == ns::XBRLI && measure.local == "pure"
        )
    }
}

/// One reported item.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub concept: QName,
    pub context_ref: String,
    pub unit_ref: Option<String>,
    pub value: String,
    pub decimals: Option<String>,
    pub precision: Option<String>,
    pub id: Option<String>,
    pub nil: bool,
    pub lang: Option<String>,
}

impl Fact {
    pub fn new(concept: QName, context_ref: impl Into<String>) -> Self {
        Self {
            concept,
            context_ref: context_ref.into(),
            unit_ref: None,
            value: String::new(),
            decimals: None,
            precision: None,
            id: None,
            nil: false,
            lang: None,
        }
    }

    /// Whitespace-collapsed value, the form filing-indicator codes are
    /// compared in.
    pub fn normalized_value(&self) -> String {
        self.value.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// A `link:schemaRef`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRef {
    pub href: String,
}

/// A `link:linkbaseRef`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkbaseRef {
    pub href: String,
}

/// A footnote locator pointing at a fact by fragment identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    pub href: String,
}

/// A footnote resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Footnote {
    pub text: String,
}

/// A `link:footnoteLink` extended link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FootnoteLink {
    pub locators: Vec<Locator>,
    pub footnotes: Vec<Footnote>,
}

/// Root object for one validated filing.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub document: Document,
    pub schema_refs: Vec<SchemaRef>,
    pub linkbase_refs: Vec<LinkbaseRef>,
    pub contexts: Vec<Context>,
    pub units: Vec<Unit>,
    pub facts: Vec<Fact>,
    pub footnote_links: Vec<FootnoteLink>,
    pub dts: Dts,
}

impl Instance {
    pub fn new(document: Document, dts: Dts) -> Self {
        Self {
            document,
            schema_refs: Vec::new(),
            linkbase_refs: Vec::new(),
            contexts: Vec::new(),
            units: Vec::new(),
            facts: Vec::new(),
            footnote_links: Vec::new(),
            dts,
        }
    }

    pub fn context(&self, id: &str) -> Option<&Context> {
        self.contexts.iter().find(|context| context.id == id)
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Facts reported against the given concept, in document order.
    pub fn facts_with_concept<'a>(&'a self, concept: &'a QName) -> impl Iterator<Item = &'a Fact> {
        self.facts.iter().filter(move |fact| fact.concept == *concept)
    }

    /// Facts whose context is structurally equal to `context`.
    ///
    /// Equality is by aspect signature, not by id, so facts referencing a
    /// duplicate of `context` are included.
    pub fn facts_in_context<'a>(&'a self, context: &Context) -> impl Iterator<Item = &'a Fact> {
        let signature = ConstraintSet::of_context(context);
        self.facts.iter().filter(move |fact| {
            self.context(&fact.context_ref)
                .map(ConstraintSet::of_context)
                .is_some_and(|candidate| candidate == signature)
        })
    }

    /// Facts whose unit is structurally equal to `unit`.
    pub fn facts_with_unit<'a>(&'a self, unit: &Unit) -> impl Iterator<Item = &'a Fact> {
        let signature = ConstraintSet::of_unit(unit);
        self.facts.iter().filter(move |fact| {
            fact.unit_ref
                .as_deref()
                .and_then(|id| self.unit(id))
                .map(ConstraintSet::of_unit)
                .is_some_and(|candidate| candidate == signature)
        })
    }
}
