//! Aspect signatures for structural equivalence.
//!
//! Two contexts (or units) are interchangeable for fact-reporting purposes
//! exactly when their constraint sets are equal as unordered mappings from
//! aspect to value. Discovery order never affects equality.

use std::collections::BTreeMap;

use crate::instance::{Context, Unit};
use crate::qname::QName;

/// Identity of one aspect of a context or unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Aspect {
    Entity,
    Period,
    Segment,
    Dimension(QName),
    Unit,
}

/// Value bound to an aspect, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AspectValue {
    Entity(crate::instance::EntityIdentifier),
    Period(crate::instance::Period),
    Segment(String),
    Member(crate::instance::MemberValue),
    /// Unit measures, sorted so multiplication order is irrelevant.
    Measures(Vec<QName>),
}

/// Canonical signature of a context or unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConstraintSet(BTreeMap<Aspect, AspectValue>);

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, aspect: Aspect, value: AspectValue) {
        self.0.insert(aspect, value);
    }

    pub fn get(&self, aspect: &Aspect) -> Option<&AspectValue> {
        self.0.get(aspect)
    }

    pub fn of_context(context: &Context) -> Self {
        let mut set = Self::new();
        set.insert(Aspect::Entity, AspectValue::Entity(context.entity.clone()));
        set.insert(Aspect::Period, AspectValue::Period(context.period.clone()));
        if let Some(segment) = &context.segment {
            set.insert(Aspect::Segment, AspectValue::Segment(segment.clone()));
        }
        if let Some(scenario) = &context.scenario {
            for member in &scenario.members {
                set.insert(
                    Aspect::Dimension(member.dimension.clone()),
                    AspectValue::Member(member.value.clone()),
                );
            }
        }
        set
    }

    pub fn of_unit(unit: &Unit) -> Self {
        let mut measures = unit.measures.clone();
        measures.sort();
        let mut set = Self::new();
        set.insert(Aspect::Unit, AspectValue::Measures(measures));
        set
    }
}
