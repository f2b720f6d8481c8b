//! Fact related rules (section 2) and the string-length guidance (3.8).

use std::collections::{BTreeMap, HashMap};

use xbrl_model::{Fact, Finding, QName, Severity};

use crate::rules::{RuleContext, fact_location, fact_pointer};

/// EBA 2.16 - Duplicate (redundant/inconsistent) facts.
///
/// Contexts and units are already deduplicated by 2.7 and 2.21, so equal
/// context and unit references are enough; no aspect hashing is needed here.
pub fn duplicate_facts(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut by_concept: BTreeMap<&QName, Vec<&Fact>> = BTreeMap::new();
    for fact in &ctx.instance.facts {
        if fact.concept == ctx.profile.filing_indicator_concept {
            continue;
        }
        by_concept.entry(&fact.concept).or_default().push(fact);
    }

    for facts in by_concept.values() {
        let mut first_seen: HashMap<(&str, Option<&str>), &Fact> = HashMap::new();
        for fact in facts {
            let key = (fact.context_ref.as_str(), fact.lang.as_deref());
            match first_seen.entry(key) {
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(fact);
                }
                std::collections::hash_map::Entry::Occupied(slot) => {
                    let original = *slot.get();
                    if fact.unit_ref == original.unit_ref {
                        findings.push(
                            Finding::rule(
                                "EBA.2.16",
                                "Duplicate (redundant/inconsistent) facts {fact} and {fact2}.",
                            )
                            .with_location(fact_location(fact))
                            .with_arg("fact", fact_pointer(fact))
                            .with_arg("fact2", fact_pointer(original))
                            .with_child(Finding::detail(
                                "Instances MUST NOT contain duplicate business facts.",
                            )),
                        );
                    } else {
                        findings.push(
                            Finding::rule("EBA.2.16.1", "No multi-unit facts {fact} and {fact2}.")
                                .with_location(fact_location(fact))
                                .with_arg("fact", fact_pointer(fact))
                                .with_arg("fact2", fact_pointer(original))
                                .with_child(Finding::detail(
                                    "Instances MUST NOT contain business facts which would be \
                                     duplicates were their units not different.",
                                )),
                        );
                    }
                }
            }
        }
    }

    findings
}

/// EBA 2.17 - The use of the @precision attribute is not permitted.
pub fn no_precision(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .facts
        .iter()
        .filter(|fact| fact.precision.is_some())
        .map(|fact| {
            Finding::rule(
                "EBA.2.17",
                "The use of the {precision} attribute is not permitted.",
            )
            .with_location(fact_location(fact))
            .with_arg("precision", "@precision")
            .with_child(Finding::detail(
                "@decimals MUST be used as the only means for expressing precision on a fact.",
            ))
        })
        .collect()
}

/// EBA 2.19 - Guidance on use of zeros and non-reported data.
pub fn no_nil_facts(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .facts
        .iter()
        .filter(|fact| fact.nil)
        .map(|fact| {
            Finding::rule("EBA.2.19", "Guidance on use of zeros and non-reported data.")
                .with_location(fact_location(fact))
                .with_child(
                    Finding::detail("The {xsi_nil} attribute MUST NOT be used in the instance.")
                        .with_arg("xsi_nil", "@xsi:nil"),
                )
        })
        .collect()
}

/// EBA 3.8 - Length of strings in instance.
pub fn string_length(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let max = ctx.params.max_string_length;
    let mut findings = Vec::new();
    for fact in &ctx.instance.facts {
        let Some(concept) = ctx.instance.dts.resolve_concept(&fact.concept) else {
            continue;
        };
        if concept.item_type.is_string() && fact.value.chars().count() > max {
            findings.push(
                Finding::rule("EBA.3.8", "Length of strings in instance.")
                    .with_severity(Severity::Warning)
                    .with_location(fact_location(fact))
                    .with_child(Finding::detail(
                        "The values of each string SHOULD be as short as possible.",
                    )),
            );
        }
    }
    findings
}
