//! Unit related rules (sections 2 and 3).

use xbrl_model::{ConstraintSet, Fact, Finding, Severity, Unit};

use crate::dedup::group_by_key;
use crate::error::RuleError;
use crate::rules::{RuleContext, fact_location, fact_pointer, unit_location};

/// EBA 2.21 - Duplicates of xbrli:xbrl/xbrli:unit.
pub fn duplicate_units(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for group in group_by_key(&ctx.instance.units, ConstraintSet::of_unit) {
        let Some((canonical, duplicates)) = group.split_first() else {
            continue;
        };
        for duplicate in duplicates {
            findings.push(
                Finding::rule("EBA.2.21", "Duplicates of xbrli:xbrl/xbrli:unit.")
                    .with_severity(Severity::Warning)
                    .with_location(unit_location(duplicate))
                    .with_child(Finding::detail(
                        "An XBRL instance SHOULD NOT, in general, contain duplicated units, \
                         unless required for technical reasons, e.g. to support XBRL streaming.",
                    ))
                    .with_child(
                        Finding::detail("Unit {unit} is a duplicate of unit {unit2}.")
                            .with_severity(Severity::Other)
                            .with_arg("unit", &duplicate.id)
                            .with_arg("unit2", &canonical.id),
                    ),
            );
        }
    }
    findings
}

/// EBA 2.22 - Unused xbrli:xbrl/xbrli:unit.
pub fn unused_units(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let instance = ctx.instance;
    instance
        .units
        .iter()
        .filter(|unit| instance.facts_with_unit(unit).next().is_none())
        .map(|unit| {
            Finding::rule("EBA.2.22", "Unused xbrli:xbrl/xbrli:unit.")
                .with_severity(Severity::Warning)
                .with_location(unit_location(unit))
                .with_child(Finding::detail(
                    "An XBRL instance SHOULD NOT contain unused xbrli:unit nodes.",
                ))
        })
        .collect()
}

/// EBA 3.1 - Choice of currency for monetary facts.
///
/// Facts carrying the denomination member report in their own currency,
/// which must agree with the significant-currency dimension when bound;
/// every other monetary fact must share a single currency.
pub fn monetary_currency(ctx: &RuleContext<'_>) -> Result<Vec<Finding>, RuleError> {
    let instance = ctx.instance;
    let profile = ctx.profile;

    // A profile concept missing from the DTS means the wrong taxonomy is
    // loaded; that is a configuration fault, not a finding.
    for name in [
        &profile.currency_context_dimension,
        &profile.denominated_member,
        &profile.significant_currency_dimension,
    ] {
        if instance.dts.resolve_concept(name).is_none() {
            return Err(RuleError::UnresolvedConcept(name.clone()));
        }
    }

    let is_denominated = |fact: &Fact| {
        instance
            .context(&fact.context_ref)
            .and_then(|context| context.explicit_member(&profile.currency_context_dimension))
            .is_some_and(|member| *member == profile.denominated_member)
    };
    let is_monetary = |fact: &Fact| {
        instance
            .dts
            .resolve_concept(&fact.concept)
            .is_some_and(|concept| concept.item_type.is_monetary())
    };

    let mut findings = Vec::new();

    for fact in &instance.facts {
        if !is_denominated(fact) || !is_monetary(fact) {
            continue;
        }
        let Some(currency_member) = instance
            .context(&fact.context_ref)
            .and_then(|context| context.explicit_member(&profile.significant_currency_dimension))
        else {
            continue;
        };
        let unit_currency = fact
            .unit_ref
            .as_deref()
            .and_then(|id| instance.unit(id))
            .and_then(Unit::currency);
        if unit_currency != Some(currency_member.local.as_str()) {
            findings.push(
                Finding::rule("EBA.3.1", "Choice of currency for monetary fact {fact}.")
                    .with_location(fact_location(fact))
                    .with_arg("fact", fact_pointer(fact))
                    .with_child(Finding::detail(
                        "For facts reported in their currency of denomination whose context \
                         also includes the significant-currency dimension, the currency of \
                         the fact (i.e. unit) MUST be consistent with the value given for \
                         this dimension.",
                    )),
            );
        }
    }

    // The single-currency check only matters once more than one monetary
    // unit is present.
    let monetary_units = instance.units.iter().filter(|unit| unit.is_monetary()).count();
    if monetary_units > 1 {
        let mut reference_unit: Option<&str> = None;
        for fact in &instance.facts {
            if is_denominated(fact) || !is_monetary(fact) {
                continue;
            }
            let Some(unit_ref) = fact.unit_ref.as_deref() else {
                continue;
            };
            match reference_unit {
                None => reference_unit = Some(unit_ref),
                Some(reference) => {
                    if unit_ref != reference {
                        findings.push(
                            Finding::rule(
                                "EBA.3.1",
                                "Choice of currency for monetary fact {fact}.",
                            )
                            .with_location(fact_location(fact))
                            .with_arg("fact", fact_pointer(fact))
                            .with_child(Finding::detail(
                                "An instance MUST express all monetary facts which are not \
                                 reported in their currency of denomination using a single \
                                 currency.",
                            )),
                        );
                    }
                }
            }
        }
    }

    Ok(findings)
}

/// EBA 3.2 - Non-monetary numeric units.
pub fn non_monetary_numeric_units(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let instance = ctx.instance;
    let mut findings = Vec::new();
    for fact in &instance.facts {
        let Some(concept) = instance.dts.resolve_concept(&fact.concept) else {
            continue;
        };
        if !concept.item_type.is_numeric() || concept.item_type.is_monetary() {
            continue;
        }
        let pure = fact
            .unit_ref
            .as_deref()
            .and_then(|id| instance.unit(id))
            .is_some_and(Unit::is_pure);
        if !pure {
            findings.push(
                Finding::rule("EBA.3.2", "Non-monetary numeric units.")
                    .with_location(fact_location(fact))
                    .with_child(Finding::detail(
                        "An instance MUST express its non-monetary numeric values using the \
                         \"pure\" unit: a unit element with a single measure element as its \
                         only child, whose local part is \"pure\" in the XBRL instance \
                         namespace.",
                    )),
            );
        }
    }
    findings
}
