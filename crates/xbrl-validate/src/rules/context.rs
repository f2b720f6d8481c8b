//! Context related rules (section 2).

use xbrl_model::{ConstraintSet, Finding, Period, Severity};

use crate::dedup::group_by_key;
use crate::rules::{RuleContext, context_location};

/// EBA 2.6 - The length of the @id attribute should be limited.
pub fn id_length(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let max = ctx.params.max_id_length;
    ctx.instance
        .contexts
        .iter()
        .filter(|context| context.id.chars().count() > max)
        .map(|context| {
            Finding::rule(
                "EBA.2.6",
                "The length of the {id} attribute should be limited to the necessary characters.",
            )
            .with_severity(Severity::Warning)
            .with_location(context_location(context))
            .with_arg("id", &context.id)
            .with_child(Finding::detail(
                "Semantics SHOULD NOT be expressed in the xbrli:context/@id attribute. The \
                 values of each @id attribute SHOULD be as short as possible.",
            ))
        })
        .collect()
}

/// EBA 2.7 - No unused or duplicated xbrli:context nodes.
pub fn unused_or_duplicated(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let instance = ctx.instance;
    let mut findings = Vec::new();

    for context in &instance.contexts {
        // Structural-equality filter: a context whose duplicate is referenced
        // still counts as used.
        if instance.facts_in_context(context).next().is_none() {
            findings.push(
                Finding::rule("EBA.2.7", "No unused or duplicated {context} nodes.")
                    .with_severity(Severity::Warning)
                    .with_location(context_location(context))
                    .with_arg("context", &context.id)
                    .with_child(Finding::detail(
                        "Unused xbrli:context nodes SHOULD NOT be present in the instance.",
                    )),
            );
        }
    }

    for group in group_by_key(&instance.contexts, ConstraintSet::of_context) {
        let Some((canonical, duplicates)) = group.split_first() else {
            continue;
        };
        for duplicate in duplicates {
            findings.push(
                Finding::rule("EBA.2.7", "No unused or duplicated {context} nodes.")
                    .with_severity(Severity::Warning)
                    .with_location(context_location(duplicate))
                    .with_arg("context", &duplicate.id)
                    .with_child(Finding::detail(
                        "An instance document SHOULD NOT contain duplicated contexts, unless \
                         required for technical reasons, e.g. to support XBRL streaming.",
                    ))
                    .with_child(
                        Finding::detail("Context {context} is a duplicate of context {context2}.")
                            .with_severity(Severity::Other)
                            .with_arg("context", &duplicate.id)
                            .with_arg("context2", &canonical.id),
                    ),
            );
        }
    }

    findings
}

/// EBA 2.9 - Single reporter per instance.
pub fn single_reporter(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(first) = ctx.instance.contexts.first() else {
        return Vec::new();
    };
    let reference = &first.entity;
    ctx.instance
        .contexts
        .iter()
        .filter(|context| context.entity != *reference)
        .map(|context| {
            Finding::rule("EBA.2.9", "Single reporter per instance.")
                .with_location(context_location(context))
                .with_child(Finding::detail(
                    "All xbrli:identifier content and @scheme attributes in an instance MUST \
                     be identical.",
                ))
        })
        .collect()
}

/// EBA 2.10 - The xbrli:period date elements reported must be valid.
pub fn valid_period_dates(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for context in &ctx.instance.contexts {
        if let Period::Instant(instant) = &context.period {
            // A time part means the value was typed xs:dateTime, not xs:date.
            if instant.time.is_some() || instant.offset.is_some() {
                findings.push(
                    Finding::rule("EBA.2.10", "The {period} date elements reported must be valid.")
                        .with_location(context_location(context))
                        .with_arg("period", "xbrli:period")
                        .with_child(Finding::detail(
                            "All xbrli:period date elements MUST be valid against the xs:date \
                             data type, and reported without a timezone.",
                        )),
                );
            }
        }
    }
    findings
}

/// EBA 2.11 - The existence of xbrli:forever is not permitted.
pub fn no_forever(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .contexts
        .iter()
        .filter(|context| matches!(context.period, Period::Forever))
        .map(|context| {
            Finding::rule("EBA.2.11", "The existence of {forever} is not permitted.")
                .with_location(context_location(context))
                .with_arg("forever", "xbrli:forever")
                .with_child(Finding::detail(
                    "The element xbrli:forever MUST NOT be used.",
                ))
        })
        .collect()
}

/// EBA 2.13 - XBRL period consistency.
pub fn period_consistency(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(first) = ctx.instance.contexts.first() else {
        return Vec::new();
    };
    let reference = &first.period;
    ctx.instance
        .contexts
        .iter()
        .filter(|context| !context.period.is_instant() || context.period != *reference)
        .map(|context| {
            Finding::rule("EBA.2.13", "XBRL {period} consistency.")
                .with_location(context_location(context))
                .with_arg("period", "xbrli:period")
                .with_child(Finding::detail(
                    "All xbrl periods in a report instance MUST refer to the same reference \
                     date instant. All xbrl periods MUST be instants.",
                ))
        })
        .collect()
}

/// EBA 2.14 - The existence of xbrli:segment is not permitted.
pub fn no_segments(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .contexts
        .iter()
        .filter(|context| context.segment.is_some())
        .map(|context| {
            Finding::rule("EBA.2.14", "The existence of {segment} is not permitted.")
                .with_location(context_location(context))
                .with_arg("segment", "xbrli:segment")
                .with_child(Finding::detail("xbrli:segment elements MUST NOT be used."))
        })
        .collect()
}

/// EBA 2.15 - Restrictions on the use of the xbrli:scenario element.
pub fn scenario_content(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .contexts
        .iter()
        .filter(|context| {
            context
                .scenario
                .as_ref()
                .is_some_and(|scenario| scenario.has_other_content)
        })
        .map(|context| {
            Finding::rule(
                "EBA.2.15",
                "Restrictions on the use of the {scenario} element.",
            )
            .with_location(context_location(context))
            .with_arg("scenario", "xbrli:scenario")
            .with_child(Finding::detail(
                "If an xbrli:scenario element appears in a xbrli:context, then its children \
                 MUST only be one or more xbrldi:explicitMember and/or xbrldi:typedMember \
                 elements, and MUST NOT contain any other content.",
            ))
        })
        .collect()
}
