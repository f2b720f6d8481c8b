//! Filing syntax rules (section 1).

use std::collections::{BTreeSet, HashMap};

use xbrl_model::{Fact, Finding, Location, Severity, ns, QName};

use crate::rules::{RuleContext, fact_location};

/// EBA 1.4 - Character encoding of XBRL instance documents.
pub fn character_encoding(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let document = &ctx.instance.document;
    if document.encoding.eq_ignore_ascii_case("UTF-8") {
        return Vec::new();
    }
    vec![
        Finding::rule("EBA.1.4", "Character encoding of XBRL instance documents.")
            .with_location(Location::document(&document.uri))
            .with_child(Finding::detail(
                "XBRL instance documents MUST use \"UTF-8\" encoding.",
            )),
    ]
}

/// EBA 1.6 - Filing indicators.
pub fn filing_indicators(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let instance = ctx.instance;
    let profile = ctx.profile;
    let mut findings = Vec::new();

    // Codes the taxonomy advertises for this reporting module.
    let available: BTreeSet<&str> = instance
        .dts
        .tables
        .iter()
        .flat_map(|table| table.labels_with_role(&profile.filing_indicator_label_role))
        .map(|label| label.text.as_str())
        .collect();

    let mut seen: HashMap<String, &Fact> = HashMap::new();
    for indicator in instance.facts_with_concept(&profile.filing_indicator_concept) {
        if let Some(context) = instance.context(&indicator.context_ref) {
            if context.segment.is_some() || context.scenario.is_some() {
                findings.push(
                    Finding::rule("EBA.1.6", "Filing indicators.")
                        .with_location(fact_location(indicator))
                        .with_child(Finding::detail(
                            "The context referenced by the filing indicator elements MUST NOT \
                             contain xbrli:segment or xbrli:scenario elements.",
                        )),
                );
            }
        }

        let code = indicator.normalized_value();
        match seen.entry(code.clone()) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(indicator);
            }
            std::collections::hash_map::Entry::Occupied(_) => {
                findings.push(
                    Finding::rule(
                        "EBA.1.6.1",
                        "Multiple filing indicators for the same reporting unit.",
                    )
                    .with_location(fact_location(indicator))
                    .with_child(Finding::detail(
                        "Reported XBRL instances MUST contain only one filing indicator element \
                         for a given reporting unit (\"template\").",
                    )),
                );
            }
        }

        if !available.contains(code.as_str()) {
            findings.push(
                Finding::rule("EBA.1.6.3", "Filing indicator codes.")
                    .with_location(fact_location(indicator))
                    .with_arg("code", &code)
                    .with_child(Finding::detail(
                        "The values of filing indicators MUST only be those given by the label \
                         resources with the filing-indicator-code role applied to the relevant \
                         tables in the taxonomy for that reporting module.",
                    )),
            );
        }
    }

    findings
}

/// EBA 1.13 - Standalone document declaration.
pub fn standalone_declaration(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let document = &ctx.instance.document;
    if document.standalone.is_none() {
        return Vec::new();
    }
    vec![
        Finding::rule("EBA.1.13", "Standalone document declaration.")
            .with_severity(Severity::Warning)
            .with_location(Location::document(&document.uri))
            .with_child(Finding::detail(
                "XBRL instance documents SHOULD NOT use the XML standalone declaration.",
            )),
    ]
}

/// EBA 1.14 - @xsi:schemaLocation and @xsi:noNamespaceSchemaLocation.
pub fn schema_location_attributes(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let root = &ctx.instance.document.root;
    let attr = root
        .find_attribute(&QName::new(ns::XSI, "schemaLocation"))
        .or_else(|| root.find_attribute(&QName::new(ns::XSI, "noNamespaceSchemaLocation")));
    let Some(attr) = attr else {
        return Vec::new();
    };
    vec![
        Finding::rule(
            "EBA.1.14",
            "@xsi:schemaLocation and @xsi:noNamespaceSchemaLocation.",
        )
        .with_location(Location::node(format!("@xsi:{}", attr.name.local)))
        .with_child(Finding::detail(
            "@xsi:schemaLocation or @xsi:noNamespaceSchemaLocation MUST NOT be used.",
        )),
    ]
}

/// EBA 1.15 - XInclude.
///
/// Only meaningful when the host parsed with XInclude processing enabled;
/// with it disabled an xi:include element would have failed validation.
pub fn xinclude(ctx: &RuleContext<'_>) -> Vec<Finding> {
    if !ctx.options.xinclude {
        return Vec::new();
    }
    vec![
        Finding::rule("EBA.1.15", "XInclude.")
            .with_location(Location::document(&ctx.instance.document.uri))
            .with_child(Finding::detail(
                "XBRL instance documents MUST NOT use the XInclude specification \
                 (xi:include element).",
            ))
            .with_child(
                Finding::detail("Hint: disable XInclude processing in the engine options.")
                    .with_severity(Severity::Other),
            ),
    ]
}
