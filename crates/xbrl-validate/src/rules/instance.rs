//! Instance syntax rules (section 2, document structure).

use xbrl_model::{Finding, Location, QName, Severity, ns};

use crate::rules::RuleContext;

/// EBA 2.1 - The existence of xml:base is not permitted.
pub fn xml_base(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let base = QName::new(ns::XML, "base");
    for element in ctx.instance.document.root.descendants() {
        if let Some(attr) = element.find_attribute(&base) {
            findings.push(
                Finding::rule("EBA.2.1", "The existence of {xml_base} is not permitted.")
                    .with_location(Location::node(format!("{}/@xml:base", element.name.local)))
                    .with_arg("xml_base", format!("xml:base=\"{}\"", attr.value))
                    .with_child(Finding::detail(
                        "The attribute @xml:base MUST NOT appear in any instance document.",
                    )),
            );
        }
    }
    findings
}

/// EBA 2.2 - The absolute URL has to be stated for the link:schemaRef element.
pub fn schema_ref_absolute_url(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(schema_ref) = ctx.instance.schema_refs.first() else {
        return Vec::new();
    };
    if schema_ref.href.starts_with("http://") || schema_ref.href.starts_with("https://") {
        return Vec::new();
    }
    vec![
        Finding::rule(
            "EBA.2.2",
            "The absolute URL has to be stated for the {schemaRef} element.",
        )
        .with_location(Location::node("schemaRef[1]"))
        .with_arg("schemaRef", &schema_ref.href)
        .with_child(Finding::detail(
            "The link:schemaRef element in submitted instances MUST resolve to the full \
             published entry point URL (absolute URL).",
        )),
    ]
}

/// EBA 2.3 - Only one link:schemaRef element is allowed per instance document.
pub fn single_schema_ref(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .schema_refs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, schema_ref)| {
            Finding::rule(
                "EBA.2.3",
                "Only one {schemaRef} element is allowed per instance document.",
            )
            .with_location(Location::node(format!("schemaRef[{}]", index + 1)))
            .with_arg("schemaRef", &schema_ref.href)
            .with_child(Finding::detail(
                "Any reported XBRL instance document MUST contain only one \
                 xbrli:xbrl/link:schemaRef element.",
            ))
        })
        .collect()
}

/// EBA 2.4 - The use of link:linkbaseRef elements is not permitted.
pub fn no_linkbase_refs(ctx: &RuleContext<'_>) -> Vec<Finding> {
    ctx.instance
        .linkbase_refs
        .iter()
        .enumerate()
        .map(|(index, linkbase_ref)| {
            Finding::rule(
                "EBA.2.4",
                "The use of {linkbaseRef} element is not permitted.",
            )
            .with_location(Location::node(format!("linkbaseRef[{}]", index + 1)))
            .with_arg("linkbaseRef", &linkbase_ref.href)
            .with_child(Finding::detail(
                "Reference from an instance to the taxonomy MUST only be by means of the \
                 link:schemaRef element. The element link:linkbaseRef MUST NOT be used in any \
                 instance document.",
            ))
        })
        .collect()
}

/// EBA 2.25 - XBRL footnotes are ignored.
pub fn no_footnotes(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (link_index, link) in ctx.instance.footnote_links.iter().enumerate() {
        for (note_index, _footnote) in link.footnotes.iter().enumerate() {
            findings.push(
                Finding::rule("EBA.2.25", "XBRL {footnote} are ignored.")
                    .with_severity(Severity::Warning)
                    .with_location(Location::node(format!(
                        "footnoteLink[{}]/footnote[{}]",
                        link_index + 1,
                        note_index + 1
                    )))
                    .with_arg("footnote", "footnotes")
                    .with_child(Finding::detail(
                        "Relevant business data MUST only be contained in contexts, units, \
                         schemaRef and facts. A footnote MUST NOT have any impact on the \
                         regulatory content of a report.",
                    )),
            );
        }
    }
    findings
}
