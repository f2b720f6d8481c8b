//! Additional guidance rules (section 3).

use std::collections::{BTreeSet, HashMap};

use xbrl_model::{Finding, Location, NamespaceDecl, Severity, TypedValue};

use crate::rules::{RuleContext, context_location, fact_location};

/// EBA 3.4 - Unused namespace prefixes.
///
/// A prefix counts as used when any element name, attribute name or
/// schema-typed qualified-name value anywhere in the tree dereferences it.
pub fn unused_prefixes(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let root = &ctx.instance.document.root;

    let mut used: BTreeSet<&str> = BTreeSet::new();
    for element in root.descendants() {
        if let Some(prefix) = &element.prefix {
            used.insert(prefix);
        }
        if let Some(TypedValue::QName {
            prefix: Some(prefix),
            ..
        }) = &element.typed_value
        {
            used.insert(prefix);
        }
        for attr in &element.attributes {
            if let Some(prefix) = &attr.prefix {
                used.insert(prefix);
            }
            if let Some(TypedValue::QName {
                prefix: Some(prefix),
                ..
            }) = &attr.typed_value
            {
                used.insert(prefix);
            }
        }
    }

    root.namespace_decls
        .iter()
        .filter_map(|decl| decl.prefix.as_deref())
        .filter(|prefix| !used.contains(prefix))
        .map(|prefix| {
            Finding::rule("EBA.3.4", "Unused namespace prefix {prefix}.")
                .with_severity(Severity::Warning)
                .with_location(Location::node(format!("@xmlns:{prefix}")))
                .with_arg("prefix", prefix)
                .with_child(Finding::detail(
                    "Namespace prefixes that are not used SHOULD NOT be declared in the \
                     instance document.",
                ))
        })
        .collect()
}

/// EBA 3.5 - Re-use of canonical namespace prefixes.
pub fn canonical_prefixes(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut canonical: HashMap<&str, &str> = HashMap::new();
    for schema in &ctx.instance.dts.schemas {
        if let Some(prefix) = schema.canonical_prefix() {
            canonical.insert(schema.target_namespace.as_str(), prefix);
        }
    }

    let mut findings = Vec::new();
    for decl in &ctx.instance.document.root.namespace_decls {
        let Some(prefix) = decl.prefix.as_deref() else {
            continue;
        };
        let Some(expected) = canonical.get(decl.uri.as_str()) else {
            continue;
        };
        if prefix != *expected {
            findings.push(
                Finding::rule("EBA.3.5", "Re-use of canonical namespace prefix {prefix}.")
                    .with_severity(Severity::Warning)
                    .with_location(Location::node(format!("@xmlns:{prefix}")))
                    .with_arg("prefix", prefix)
                    .with_child(
                        Finding::detail(
                            "Namespace prefixes, where used in instance documents, SHOULD \
                             mirror the namespace prefixes as defined by their schema \
                             author(s); the schema uses {expected}.",
                        )
                        .with_arg("expected", *expected),
                    ),
            );
        }
    }
    findings
}

/// EBA 3.6 - LEI and other entity codes.
pub fn entity_scheme(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let deprecated = &ctx.profile.deprecated_entity_scheme;
    ctx.instance
        .contexts
        .iter()
        .filter(|context| context.entity.scheme == *deprecated)
        .map(|context| {
            Finding::rule("EBA.3.6", "LEI and other entity codes.")
                .with_severity(Severity::Warning)
                .with_location(context_location(context))
                .with_child(
                    Finding::detail(
                        "Producers of instance documents are encouraged to switch as quickly \
                         as possible to producing the correct scheme form {scheme}.",
                    )
                    .with_arg("scheme", &ctx.profile.preferred_entity_scheme),
                )
        })
        .collect()
}

/// EBA 3.7 - Unused @id attribute on facts.
///
/// Within an instance, facts can only be referenced by id from footnote
/// locators. Shorthand xpointer fragments are ignored, not resolved.
pub fn unused_fact_ids(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let instance = ctx.instance;

    let mut used_ids: BTreeSet<&str> = BTreeSet::new();
    for link in &instance.footnote_links {
        for locator in &link.locators {
            let fragment = locator.href.rsplit('#').next().unwrap_or_default();
            if !fragment.contains('(') {
                used_ids.insert(fragment);
            }
        }
    }

    instance
        .facts
        .iter()
        .filter(|fact| {
            fact.id
                .as_deref()
                .is_some_and(|id| !used_ids.contains(id))
        })
        .map(|fact| {
            Finding::rule("EBA.3.7", "Unused {id} attribute on fact.")
                .with_severity(Severity::Warning)
                .with_location(fact_location(fact))
                .with_arg("id", fact.id.as_deref().unwrap_or_default())
                .with_child(Finding::detail(
                    "The instance SHOULD NOT include unused @id attributes on facts.",
                ))
        })
        .collect()
}

/// EBA 3.9 - Namespace prefix declarations restricted to the document element.
pub fn prefixes_on_root_only(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut elements = ctx.instance.document.root.descendants();
    elements.next(); // skip the document element itself
    for element in elements {
        for decl in &element.namespace_decls {
            let prefix = decl.prefix.as_deref().unwrap_or("xmlns");
            findings.push(
                Finding::rule(
                    "EBA.3.9",
                    "Namespace prefix declaration {prefix} restricted to the document element.",
                )
                .with_severity(Severity::Warning)
                .with_location(Location::node(format!(
                    "{}/@xmlns:{}",
                    element.name.local, prefix
                )))
                .with_arg("prefix", prefix)
                .with_child(Finding::detail(
                    "Namespace prefix declarations SHOULD be restricted to the document \
                     element.",
                )),
            );
        }
    }
    findings
}

/// EBA 3.10 - Avoid multiple prefix declarations for the same namespace.
pub fn single_prefix_per_namespace(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut seen: HashMap<&str, &NamespaceDecl> = HashMap::new();
    for decl in &ctx.instance.document.root.namespace_decls {
        match seen.entry(decl.uri.as_str()) {
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(decl);
            }
            std::collections::hash_map::Entry::Occupied(slot) => {
                let first = *slot.get();
                let prefix = decl.prefix.as_deref().unwrap_or("xmlns");
                let prefix2 = first.prefix.as_deref().unwrap_or("xmlns");
                findings.push(
                    Finding::rule(
                        "EBA.3.10",
                        "Avoid multiple prefix declarations {prefix} and {prefix2} for the \
                         same namespace {namespace}.",
                    )
                    .with_severity(Severity::Warning)
                    .with_location(Location::node(format!("@xmlns:{prefix}")))
                    .with_arg("prefix", prefix)
                    .with_arg("prefix2", prefix2)
                    .with_arg("namespace", &decl.uri)
                    .with_child(Finding::detail(
                        "Namespaces used in the document SHOULD be associated to a single \
                         namespace prefix.",
                    )),
                );
            }
        }
    }
    findings
}
