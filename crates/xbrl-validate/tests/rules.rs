use std::collections::HashMap;

use chrono::{FixedOffset, NaiveDate, NaiveTime};

use xbrl_model::{
    Concept, Context, DimensionValue, Document, Dts, Element, EntityIdentifier, ErrorLog, Fact,
    Finding, Footnote, FootnoteLink, Instance, InstantValue, ItemType, Label, Location, Locator,
    MemberValue, NamespaceDecl, Period, QName, Scenario, SchemaRef, Severity, Table,
    TaxonomySchema, Unit, ns,
};
use xbrl_validate::{
    EngineOptions, RuleContext, RuleParams, TaxonomyProfile, on_validation_finished,
    run_filing_checks,
};

const ENTRY_POINT: &str = "http://www.eba.europa.eu/fws/corep/2015-02-16/mod/corep_con.xsd";
const MET_NS: &str = "http://www.eba.europa.eu/xbrl/crr/dict/met";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn instant(y: i32, m: u32, d: u32) -> Period {
    Period::Instant(InstantValue::date(date(y, m, d)))
}

fn context(id: &str) -> Context {
    Context {
        id: id.to_string(),
        entity: EntityIdentifier::new(
            "http://standards.iso.org/iso/17442",
            "DUMMYLEI123456789012",
        ),
        segment: None,
        period: instant(2020, 12, 31),
        scenario: None,
    }
}

fn monetary_unit(id: &str, currency: &str) -> Unit {
    Unit::new(id, vec![QName::new(ns::ISO4217, currency)])
}

fn metric(local: &str) -> QName {
    QName::new(MET_NS, local)
}

fn monetary_fact(concept: &str, context_ref: &str, unit_ref: &str) -> Fact {
    let mut fact = Fact::new(metric(concept), context_ref);
    fact.unit_ref = Some(unit_ref.to_string());
    fact.value = "1000".to_string();
    fact.decimals = Some("-3".to_string());
    fact
}

/// Minimal instance that passes every rule: one context, one monetary unit,
/// one monetary fact, one absolute schemaRef.
fn base_instance() -> Instance {
    let profile = TaxonomyProfile::eba();

    let mut root = Element::new(QName::new(ns::XBRLI, "xbrl"));
    root.prefix = Some("xbrli".to_string());
    root.namespace_decls.push(NamespaceDecl::new("xbrli", ns::XBRLI));

    let document = Document {
        uri: "instance.xbrl".to_string(),
        encoding: "UTF-8".to_string(),
        standalone: None,
        root,
    };

    let mut dts = Dts::default();
    dts.add_concept(Concept::new(metric("m1"), ItemType::Monetary));
    dts.add_concept(Concept::new(
        profile.currency_context_dimension.clone(),
        ItemType::Other,
    ));
    dts.add_concept(Concept::new(
        profile.significant_currency_dimension.clone(),
        ItemType::Other,
    ));
    dts.add_concept(Concept::new(profile.denominated_member.clone(), ItemType::Other));

    let mut instance = Instance::new(document, dts);
    instance.schema_refs.push(SchemaRef {
        href: ENTRY_POINT.to_string(),
    });
    instance.contexts.push(context("c1"));
    instance.units.push(monetary_unit("u1", "EUR"));
    instance.facts.push(monetary_fact("m1", "c1", "u1"));
    instance
}

fn run(instance: &Instance) -> ErrorLog {
    run_with(instance, RuleParams::default(), EngineOptions::default())
}

fn run_with(instance: &Instance, params: RuleParams, options: EngineOptions) -> ErrorLog {
    let profile = TaxonomyProfile::eba();
    let mut log = ErrorLog::new();
    let ctx = RuleContext {
        instance,
        params: &params,
        options: &options,
        profile: &profile,
    };
    let failures = run_filing_checks(&ctx, &mut log);
    assert!(failures.is_empty(), "unexpected rule failures: {failures:?}");
    log
}

fn rule_findings<'a>(log: &'a ErrorLog, rule: &str) -> Vec<&'a Finding> {
    log.iter()
        .filter(|finding| finding.rule_id.as_deref() == Some(rule))
        .collect()
}

fn node_pointer(finding: &Finding) -> &str {
    match finding.location.as_ref().expect("location") {
        Location::Node { pointer } => pointer,
        Location::Document { .. } => panic!("expected a node location"),
    }
}

#[test]
fn clean_instance_reports_nothing() {
    let log = run(&base_instance());
    assert!(log.is_empty(), "unexpected findings: {:?}", log.findings());
}

#[test]
fn full_sequence_is_idempotent() {
    let mut instance = base_instance();
    instance.contexts.push(context("c2")); // duplicate
    instance.facts.push(monetary_fact("m1", "c1", "u1")); // duplicate fact
    instance.contexts[0].segment = Some("seg".to_string());

    let first = run(&instance);
    let second = run(&instance);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

// Filing syntax rules

#[test]
fn non_utf8_encoding_is_flagged() {
    let mut instance = base_instance();
    instance.document.encoding = "ISO-8859-1".to_string();
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.1.4").len(), 1);
}

#[test]
fn lowercase_utf8_encoding_is_accepted() {
    let mut instance = base_instance();
    instance.document.encoding = "utf-8".to_string();
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.1.4").is_empty());
}

#[test]
fn standalone_declaration_is_flagged_as_warning() {
    let mut instance = base_instance();
    instance.document.standalone = Some(true);
    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.1.13");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
}

#[test]
fn duplicate_filing_indicators_and_unknown_codes() {
    let profile = TaxonomyProfile::eba();
    let mut instance = base_instance();
    instance
        .dts
        .add_concept(Concept::new(profile.filing_indicator_concept.clone(), ItemType::Other));
    instance.dts.tables.push(Table {
        id: "t1".to_string(),
        labels: vec![Label {
            role: profile.filing_indicator_label_role.clone(),
            text: "C_01.00".to_string(),
        }],
    });

    let mut ind1 = Fact::new(profile.filing_indicator_concept.clone(), "c1");
    ind1.value = "C_01.00".to_string();
    let mut ind2 = Fact::new(profile.filing_indicator_concept.clone(), "c1");
    ind2.value = " C_01.00 ".to_string(); // duplicate after normalization
    let mut ind3 = Fact::new(profile.filing_indicator_concept.clone(), "c1");
    ind3.value = "X_99.99".to_string(); // not advertised by the taxonomy
    instance.facts.extend([ind1, ind2, ind3]);

    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.1.6.1").len(), 1);
    assert_eq!(rule_findings(&log, "EBA.1.6.3").len(), 1);
    assert!(rule_findings(&log, "EBA.1.6").is_empty());
}

#[test]
fn filing_indicator_context_must_be_bare() {
    let profile = TaxonomyProfile::eba();
    let mut instance = base_instance();
    instance
        .dts
        .add_concept(Concept::new(profile.filing_indicator_concept.clone(), ItemType::Other));
    let mut c2 = context("c2");
    c2.scenario = Some(Scenario {
        members: vec![DimensionValue {
            dimension: QName::new("urn:dim", "d1"),
            value: MemberValue::Explicit(QName::new("urn:dom", "m1")),
        }],
        has_other_content: false,
    });
    instance.contexts.push(c2);
    let mut indicator = Fact::new(profile.filing_indicator_concept.clone(), "c2");
    indicator.value = "C_01.00".to_string();
    instance.facts.push(indicator);

    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.1.6").len(), 1);
}

#[test]
fn xinclude_flagged_only_when_host_enables_it() {
    let instance = base_instance();
    let log = run_with(
        &instance,
        RuleParams::default(),
        EngineOptions {
            xinclude: true,
            utr_validation: false,
        },
    );
    let findings = rule_findings(&log, "EBA.1.15");
    assert_eq!(findings.len(), 1);
    // Citation detail plus the hint.
    assert_eq!(findings[0].children.len(), 2);
    assert_eq!(findings[0].children[1].severity, Severity::Other);

    let quiet = run(&instance);
    assert!(rule_findings(&quiet, "EBA.1.15").is_empty());
}

// Instance syntax rules

#[test]
fn xml_base_is_found_anywhere_in_the_tree() {
    let mut instance = base_instance();
    let mut nested = Element::new(QName::new(ns::XBRLI, "context"));
    let mut attr = xbrl_model::Attribute::new(QName::new(ns::XML, "base"), "http://example.org/");
    attr.prefix = Some("xml".to_string());
    nested.attributes.push(attr);
    instance.document.root.children.push(nested);

    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.1").len(), 1);
}

#[test]
fn relative_schema_ref_url_is_flagged() {
    let mut instance = base_instance();
    instance.schema_refs[0].href = "reports/corep_con.xsd".to_string();
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.2").len(), 1);
}

#[test]
fn excess_schema_refs_are_each_flagged() {
    let mut instance = base_instance();
    instance.schema_refs.push(SchemaRef {
        href: ENTRY_POINT.to_string(),
    });
    instance.schema_refs.push(SchemaRef {
        href: ENTRY_POINT.to_string(),
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.3").len(), 2);
}

#[test]
fn linkbase_refs_and_footnotes_are_flagged() {
    let mut instance = base_instance();
    instance.linkbase_refs.push(xbrl_model::LinkbaseRef {
        href: "http://example.org/linkbase.xml".to_string(),
    });
    instance.footnote_links.push(FootnoteLink {
        locators: Vec::new(),
        footnotes: vec![Footnote {
            text: "a note".to_string(),
        }],
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.4").len(), 1);
    let footnotes = rule_findings(&log, "EBA.2.25");
    assert_eq!(footnotes.len(), 1);
    assert_eq!(footnotes[0].severity, Severity::Warning);
}

// Context rules

#[test]
fn context_id_length_boundary() {
    let mut params_map = HashMap::new();
    params_map.insert("max-id-length".to_string(), "10".to_string());
    let params = RuleParams::from_script_params(&params_map);

    let mut instance = base_instance();
    instance.contexts[0].id = "ctx4567890".to_string(); // exactly 10
    instance.facts[0].context_ref = "ctx4567890".to_string();
    let log = run_with(&instance, params, EngineOptions::default());
    assert!(rule_findings(&log, "EBA.2.6").is_empty());

    instance.contexts[0].id = "ctx45678901".to_string(); // 11
    instance.facts[0].context_ref = "ctx45678901".to_string();
    let log = run_with(&instance, params, EngineOptions::default());
    assert_eq!(rule_findings(&log, "EBA.2.6").len(), 1);
}

#[test]
fn duplicate_context_cites_first_seen_as_canonical() {
    let mut instance = base_instance();
    instance.contexts.push(context("c2"));
    instance.contexts.push(context("c3"));

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.2.7");
    // Two duplicates of c1, no unused findings: the duplicates count as
    // used because the fact's context is structurally equal to them.
    assert_eq!(findings.len(), 2);
    for finding in &findings {
        assert_eq!(finding.children.len(), 2);
        let citation = &finding.children[1];
        assert!(citation.rendered_message().contains("duplicate of context c1"));
    }
}

#[test]
fn unused_context_is_flagged() {
    let mut instance = base_instance();
    let mut c2 = context("c2");
    c2.scenario = Some(Scenario {
        members: vec![DimensionValue {
            dimension: QName::new("urn:dim", "d1"),
            value: MemberValue::Explicit(QName::new("urn:dom", "m1")),
        }],
        has_other_content: false,
    });
    instance.contexts.push(c2);

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.2.7");
    assert_eq!(findings.len(), 1);
    assert_eq!(node_pointer(findings[0]), "context[c2]");
    assert!(findings[0].children[0].message.contains("Unused"));
}

#[test]
fn mixed_entity_identifiers_are_flagged() {
    let mut instance = base_instance();
    let mut c2 = context("c2");
    c2.entity = EntityIdentifier::new("http://standards.iso.org/iso/17442", "OTHERLEI00000000000X");
    instance.contexts.push(c2);
    instance.facts.push(monetary_fact("m1", "c2", "u1"));

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.2.9");
    assert_eq!(findings.len(), 1);
    assert_eq!(node_pointer(findings[0]), "context[c2]");
}

#[test]
fn timezone_bearing_instant_is_flagged() {
    let mut instance = base_instance();
    instance.contexts[0].period = Period::Instant(InstantValue {
        date: date(2020, 12, 31),
        time: None,
        offset: Some(FixedOffset::east_opt(3600).expect("offset")),
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.10").len(), 1);
}

#[test]
fn datetime_typed_instant_is_flagged() {
    let mut instance = base_instance();
    instance.contexts[0].period = Period::Instant(InstantValue {
        date: date(2020, 12, 31),
        time: NaiveTime::from_hms_opt(0, 0, 0),
        offset: None,
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.10").len(), 1);
}

#[test]
fn forever_period_is_flagged() {
    let mut instance = base_instance();
    instance.contexts[0].period = Period::Forever;
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.11").len(), 1);
}

#[test]
fn period_consistency_cites_only_later_contexts() {
    let mut instance = base_instance();
    let mut c2 = context("c2");
    c2.period = instant(2020, 6, 30);
    instance.contexts.push(c2);

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.2.13");
    assert_eq!(findings.len(), 1);
    assert_eq!(node_pointer(findings[0]), "context[c2]");
}

#[test]
fn segment_and_scenario_content_restrictions() {
    let mut instance = base_instance();
    instance.contexts[0].segment = Some("branch data".to_string());
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.14").len(), 1);

    let mut instance = base_instance();
    instance.contexts[0].scenario = Some(Scenario {
        members: Vec::new(),
        has_other_content: true,
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.15").len(), 1);
}

// Fact rules

#[test]
fn duplicate_facts_with_same_unit() {
    let mut instance = base_instance();
    instance.facts.push(monetary_fact("m1", "c1", "u1"));
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.16").len(), 1);
    assert!(rule_findings(&log, "EBA.2.16.1").is_empty());
}

#[test]
fn duplicate_facts_with_different_units_are_multi_unit() {
    let mut instance = base_instance();
    instance.units.push(monetary_unit("u2", "USD"));
    instance.facts.push(monetary_fact("m1", "c1", "u2"));
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.16.1").len(), 1);
    assert!(rule_findings(&log, "EBA.2.16").is_empty());
}

#[test]
fn excess_duplicates_emit_one_finding_each() {
    let mut instance = base_instance();
    instance.facts.push(monetary_fact("m1", "c1", "u1"));
    instance.facts.push(monetary_fact("m1", "c1", "u1"));
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.16").len(), 2);
}

#[test]
fn precision_and_nil_are_rejected() {
    let mut instance = base_instance();
    instance.facts[0].precision = Some("4".to_string());
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.17").len(), 1);

    let mut instance = base_instance();
    instance.facts[0].nil = true;
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.2.19").len(), 1);
}

// Unit rules

#[test]
fn duplicate_and_unused_units() {
    let mut instance = base_instance();
    instance.units.push(monetary_unit("u2", "EUR")); // duplicate of u1
    let log = run(&instance);
    let duplicates = rule_findings(&log, "EBA.2.21");
    assert_eq!(duplicates.len(), 1);
    assert!(
        duplicates[0].children[1]
            .rendered_message()
            .contains("duplicate of unit u1")
    );
    // u2 is structurally equal to the used u1, so it is not unused.
    assert!(rule_findings(&log, "EBA.2.22").is_empty());

    let mut instance = base_instance();
    instance.units.push(monetary_unit("u2", "USD"));
    let log = run(&instance);
    let unused = rule_findings(&log, "EBA.2.22");
    assert_eq!(unused.len(), 1);
    assert_eq!(node_pointer(unused[0]), "unit[u2]");
}

#[test]
fn second_currency_without_qualifier_is_flagged_once() {
    let mut instance = base_instance();
    instance.dts.add_concept(Concept::new(metric("m2"), ItemType::Monetary));
    instance.units.push(monetary_unit("u2", "USD"));
    instance.facts.push(monetary_fact("m2", "c1", "u2"));

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.1");
    assert_eq!(findings.len(), 1);
    assert!(node_pointer(findings[0]).contains("m2"));
}

#[test]
fn denominated_facts_must_match_currency_dimension() {
    let profile = TaxonomyProfile::eba();
    let mut instance = base_instance();
    let mut c2 = context("c2");
    c2.scenario = Some(Scenario {
        members: vec![
            DimensionValue {
                dimension: profile.currency_context_dimension.clone(),
                value: MemberValue::Explicit(profile.denominated_member.clone()),
            },
            DimensionValue {
                dimension: profile.significant_currency_dimension.clone(),
                value: MemberValue::Explicit(QName::new(
                    "http://www.eba.europa.eu/xbrl/crr/dict/dom/CU",
                    "USD",
                )),
            },
        ],
        has_other_content: false,
    });
    instance.contexts.push(c2);
    // Unit says EUR, the significant-currency dimension says USD.
    instance.facts.push(monetary_fact("m1", "c2", "u1"));

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.1");
    assert_eq!(findings.len(), 1);
    assert_eq!(node_pointer(findings[0]), "fact[m1][context=c2]");
}

#[test]
fn missing_profile_concept_aborts_only_that_rule() {
    let mut instance = base_instance();
    let profile = TaxonomyProfile::eba();
    instance.dts.concepts.remove(&profile.currency_context_dimension);
    instance.facts[0].precision = Some("2".to_string());

    let params = RuleParams::default();
    let options = EngineOptions::default();
    let mut log = ErrorLog::new();
    let ctx = RuleContext {
        instance: &instance,
        params: &params,
        options: &options,
        profile: &profile,
    };
    let failures = run_filing_checks(&ctx, &mut log);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].rule, "EBA.3.1");
    // The precision rule still ran.
    assert_eq!(rule_findings(&log, "EBA.2.17").len(), 1);
}

#[test]
fn non_monetary_numeric_facts_require_pure_unit() {
    let mut instance = base_instance();
    instance.dts.add_concept(Concept::new(metric("r1"), ItemType::Decimal));
    let mut ratio = Fact::new(metric("r1"), "c1");
    ratio.unit_ref = Some("u1".to_string()); // EUR, not pure
    ratio.value = "0.25".to_string();
    instance.facts.push(ratio);
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.3.2").len(), 1);

    let mut instance = base_instance();
    instance.dts.add_concept(Concept::new(metric("r1"), ItemType::Decimal));
    instance
        .units
        .push(Unit::new("pure", vec![QName::new(ns::XBRLI, "pure")]));
    let mut ratio = Fact::new(metric("r1"), "c1");
    ratio.unit_ref = Some("pure".to_string());
    ratio.value = "0.25".to_string();
    instance.facts.push(ratio);
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.3.2").is_empty());
}

// Additional guidance

#[test]
fn undereferenced_prefix_is_flagged_once() {
    let mut instance = base_instance();
    instance
        .document
        .root
        .namespace_decls
        .push(NamespaceDecl::new("foo", "urn:example"));
    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.4");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rendered_message(), "Unused namespace prefix foo.");
}

#[test]
fn dereferenced_prefix_is_not_flagged() {
    let mut instance = base_instance();
    instance
        .document
        .root
        .namespace_decls
        .push(NamespaceDecl::new("foo", "urn:example"));
    let mut child = Element::new(QName::new("urn:example", "bar"));
    child.prefix = Some("foo".to_string());
    instance.document.root.children.push(child);
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.3.4").is_empty());
}

#[test]
fn qname_typed_value_counts_as_prefix_use() {
    let mut instance = base_instance();
    instance
        .document
        .root
        .namespace_decls
        .push(NamespaceDecl::new("foo", "urn:example"));
    let mut child = Element::new(QName::new(ns::XBRLI, "measure"));
    child.typed_value = Some(xbrl_model::TypedValue::QName {
        prefix: Some("foo".to_string()),
        value: QName::new("urn:example", "pure"),
    });
    instance.document.root.children.push(child);
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.3.4").is_empty());
}

#[test]
fn non_canonical_prefix_is_flagged() {
    let mut instance = base_instance();
    instance.dts.schemas.push(TaxonomySchema {
        target_namespace: MET_NS.to_string(),
        namespace_decls: vec![NamespaceDecl::new("met", MET_NS)],
    });
    instance
        .document
        .root
        .namespace_decls
        .push(NamespaceDecl::new("mx", MET_NS));
    let mut child = Element::new(QName::new(MET_NS, "m1"));
    child.prefix = Some("mx".to_string());
    instance.document.root.children.push(child);

    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.5");
    assert_eq!(findings.len(), 1);
    assert!(findings[0].children[0].rendered_message().contains("met"));
}

#[test]
fn deprecated_lei_scheme_is_flagged() {
    let mut instance = base_instance();
    instance.contexts[0].entity =
        EntityIdentifier::new("http://standard.iso.org/iso/17442", "DUMMYLEI123456789012");
    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.6");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
}

#[test]
fn fact_id_unused_unless_referenced_by_footnote_locator() {
    let mut instance = base_instance();
    instance.facts[0].id = Some("f1".to_string());
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.3.7").len(), 1);

    instance.footnote_links.push(FootnoteLink {
        locators: vec![Locator {
            href: "#f1".to_string(),
        }],
        footnotes: Vec::new(),
    });
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.3.7").is_empty());
}

#[test]
fn shorthand_xpointer_fragments_are_ignored() {
    let mut instance = base_instance();
    instance.facts[0].id = Some("f1".to_string());
    instance.footnote_links.push(FootnoteLink {
        locators: vec![Locator {
            href: "#element(/1/3)".to_string(),
        }],
        footnotes: Vec::new(),
    });
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.3.7").len(), 1);
}

#[test]
fn namespace_declarations_outside_root_are_flagged() {
    let mut instance = base_instance();
    let mut child = Element::new(QName::new(ns::XBRLI, "context"));
    child.namespace_decls.push(NamespaceDecl::new("bar", "urn:bar"));
    instance.document.root.children.push(child);
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.3.9").len(), 1);
}

#[test]
fn two_prefixes_for_one_namespace_are_flagged() {
    let mut instance = base_instance();
    instance
        .document
        .root
        .namespace_decls
        .push(NamespaceDecl::new("xbrli2", ns::XBRLI));
    let log = run(&instance);
    let findings = rule_findings(&log, "EBA.3.10");
    assert_eq!(findings.len(), 1);
    assert!(
        findings[0]
            .rendered_message()
            .contains("xbrli2 and xbrli")
    );
}

#[test]
fn long_string_facts_warn_above_the_limit() {
    let mut instance = base_instance();
    instance.dts.add_concept(Concept::new(metric("s1"), ItemType::String));
    let mut note = Fact::new(metric("s1"), "c1");
    note.value = "x".repeat(101);
    instance.facts.push(note);
    let log = run(&instance);
    assert_eq!(rule_findings(&log, "EBA.3.8").len(), 1);

    let mut instance = base_instance();
    instance.dts.add_concept(Concept::new(metric("s1"), ItemType::String));
    let mut note = Fact::new(metric("s1"), "c1");
    note.value = "x".repeat(100);
    instance.facts.push(note);
    let log = run(&instance);
    assert!(rule_findings(&log, "EBA.3.8").is_empty());
}

// Lifecycle entry points

#[test]
fn validation_finished_runs_checks_on_a_valid_instance() {
    let instance = base_instance();
    let params = RuleParams::default();
    let options = EngineOptions::default();
    let profile = TaxonomyProfile::eba();
    let mut log = ErrorLog::new();
    let failures = on_validation_finished(Some(&instance), &params, &options, &profile, &mut log);
    assert!(failures.is_empty());
    assert!(log.is_empty());
}

#[test]
fn structural_failure_replaces_log_with_wrapper() {
    let params = RuleParams::default();
    let options = EngineOptions::default();
    let profile = TaxonomyProfile::eba();
    let mut log = ErrorLog::new();
    log.report(Finding::rule("xbrl.core", "calculation inconsistency"));
    let failures = on_validation_finished(None, &params, &options, &profile, &mut log);
    assert!(failures.is_empty());
    assert_eq!(log.len(), 1);
    assert_eq!(log.findings()[0].rule_id.as_deref(), Some("EBA.1.9"));
    assert_eq!(log.findings()[0].children.len(), 2);
}
