//! Filing-rule predicates, organized by specification section.
//!
//! Each predicate inspects one aspect of the validated instance and returns
//! the findings it produced. Predicates are independent and order-insensitive
//! with respect to each other; the dispatcher only fixes their position in
//! the output log.

pub mod context;
pub mod fact;
pub mod filing;
pub mod guidance;
pub mod instance;
pub mod unit;

use tracing::{debug, error};

use xbrl_model::{Context, ErrorLog, Fact, Finding, Instance, Location, Unit};

use crate::error::{RuleError, RuleFailure};
use crate::options::EngineOptions;
use crate::params::RuleParams;
use crate::profile::TaxonomyProfile;

/// Everything a rule predicate may consult.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub instance: &'a Instance,
    pub params: &'a RuleParams,
    pub options: &'a EngineOptions,
    pub profile: &'a TaxonomyProfile,
}

pub(crate) fn context_location(context: &Context) -> Location {
    Location::node(format!("context[{}]", context.id))
}

pub(crate) fn unit_location(unit: &Unit) -> Location {
    Location::node(format!("unit[{}]", unit.id))
}

pub(crate) fn fact_location(fact: &Fact) -> Location {
    Location::node(fact_pointer(fact))
}

pub(crate) fn fact_pointer(fact: &Fact) -> String {
    format!("fact[{}][context={}]", fact.concept.local, fact.context_ref)
}

/// Run the full rule sequence in specification order.
///
/// One aborted rule does not stop the remaining ones; aborts are returned
/// for the host to surface.
pub fn run_filing_checks(ctx: &RuleContext<'_>, log: &mut ErrorLog) -> Vec<RuleFailure> {
    debug!(
        contexts = ctx.instance.contexts.len(),
        units = ctx.instance.units.len(),
        facts = ctx.instance.facts.len(),
        "running filing rule checks"
    );
    let mut failures = Vec::new();

    // Filing syntax rules. 1.1 (filing naming), 1.5 (entry point selection)
    // and 1.11 (reporter extensions) are authority-specific; 1.7 and 1.12
    // cannot be checked automatically.
    report_all(log, filing::character_encoding(ctx));
    report_all(log, filing::filing_indicators(ctx));
    report_all(log, filing::standalone_declaration(ctx));
    report_all(log, filing::schema_location_attributes(ctx));
    report_all(log, filing::xinclude(ctx));

    // Instance syntax rules. 2.5 (comments) cannot be checked automatically.
    report_all(log, instance::xml_base(ctx));
    report_all(log, instance::schema_ref_absolute_url(ctx));
    report_all(log, instance::single_schema_ref(ctx));
    report_all(log, instance::no_linkbase_refs(ctx));
    report_all(log, instance::no_footnotes(ctx));

    // Context related rules. 2.8 (identification of the reporting entity)
    // cannot be checked automatically.
    report_all(log, context::id_length(ctx));
    report_all(log, context::unused_or_duplicated(ctx));
    report_all(log, context::single_reporter(ctx));
    report_all(log, context::valid_period_dates(ctx));
    report_all(log, context::no_forever(ctx));
    report_all(log, context::period_consistency(ctx));
    report_all(log, context::no_segments(ctx));
    report_all(log, context::scenario_content(ctx));

    // Fact related rules. 2.18 (@decimals interpretation) and 2.20
    // (xml:lang usage) cannot be checked automatically.
    report_all(log, fact::duplicate_facts(ctx));
    report_all(log, fact::no_precision(ctx));
    report_all(log, fact::no_nil_facts(ctx));

    // Unit related rules. 2.23 (UTR) and 2.24 (physical monetary value) are
    // already covered by the host's XBRL validation.
    report_all(log, unit::duplicate_units(ctx));
    report_all(log, unit::unused_units(ctx));
    guard("EBA.3.1", unit::monetary_currency(ctx), log, &mut failures);
    report_all(log, unit::non_monetary_numeric_units(ctx));

    // Additional guidance.
    report_all(log, guidance::unused_prefixes(ctx));
    report_all(log, guidance::canonical_prefixes(ctx));
    report_all(log, guidance::entity_scheme(ctx));
    report_all(log, guidance::unused_fact_ids(ctx));
    report_all(log, fact::string_length(ctx));
    report_all(log, guidance::prefixes_on_root_only(ctx));
    report_all(log, guidance::single_prefix_per_namespace(ctx));

    failures
}

fn report_all(log: &mut ErrorLog, findings: Vec<Finding>) {
    for finding in findings {
        log.report(finding);
    }
}

fn guard(
    rule: &'static str,
    outcome: Result<Vec<Finding>, RuleError>,
    log: &mut ErrorLog,
    failures: &mut Vec<RuleFailure>,
) {
    match outcome {
        Ok(findings) => report_all(log, findings),
        Err(rule_error) => {
            error!(rule, error = %rule_error, "rule aborted, continuing with remaining rules");
            failures.push(RuleFailure {
                rule,
                error: rule_error,
            });
        }
    }
}
