//! Additional filing-rule checks for validated XBRL instances.
//!
//! The host engine performs XBRL 2.1 and Dimensions validation and then
//! invokes this crate through two lifecycle hooks: [`on_taxonomy_loaded`]
//! once per taxonomy, and [`on_validation_finished`] once per instance job.
//! Every genuine domain violation becomes a [`Finding`] in the shared
//! [`ErrorLog`]; the checks never reject or halt a filing themselves.

mod dedup;
mod error;
mod options;
mod params;
mod profile;
mod report;
pub mod rules;

pub use dedup::group_by_key;
pub use error::{RuleError, RuleFailure};
pub use options::EngineOptions;
pub use params::{DEFAULT_MAX_ID_LENGTH, DEFAULT_MAX_STRING_LENGTH, RuleParams};
pub use profile::TaxonomyProfile;
pub use report::write_findings_json;
pub use rules::{RuleContext, run_filing_checks};

use xbrl_model::{ErrorLog, Finding, Instance};

/// Hook fired when the host finishes loading a taxonomy, before any instance
/// is validated under it.
///
/// Returns the options every subsequent job under this taxonomy runs with;
/// unit measures are checked against the Unit Type Registry from here on.
pub fn on_taxonomy_loaded(options: EngineOptions) -> EngineOptions {
    EngineOptions {
        utr_validation: true,
        ..options
    }
}

/// Hook fired when the host finishes validating one instance.
///
/// `instance` is `None` when structural XBRL validation failed. In that case
/// no rule is meaningful: the findings accumulated so far are re-wrapped as
/// children of a single "valid XML-XBRL" finding and the log's direct
/// contents replaced.
pub fn on_validation_finished(
    instance: Option<&Instance>,
    params: &RuleParams,
    options: &EngineOptions,
    profile: &TaxonomyProfile,
    log: &mut ErrorLog,
) -> Vec<RuleFailure> {
    match instance {
        Some(instance) => {
            let ctx = RuleContext {
                instance,
                params,
                options,
                profile,
            };
            run_filing_checks(&ctx, log)
        }
        None => {
            let mut children = vec![Finding::detail(
                "Instance documents MUST be XBRL 2.1 and XBRL Dimensions 1.0 valid.",
            )];
            children.extend(log.drain());
            log.report(Finding::rule("EBA.1.9", "Valid XML-XBRL.").with_children(children));
            Vec::new()
        }
    }
}
