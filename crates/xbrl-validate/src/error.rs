//! Rule faults.
//!
//! Domain violations are findings, never errors. The only fault a rule can
//! raise is a mismatch between the taxonomy the profile assumes and the
//! taxonomy the host actually loaded; the dispatcher isolates it so the
//! remaining rules still run.

use thiserror::Error;
use xbrl_model::QName;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("concept {0} is not defined in the loaded taxonomy")]
    UnresolvedConcept(QName),
}

/// A rule that aborted, reported back to the host.
#[derive(Debug)]
pub struct RuleFailure {
    pub rule: &'static str,
    pub error: RuleError,
}
