//! Diagnostic findings and the shared error log.
//!
//! A finding is a fixed record: rule identifier, message template with
//! `{name}` substitution slots, severity, optional source location, the
//! ordered named substitution values, and nested child findings carrying
//! citation text. The log is append-only during a validation job; the host
//! renders or persists it afterwards.

use serde::{Deserialize, Serialize};

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Other,
}

/// A navigable pointer to the offending node or attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    Document { uri: String },
    Node { pointer: String },
}

impl Location {
    pub fn document(uri: impl Into<String>) -> Self {
        Location::Document { uri: uri.into() }
    }

    pub fn node(pointer: impl Into<String>) -> Self {
        Location::Node {
            pointer: pointer.into(),
        }
    }
}

/// One reportable finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule identifier, absent on nested detail findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// Message template; `{name}` slots refer to entries in `args`.
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Ordered named substitution values.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Finding>,
}

impl Finding {
    /// A top-level finding for a filing rule. Defaults to `Error` severity.
    pub fn rule(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: Some(rule_id.into()),
            message: message.into(),
            severity: Severity::Error,
            location: None,
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A nested detail finding carrying citation or explanation text.
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            rule_id: None,
            message: message.into(),
            severity: Severity::Info,
            location: None,
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Finding) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Finding>) -> Self {
        self.children.extend(children);
        self
    }

    /// The message with `{name}` slots substituted from `args`.
    pub fn rendered_message(&self) -> String {
        let mut rendered = self.message.clone();
        for (name, value) in &self.args {
            rendered = rendered.replace(&format!("{{{name}}}"), value);
        }
        rendered
    }
}

/// Ordered, append-only sink for findings.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ErrorLog {
    findings: Vec<Finding>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn clear(&mut self) {
        self.findings.clear();
    }

    /// Remove and return all findings, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Finding> {
        std::mem::take(&mut self.findings)
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_substitution_uses_named_args() {
        let finding = Finding::rule(
            "EBA.3.10",
            "Avoid multiple prefix declarations {prefix} and {prefix2} for the same namespace {namespace}.",
        )
        .with_arg("prefix", "eba")
        .with_arg("prefix2", "eba2")
        .with_arg("namespace", "urn:tax");
        assert_eq!(
            finding.rendered_message(),
            "Avoid multiple prefix declarations eba and eba2 for the same namespace urn:tax."
        );
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = ErrorLog::new();
        log.report(Finding::rule("EBA.2.14", "No segments."));
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn detail_findings_default_to_info() {
        let detail = Finding::detail("citation");
        assert_eq!(detail.severity, Severity::Info);
        assert!(detail.rule_id.is_none());
    }
}
