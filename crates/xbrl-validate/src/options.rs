//! Engine-wide options threaded into each validation job.

/// Read-only snapshot of the host engine options a job runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Whether the host performed XInclude processing while parsing.
    pub xinclude: bool,
    /// Whether unit measures are validated against the XBRL Unit Type
    /// Registry. Switched on once per taxonomy load.
    pub utr_validation: bool,
}
