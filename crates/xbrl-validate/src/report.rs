//! JSON serialization of the finding log.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use xbrl_model::ErrorLog;

/// Write the ordered findings as pretty-printed JSON.
pub fn write_findings_json(path: &Path, log: &ErrorLog) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(log).context("serialize findings")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("write findings report {}", path.display()))?;
    Ok(())
}
