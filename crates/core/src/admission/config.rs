use std::path::Path;

use anyhow::{Context, Result};

use super::AdmissionPolicy;

impl AdmissionPolicy {
    /// Load a policy from a JSON file. Missing fields take defaults; unknown
    /// fields are an error.
    pub fn load(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read admission policy at {}", path.display()))?;
        let policy: AdmissionPolicy = serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse admission policy JSON at {}", path.display())
        })?;
        Ok(policy)
    }

    /// Write the policy as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let body =
            serde_json::to_string_pretty(self).context("Failed to serialize admission policy")?;
        std::fs::write(path, body)
            .with_context(|| format!("Failed to write admission policy to {}", path.display()))?;
        Ok(())
    }
}
