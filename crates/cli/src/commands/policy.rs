use std::path::PathBuf;

use anyhow::Result;
use varpair_core::AdmissionPolicy;

/// Emit the default admission policy, to `output` or stdout.
pub fn default_policy_command(output: Option<&PathBuf>) -> Result<()> {
    let policy = AdmissionPolicy::default();
    match output {
        Some(path) => {
            policy.save(path)?;
            println!("Wrote default admission policy to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&policy)?),
    }
    Ok(())
}
