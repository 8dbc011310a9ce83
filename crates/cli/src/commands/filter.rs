use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use varpair_core::Rejection;

use crate::{read_collected_functions, resolve_policy, write_collected_functions};

/// One rejected function in the filter report.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedEntry {
    pub name: String,
    pub rejection: Rejection,
}

/// Machine-readable outcome of `filter`.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub total: usize,
    pub admitted: usize,
    pub rejected: Vec<RejectedEntry>,
    /// Rejection counts keyed by `Rejection::kind`.
    pub by_reason: BTreeMap<String, usize>,
}

/// Apply the admission policy to `input`.
///
/// Admitted functions go to `output` when given, otherwise to stdout as JSON.
/// The report goes to stdout with `--json` (only when `output` is set, so
/// the two never interleave), else to stderr.
pub fn filter_command(
    input: &Path,
    policy_path: Option<&PathBuf>,
    output: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let policy = resolve_policy(policy_path)?;
    let functions = read_collected_functions(input)?;
    let total = functions.len();
    let admission = policy.partition(functions);

    let mut by_reason: BTreeMap<String, usize> = BTreeMap::new();
    for (_, rejection) in &admission.rejected {
        *by_reason.entry(rejection.kind().to_string()).or_default() += 1;
    }
    let report = FilterReport {
        total,
        admitted: admission.admitted.len(),
        rejected: admission
            .rejected
            .iter()
            .map(|(f, r)| RejectedEntry { name: f.name().to_string(), rejection: r.clone() })
            .collect(),
        by_reason,
    };

    match output {
        Some(path) => write_collected_functions(path, &admission.admitted)?,
        None => {
            let body = serde_json::to_string_pretty(&admission.admitted)
                .context("Failed to serialize admitted functions")?;
            println!("{body}");
        }
    }

    if json && output.is_some() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("Admitted {} of {} functions", report.admitted, report.total);
        for (reason, count) in &report.by_reason {
            eprintln!("  {reason}: {count}");
        }
    }

    Ok(())
}
