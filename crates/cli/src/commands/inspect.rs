use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use varpair_core::{CollectedFunction, Function};

use crate::read_collected_functions;

/// Per-view counts reported by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSummary {
    pub name: String,
    pub address: Option<u64>,
    pub arguments: usize,
    pub locals: usize,
    pub locations: usize,
    pub has_user_names: bool,
}

impl FunctionSummary {
    pub fn from_function(function: &Function) -> Self {
        Self {
            name: function.name().to_string(),
            address: function.address(),
            arguments: function.arguments().variables().count(),
            locals: function.local_vars().variables().count(),
            locations: function.locations().len(),
            has_user_names: function.has_user_names(),
        }
    }
}

/// Summary of one collected function: both views plus the source size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedSummary {
    pub name: String,
    pub debug: FunctionSummary,
    pub decompiler: FunctionSummary,
    pub raw_code_bytes: usize,
}

pub fn summarize(function: &CollectedFunction) -> CollectedSummary {
    CollectedSummary {
        name: function.name().to_string(),
        debug: FunctionSummary::from_function(function.debug()),
        decompiler: FunctionSummary::from_function(function.decompiler()),
        raw_code_bytes: function.raw_code().len(),
    }
}

/// Print summaries for every collected function in `input`.
pub fn inspect_command(input: &Path, json: bool) -> Result<()> {
    let functions = read_collected_functions(input)?;
    let summaries: Vec<CollectedSummary> = functions.iter().map(summarize).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No collected functions in {}", input.display());
        return Ok(());
    }

    println!("Collected functions ({}):", summaries.len());
    for s in &summaries {
        println!("  - {}", s.name);
        println!(
            "      debug:      {} args, {} locals, {} locations, user names: {}",
            s.debug.arguments, s.debug.locals, s.debug.locations, s.debug.has_user_names
        );
        println!(
            "      decompiler: {} ({} args, {} locals, {} locations)",
            s.decompiler.name, s.decompiler.arguments, s.decompiler.locals, s.decompiler.locations
        );
        println!("      raw code:   {} bytes", s.raw_code_bytes);
    }

    Ok(())
}
