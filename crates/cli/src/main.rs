use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use varpair::commands::{default_policy_command, filter_command, inspect_command};
use varpair::init_tracing;

/// Inspect and filter collected debug/decompiler function pairs.
///
/// This CLI is a thin wrapper around `varpair-core` (exposed in code as
/// `varpair_core`). All substantive logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "varpair",
    version,
    about = "Inspect and filter collected debug/decompiler function pairs",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print library version information.
    Version,

    /// Summarize each collected function in a JSON file.
    Inspect {
        /// JSON array of collected functions.
        #[arg(long)]
        input: PathBuf,

        /// Emit summaries as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Keep only the collected functions that pass the admission policy.
    Filter {
        /// JSON array of collected functions.
        #[arg(long)]
        input: PathBuf,

        /// Admission policy JSON. Defaults apply when omitted.
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Write admitted functions here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the filter report as JSON (requires --output).
        #[arg(long, requires = "output")]
        json: bool,
    },

    /// Print or write the default admission policy.
    DefaultPolicy {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Version) {
        Command::Version => version_command(),
        Command::Inspect { input, json } => inspect_command(&input, json)?,
        Command::Filter { input, policy, output, json } => {
            filter_command(&input, policy.as_ref(), output.as_ref(), json)?
        }
        Command::DefaultPolicy { output } => default_policy_command(output.as_ref())?,
    }

    Ok(())
}

fn version_command() {
    println!("varpair v{}", env!("CARGO_PKG_VERSION"));
    println!("varpair-core v{}", varpair_core::version());
}
