//! ganchos-hook - tool-event logging hook
//!
//! Reads a JSON context object from stdin and appends one record to the
//! project's daily event log. Invoked by the assistant runtime around tool
//! executions, so it must never block the caller: the process exits 0
//! regardless of what happened, and malformed input degrades to an empty
//! context.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/ganchos/config.toml (~/.config/ganchos/config.toml)
//! - Diagnostics: $XDG_STATE_HOME/ganchos/ganchos.log (~/.local/state/ganchos/)

use std::path::PathBuf;

use clap::Parser;
use ganchos_core::hook::{EventLogger, HookContext};
use ganchos_core::{logging, Config};

#[derive(Parser)]
#[command(name = "ganchos-hook")]
#[command(about = "Log assistant tool invocations to a daily JSONL file")]
#[command(version)]
struct Args {
    /// Project root the hook runs in (defaults to current directory)
    project_path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    Config::ensure_xdg_env();

    // Nothing in this binary is allowed to fail the caller, config included
    let config = Config::load().unwrap_or_default();
    let _log_guard = logging::init(&config.logging).ok();

    let root = args.project_path.unwrap_or_else(|| PathBuf::from("."));
    let logger = EventLogger::new(&root, &config.hooks);

    let context = HookContext::from_reader(std::io::stdin().lock());

    match logger.log_tool_run(&context) {
        Ok(record) => {
            tracing::debug!(tool = %record.tool, "hook event recorded");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to record hook event");
        }
    }
}
