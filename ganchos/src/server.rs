//! ganchos-server - newline-delimited JSON protocol server
//!
//! Serves the fixed tool/prompt catalog over stdin/stdout: one JSON request
//! per line in, one JSON response per line out, until end-of-input.
//! Diagnostics go to stderr and the XDG state log - stdout belongs to the
//! protocol.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use ganchos_core::server::ProtocolServer;
use ganchos_core::{logging, Config};

#[derive(Parser)]
#[command(name = "ganchos-server")]
#[command(about = "Serve the automation tool catalog over stdin/stdout")]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;

    // Startup/shutdown notices must reach the operator without touching
    // stdout, so the server variant also logs to stderr
    let _log_guard = logging::init_with_stderr(&config.logging)
        .context("failed to initialize logging")?;

    let server = ProtocolServer::new();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    server.run(stdin, stdout).context("server loop failed")?;

    Ok(())
}
