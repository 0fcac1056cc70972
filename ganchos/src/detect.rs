//! ganchos-detect - heuristic stack detection
//!
//! Walks a project tree and guesses its primary language, framework,
//! project type, and architecture pattern, plus basic size metrics.
//! Output is a human-readable report by default, or JSON with --format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ganchos_core::detect::{detect, focus_recommendations, DetectionContext};
use ganchos_core::{logging, Config};

#[derive(Parser)]
#[command(name = "ganchos-detect")]
#[command(about = "Detect a project's language, framework, and architecture")]
#[command(version)]
struct Args {
    /// Project path to analyze (defaults to current directory)
    project_path: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        logging::init(&config.logging).context("failed to initialize logging")?;

    let root = args.project_path.unwrap_or_else(|| PathBuf::from("."));
    tracing::info!(path = %root.display(), "stack detection starting");

    let context = detect(&root);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&context)?);
        return Ok(());
    }

    print_report(&context);
    Ok(())
}

fn print_report(context: &DetectionContext) {
    println!("🔍 Adaptive Pre-Analysis Hook");
    println!("📁 Project Path: {}", context.project_path);
    println!("=====================================");
    println!();
    println!("📋 DETECTED PROJECT CONTEXT:");
    println!("----------------------------");
    println!("  PROJECT_PATH: {}", context.project_path);
    println!("  PRIMARY_LANGUAGE: {}", context.primary_language);
    println!("  FRAMEWORK: {}", context.framework);
    println!("  PROJECT_TYPE: {}", context.project_type);
    println!("  ARCHITECTURE_PATTERN: {}", context.architecture_pattern);
    println!("  DETECTED_STACK: {}", context.detected_stack);
    println!("  LOC: {}", context.loc);
    println!("  DEPENDENCIES_COUNT: {}", context.dependencies_count);
    println!("  CODE_FILES: {}", context.code_files);
    println!("  TOTAL_FILES: {}", context.total_files);
    println!();
    println!("✅ Context detection complete!");
    println!("📝 Use these variables to customize your diagnostic approach.");
    println!();
    println!(
        "💡 RECOMMENDED DIAGNOSTIC FOCUS FOR {}:",
        context.primary_language
    );
    println!("------------------------------------------------");
    for (index, recommendation) in focus_recommendations(&context.primary_language)
        .iter()
        .enumerate()
    {
        println!("  {}. {}", index + 1, recommendation);
    }
}
