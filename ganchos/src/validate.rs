//! ganchos-validate - zero-trust claim validation
//!
//! Scores a claim about code functionality against the textual evidence in
//! a project tree. With no claim given, runs the built-in demonstration
//! claims so the protocol banner and summary can be seen end to end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ganchos_core::validate::{
    example_claims, ClaimValidator, ValidationResult, CONFIDENCE_LEVELS,
};
use ganchos_core::{logging, Config};

#[derive(Parser)]
#[command(name = "ganchos-validate")]
#[command(about = "Validate claims about code against textual evidence")]
#[command(version)]
struct Args {
    /// Project path to validate against (defaults to current directory)
    project_path: Option<PathBuf>,

    /// The claim to validate (e.g. "user authentication system")
    #[arg(short, long, requires = "status")]
    claim: Option<String>,

    /// The status being claimed (e.g. "implemented", "working")
    #[arg(short, long)]
    status: Option<String>,

    /// File where the evidence is expected to be found, searched first
    #[arg(short, long)]
    evidence: Option<PathBuf>,

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
    tracing::info!(path = %root.display(), "claim validation starting");

    let validator = ClaimValidator::with_config(&root, config.validator.clone());

    let claims: Vec<(String, String, Option<PathBuf>)> = match (args.claim, args.status) {
        (Some(claim), Some(status)) => vec![(claim, status, args.evidence)],
        _ => example_claims(),
    };

    let results: Vec<ValidationResult> = claims
        .iter()
        .map(|(claim, status, evidence)| {
            validator.validate(claim, status, evidence.as_deref())
        })
        .collect();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_banner(&root);
    for result in &results {
        print_result(result);
    }
    print_summary(&results);

    Ok(())
}

fn print_banner(root: &std::path::Path) {
    println!("🛡️  UNIVERSAL VALIDATION PROTOCOL");
    println!("================================");
    println!("📁 Project: {}", root.display());
    println!("⚡ Zero-trust validation active");
    println!();
    println!("📋 VALIDATION PROTOCOL ACTIVE:");
    for (category, trust) in CONFIDENCE_LEVELS {
        println!("  {}: {}% trust", category, trust);
    }
    println!();
}

fn print_result(result: &ValidationResult) {
    println!("🔍 VALIDATING CLAIM: {}", result.claim);
    println!("📝 Claimed Status: {}", result.claimed_status);
    println!("{}", "=".repeat(50));
    println!("📊 EVIDENCE ANALYSIS:");
    for detail in &result.evidence_details {
        println!("  {}", detail);
    }
    println!();
    println!("🎯 CONFIDENCE SCORE: {}%", result.confidence_score);
    println!("⚖️  VERDICT: {}", result.verdict);
    println!();
}

fn print_summary(results: &[ValidationResult]) {
    println!("{}", "=".repeat(60));
    println!("📊 VALIDATION SUMMARY:");
    println!("{}", "=".repeat(60));
    for result in results {
        println!(
            "🔍 {}: {} ({}%)",
            result.claim, result.verdict, result.confidence_score
        );
    }
    println!();
    println!("✅ Validation protocol completed!");
    println!("💡 Use CONFIRMED/HIGHLY_LIKELY findings with confidence");
    println!("⚠️  Investigate WEAK_EVIDENCE/UNSUBSTANTIATED claims");
}
