//! Zero-trust claim validation
//!
//! Produces a reproducible 0-100 confidence score for an assertion about
//! code functionality, from textual evidence alone: keyword matches in
//! code, keyword matches in test files, presence of build/CI artifacts,
//! and red flags (suspicious status phrases, TODO markers near the claimed
//! functionality).
//!
//! Evidence is combined in a fixed order - code, tests, execution, red
//! flags - because the steps interact: execution evidence sets the score
//! to 100 unconditionally, and red flags still subtract afterwards. The
//! ordering is part of the heuristic's observable behavior and is kept
//! as-is rather than "fixed".

pub mod evidence;
pub mod keywords;

pub use evidence::{Evidence, EXECUTION_INDICATORS, SUSPICIOUS_STATUS_PATTERNS};
pub use keywords::extract_keywords;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::walk::ProjectWalk;

/// Reference trust scale per evidence category.
///
/// Shown to humans alongside results; the scorer only shares the numeric
/// constants for code/test/execution evidence.
pub const CONFIDENCE_LEVELS: &[(&str, u8)] = &[
    ("README/Docs", 0),
    ("Comments", 10),
    ("Commit Messages", 20),
    ("Code Structure", 60),
    ("Passing Tests", 80),
    ("Verified Execution", 100),
];

const CODE_EVIDENCE_SCORE: i64 = 60;
const TEST_EVIDENCE_SCORE: i64 = 80;
const EXECUTION_EVIDENCE_SCORE: i64 = 100;
const RED_FLAG_PENALTY: i64 = 20;

/// Discrete verdict derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Confirmed,
    HighlyLikely,
    PartiallyConfirmed,
    WeakEvidence,
    Unsubstantiated,
}

impl Verdict {
    /// Map a score onto the fixed verdict thresholds.
    pub fn from_score(score: i64) -> Self {
        if score >= 100 {
            Verdict::Confirmed
        } else if score >= 80 {
            Verdict::HighlyLikely
        } else if score >= 60 {
            Verdict::PartiallyConfirmed
        } else if score >= 20 {
            Verdict::WeakEvidence
        } else {
            Verdict::Unsubstantiated
        }
    }

    /// Stable display form (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Confirmed => "CONFIRMED",
            Verdict::HighlyLikely => "HIGHLY_LIKELY",
            Verdict::PartiallyConfirmed => "PARTIALLY_CONFIRMED",
            Verdict::WeakEvidence => "WEAK_EVIDENCE",
            Verdict::Unsubstantiated => "UNSUBSTANTIATED",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full outcome of validating one claim.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub claim: String,
    pub claimed_status: String,
    pub confidence_score: u8,
    pub verdict: Verdict,
    /// Human-readable evidence lines in evaluation order, red flags last.
    pub evidence_details: Vec<String>,
}

/// Validates claims against one project snapshot.
///
/// The walk is captured once at construction; validating several claims
/// against the same validator reuses it.
pub struct ClaimValidator {
    walk: ProjectWalk,
    config: ValidatorConfig,
}

impl ClaimValidator {
    /// Capture a snapshot of `root` with default limits.
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, ValidatorConfig::default())
    }

    /// Capture a snapshot of `root` with explicit limits.
    pub fn with_config(root: &Path, config: ValidatorConfig) -> Self {
        Self {
            walk: ProjectWalk::capture(root),
            config,
        }
    }

    /// Root this validator was captured from.
    pub fn root(&self) -> &Path {
        self.walk.root()
    }

    /// Validate one claim and return the scored result.
    pub fn validate(
        &self,
        claim: &str,
        claimed_status: &str,
        file_evidence: Option<&Path>,
    ) -> ValidationResult {
        let keywords = extract_keywords(claim);

        let mut score: i64 = 0;
        let mut details: Vec<String> = Vec::new();

        // Step 1: code evidence
        let code = evidence::find_code_evidence(
            &self.walk,
            &keywords,
            file_evidence,
            self.config.max_code_files,
            self.config.max_evidence_lines,
        );
        if code.found {
            score = CODE_EVIDENCE_SCORE;
            details.push(format!(
                "✅ Code Evidence: {}",
                code.summary("No matching code found")
            ));
        } else {
            details.push("❌ Code Evidence: Not found or insufficient".to_string());
        }

        // Step 2: test evidence
        let tests =
            evidence::find_test_evidence(&self.walk, &keywords, self.config.max_evidence_lines);
        if tests.found {
            score = score.max(TEST_EVIDENCE_SCORE);
            details.push(format!(
                "✅ Test Evidence: {}",
                tests.summary("No relevant tests found")
            ));
        } else {
            details.push("❌ Test Evidence: No tests found".to_string());
        }

        // Step 3: execution evidence (absolute, overrides prior score)
        let execution = evidence::find_execution_evidence(self.walk.root());
        if execution.found {
            score = EXECUTION_EVIDENCE_SCORE;
            details.push(format!(
                "✅ Execution Evidence: {}",
                execution.summary("No execution indicators found")
            ));
        }

        // Step 4: red flags, applied after everything else
        let red_flags = evidence::detect_red_flags(&self.walk, &keywords, claimed_status);
        if !red_flags.is_empty() {
            score = (score - RED_FLAG_PENALTY).max(0);
            details.extend(red_flags.iter().map(|flag| format!("🚩 Red Flag: {}", flag)));
        }

        ValidationResult {
            claim: claim.to_string(),
            claimed_status: claimed_status.to_string(),
            confidence_score: score.clamp(0, 100) as u8,
            verdict: Verdict::from_score(score),
            evidence_details: details,
        }
    }
}

/// The demonstration claims run when the CLI is given none.
pub fn example_claims() -> Vec<(String, String, Option<PathBuf>)> {
    vec![
        (
            "User authentication system".to_string(),
            "implemented".to_string(),
            Some(PathBuf::from("auth.py")),
        ),
        ("API endpoints".to_string(), "working".to_string(), None),
        (
            "Database integration".to_string(),
            "complete".to_string(),
            None,
        ),
        ("Test coverage".to_string(), "80%".to_string(), None),
    ]
}
