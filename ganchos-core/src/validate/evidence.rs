//! Evidence gathering for claim validation.
//!
//! Each gatherer is best-effort: a file that cannot be read is skipped and
//! the search moves on. Nothing here fails the validation as a whole.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::walk::{file_extension, ProjectWalk};

/// Extensions searched for code and red-flag evidence.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".ex", ".exs", ".rb", ".go", ".rs", ".java", ".php",
];

/// Build/CI/container artifacts treated as execution evidence.
pub const EXECUTION_INDICATORS: &[&str] = &[
    "package.json",
    "Makefile",
    "scripts/",
    ".github/workflows/",
    ".gitlab-ci.yml",
    "docker-compose.yml",
    "Dockerfile",
];

/// Status phrases that flag a claim as suspicious, with their descriptions.
pub const SUSPICIOUS_STATUS_PATTERNS: &[(&str, &str)] = &[
    (
        "fully implemented",
        "Claim of \"fully implemented\" without evidence",
    ),
    ("working", "Vague \"working\" status"),
    ("complete", "Claim of \"complete\" without verification"),
    ("100%", "Round percentage without backing data"),
    ("done", "Simple \"done\" status"),
];

/// Markers that flag unfinished work near a keyword match.
pub const TODO_MARKERS: &[&str] = &["TODO", "FIXME", "HACK", "XXX"];

/// Conventional test-file name patterns (matched lowercased).
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "test_*.py",
    "*_test.py",
    "*.test.js",
    "*.test.ts",
    "*.spec.js",
    "*.spec.ts",
    "*_test.ex",
    "*_test.exs",
    "*_spec.rb",
    "*_test.go",
    "*_test.rs",
];

/// Lines of TODO-marker context inspected around a keyword match.
const RED_FLAG_WINDOW: usize = 2;

/// Outcome of one evidence search.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    pub found: bool,
    pub details: Vec<String>,
}

impl Evidence {
    /// Human-readable detail line, or the given fallback when empty.
    pub fn summary(&self, fallback: &str) -> String {
        if self.details.is_empty() {
            fallback.to_string()
        } else {
            self.details.join(", ")
        }
    }
}

fn read_lossy(path: &Path) -> Option<String> {
    std::fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Search candidate code files line-by-line for any keyword.
///
/// When `file_evidence` is given it is the only candidate; otherwise the
/// walk's code files are searched in breadth-first order, capped at
/// `max_files`. Matches are recorded as `path:line`, capped at
/// `max_details`.
pub fn find_code_evidence(
    walk: &ProjectWalk,
    keywords: &[String],
    file_evidence: Option<&Path>,
    max_files: usize,
    max_details: usize,
) -> Evidence {
    let candidates: Vec<PathBuf> = match file_evidence {
        Some(path) => {
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                walk.root().join(path)
            };
            vec![absolute]
        }
        None => walk
            .files_with_extensions(CODE_EXTENSIONS)
            .map(|relative| walk.root().join(relative))
            .collect(),
    };

    let mut evidence = Evidence::default();

    for path in candidates.iter().take(max_files) {
        let Some(content) = read_lossy(path) else {
            continue;
        };

        for (index, line) in content.lines().enumerate() {
            let line = line.to_lowercase();
            if keywords.iter().any(|keyword| line.contains(keyword)) {
                evidence.found = true;
                evidence.details.push(format!(
                    "{}:{}",
                    display_relative(path, walk.root()),
                    index + 1
                ));
                if evidence.details.len() >= max_details {
                    break;
                }
            }
        }

        if evidence.details.len() >= max_details {
            break;
        }
    }

    evidence
}

/// Whether a file name looks like a test file.
pub fn is_test_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    if lowered.contains("test") || lowered.contains("spec") {
        return true;
    }
    TEST_FILE_PATTERNS.iter().any(|pattern| {
        Pattern::new(pattern)
            .map(|p| p.matches(&lowered))
            .unwrap_or(false)
    })
}

/// Search test files for any keyword in their full content.
pub fn find_test_evidence(walk: &ProjectWalk, keywords: &[String], max_details: usize) -> Evidence {
    let mut evidence = Evidence::default();

    for relative in walk.files() {
        let name = match relative.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if !is_test_file(name) {
            continue;
        }

        let Some(content) = read_lossy(&walk.root().join(relative)) else {
            continue;
        };
        let content = content.to_lowercase();

        if keywords.iter().any(|keyword| content.contains(keyword)) {
            evidence.found = true;
            evidence.details.push(relative.display().to_string());
            if evidence.details.len() >= max_details {
                break;
            }
        }
    }

    evidence
}

/// Check for build/CI/container indicators under the project root.
pub fn find_execution_evidence(root: &Path) -> Evidence {
    let mut evidence = Evidence::default();

    for indicator in EXECUTION_INDICATORS {
        if root.join(indicator).exists() {
            evidence.found = true;
            evidence.details.push((*indicator).to_string());
        }
    }

    evidence
}

/// Detect red flags: suspicious status phrases and TODO markers near
/// keyword matches.
pub fn detect_red_flags(walk: &ProjectWalk, keywords: &[String], claimed_status: &str) -> Vec<String> {
    let mut flags = Vec::new();

    let status = claimed_status.to_lowercase();
    for (pattern, description) in SUSPICIOUS_STATUS_PATTERNS {
        if status.contains(pattern) {
            flags.push((*description).to_string());
        }
    }

    if has_todo_near_keyword(walk, keywords) {
        flags.push("TODO/FIXME found near claimed functionality".to_string());
    }

    flags
}

fn has_todo_near_keyword(walk: &ProjectWalk, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }

    for relative in walk.files() {
        let is_code = file_extension(relative)
            .map(|ext| CODE_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false);
        if !is_code {
            continue;
        }

        let Some(content) = read_lossy(&walk.root().join(relative)) else {
            continue;
        };
        let lines: Vec<&str> = content.lines().collect();

        for (index, line) in lines.iter().enumerate() {
            let lowered = line.to_lowercase();
            if !keywords.iter().any(|keyword| lowered.contains(keyword)) {
                continue;
            }

            let start = index.saturating_sub(RED_FLAG_WINDOW);
            let end = (index + RED_FLAG_WINDOW).min(lines.len() - 1);
            for nearby in &lines[start..=end] {
                let upper = nearby.to_uppercase();
                if TODO_MARKERS.iter().any(|marker| upper.contains(marker)) {
                    return true;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn code_evidence_records_path_and_line() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/auth.rs", "fn main() {}\nfn check_login() {}\n");

        let walk = ProjectWalk::capture(tmp.path());
        let evidence = find_code_evidence(&walk, &keywords(&["login"]), None, 20, 3);

        assert!(evidence.found);
        assert_eq!(evidence.details, vec!["src/auth.rs:2"]);
    }

    #[test]
    fn code_evidence_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "app.py", "class LoginHandler:\n    pass\n");

        let walk = ProjectWalk::capture(tmp.path());
        let evidence = find_code_evidence(&walk, &keywords(&["login"]), None, 20, 3);
        assert!(evidence.found);
    }

    #[test]
    fn code_evidence_respects_detail_cap() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.py", "login\nlogin\nlogin\nlogin\n");

        let walk = ProjectWalk::capture(tmp.path());
        let evidence = find_code_evidence(&walk, &keywords(&["login"]), None, 20, 3);
        assert_eq!(evidence.details.len(), 3);
    }

    #[test]
    fn file_evidence_is_searched_first_and_alone() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "auth.py", "def login(): pass\n");
        write(tmp.path(), "other.py", "def login(): pass\n");

        let walk = ProjectWalk::capture(tmp.path());
        let evidence = find_code_evidence(
            &walk,
            &keywords(&["login"]),
            Some(Path::new("auth.py")),
            20,
            3,
        );
        assert_eq!(evidence.details, vec!["auth.py:1"]);
    }

    #[test]
    fn test_file_names_are_recognized() {
        assert!(is_test_file("test_auth.py"));
        assert!(is_test_file("handler.spec.ts"));
        assert!(is_test_file("integration_test.go"));
        assert!(is_test_file("MySpecHelper.rb"));
        assert!(!is_test_file("main.rs"));
    }

    #[test]
    fn test_evidence_matches_full_content() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "tests/auth_test.go", "func TestLogin(t *testing.T) {}\n");

        let walk = ProjectWalk::capture(tmp.path());
        let evidence = find_test_evidence(&walk, &keywords(&["login"]), 3);
        assert!(evidence.found);
        assert_eq!(evidence.details, vec!["tests/auth_test.go"]);
    }

    #[test]
    fn execution_evidence_lists_indicators() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Dockerfile", "FROM scratch\n");
        write(tmp.path(), "Makefile", "all:\n");

        let evidence = find_execution_evidence(tmp.path());
        assert!(evidence.found);
        assert_eq!(evidence.details, vec!["Makefile", "Dockerfile"]);
    }

    #[test]
    fn suspicious_status_raises_flags() {
        let tmp = TempDir::new().unwrap();
        let walk = ProjectWalk::capture(tmp.path());

        let flags = detect_red_flags(&walk, &[], "fully implemented and done");
        assert_eq!(flags.len(), 2);
        assert!(flags[0].contains("fully implemented"));
    }

    #[test]
    fn todo_near_keyword_raises_flag() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "auth.py",
            "def login():\n    # TODO: handle expired tokens\n    pass\n",
        );

        let walk = ProjectWalk::capture(tmp.path());
        let flags = detect_red_flags(&walk, &keywords(&["login"]), "implemented");
        assert_eq!(flags, vec!["TODO/FIXME found near claimed functionality"]);
    }

    #[test]
    fn todo_far_from_keyword_does_not_flag() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "auth.py",
            "def login():\n    pass\n\n\n\n\n# TODO: unrelated cleanup\n",
        );

        let walk = ProjectWalk::capture(tmp.path());
        let flags = detect_red_flags(&walk, &keywords(&["login"]), "implemented");
        assert!(flags.is_empty());
    }
}
