//! Project size metrics and dependency counting.

use std::path::Path;

use crate::walk::{file_extension, ProjectWalk};

use super::tables::CODE_EXTENSIONS;

/// Basic size metrics for a project tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetrics {
    /// Non-hidden files under the root (dependency dirs excluded)
    pub total_files: u64,
    /// Files with a recognized code extension
    pub code_files: u64,
    /// Non-blank lines across code files
    pub total_lines: u64,
}

/// Compute size metrics from a captured walk.
///
/// A code file that cannot be read keeps its place in the file counts but
/// contributes no lines.
pub fn project_metrics(walk: &ProjectWalk) -> ProjectMetrics {
    let mut metrics = ProjectMetrics::default();

    for relative in walk.files() {
        let hidden = relative
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(true);
        if hidden {
            continue;
        }

        metrics.total_files += 1;

        let is_code = file_extension(relative)
            .map(|ext| CODE_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false);
        if !is_code {
            continue;
        }

        metrics.code_files += 1;
        if let Ok(bytes) = std::fs::read(walk.root().join(relative)) {
            let content = String::from_utf8_lossy(&bytes);
            metrics.total_lines += content.lines().filter(|l| !l.trim().is_empty()).count() as u64;
        }
    }

    metrics
}

/// Count declared dependencies across every manifest present at the root.
///
/// Each manifest has its own line heuristic; these are rough by design and
/// only meant to give a sense of scale.
pub fn count_dependencies(root: &Path) -> u64 {
    let mut total: u64 = 0;

    for (manifest, counter) in MANIFEST_COUNTERS {
        let path = root.join(manifest);
        if !path.exists() {
            continue;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => continue,
        };
        total += counter(&content);
    }

    total
}

type LineCounter = fn(&str) -> u64;

const MANIFEST_COUNTERS: &[(&str, LineCounter)] = &[
    ("package.json", count_quoted_pairs),
    ("requirements.txt", count_requirement_lines),
    ("mix.exs", count_deps_blocks),
    ("Gemfile", count_gem_lines),
    ("go.mod", count_require_occurrences),
    ("Cargo.toml", count_assignment_lines),
    ("composer.json", count_quoted_pairs),
];

/// JSON-like manifests: lines that carry both a quote and a colon.
fn count_quoted_pairs(content: &str) -> u64 {
    content
        .lines()
        .filter(|line| line.contains('"') && line.contains(':'))
        .count() as u64
}

fn count_requirement_lines(content: &str) -> u64 {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .count() as u64
}

fn count_deps_blocks(content: &str) -> u64 {
    content.matches("def deps").count() as u64
}

fn count_gem_lines(content: &str) -> u64 {
    content.matches("gem ").count() as u64
}

fn count_require_occurrences(content: &str) -> u64 {
    content.matches("require").count() as u64
}

fn count_assignment_lines(content: &str) -> u64 {
    content
        .lines()
        .filter(|line| line.contains('=') && !line.contains('['))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::ProjectWalk;
    use tempfile::TempDir;

    #[test]
    fn metrics_count_code_files_and_non_blank_lines() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
        std::fs::write(tmp.path().join("README.md"), "# hi\n").unwrap();
        std::fs::write(tmp.path().join(".hidden"), "skip me\n").unwrap();

        let walk = ProjectWalk::capture(tmp.path());
        let metrics = project_metrics(&walk);

        assert_eq!(metrics.total_files, 2);
        assert_eq!(metrics.code_files, 1);
        assert_eq!(metrics.total_lines, 2);
    }

    #[test]
    fn dependencies_sum_across_present_manifests() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("go.mod"),
            "module demo\n\nrequire github.com/gin-gonic/gin v1.9.0\n",
        )
        .unwrap();
        std::fs::write(tmp.path().join("Gemfile"), "gem 'rails'\ngem 'rspec'\n").unwrap();

        assert_eq!(count_dependencies(tmp.path()), 3);
    }

    #[test]
    fn cargo_manifest_counts_assignments_outside_sections() {
        let content = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n[dependencies]\nserde = \"1\"\n";
        assert_eq!(count_assignment_lines(content), 3);
    }

    #[test]
    fn requirements_skip_blanks_and_comments() {
        let content = "# pinned\nflask==2.0\n\ndjango>=4\n";
        assert_eq!(count_requirement_lines(content), 2);
    }
}
