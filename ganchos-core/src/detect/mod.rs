//! Heuristic stack detection
//!
//! Four independent heuristics over one filesystem walk guess a project's
//! primary language, framework, type, and architecture pattern, plus basic
//! size metrics. Everything is best-effort keyword and name matching with
//! fixed tables; ties are broken by table declaration order. Results are
//! computed fresh per invocation and never persisted.

pub mod metrics;
pub mod tables;

pub use metrics::{count_dependencies, project_metrics, ProjectMetrics};

use std::path::Path;

use serde::Serialize;

use crate::walk::{file_extension, ProjectWalk};

use tables::{
    ARCHITECTURE_PATTERNS, FOCUS_RECOMMENDATIONS, FRAMEWORK_MANIFESTS, GENERAL_RECOMMENDATIONS,
    LANGUAGE_EXTENSIONS, PROJECT_TYPES,
};

/// Everything the detector learned about a project.
///
/// Computed fresh from filesystem state at invocation time.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionContext {
    pub project_path: String,
    pub primary_language: String,
    pub framework: String,
    pub project_type: String,
    pub architecture_pattern: String,
    pub detected_stack: String,
    pub loc: u64,
    pub dependencies_count: u64,
    pub code_files: u64,
    pub total_files: u64,
}

/// Run every heuristic over one walk of `root`.
pub fn detect(root: &Path) -> DetectionContext {
    let walk = ProjectWalk::capture(root);

    let primary_language = detect_primary_language(&walk);
    let framework = detect_framework(root, &primary_language);
    let project_type = detect_project_type(root);
    let architecture_pattern = detect_architecture_pattern(root, &walk);
    let metrics = project_metrics(&walk);
    let dependencies_count = count_dependencies(root);

    let detected_stack = format!("{} + {}", primary_language, framework);

    DetectionContext {
        project_path: root.display().to_string(),
        primary_language,
        framework,
        project_type,
        architecture_pattern,
        detected_stack,
        loc: metrics.total_lines,
        dependencies_count,
        code_files: metrics.code_files,
        total_files: metrics.total_files,
    }
}

/// Language with the most files, `Unknown` when nothing matches.
pub fn detect_primary_language(walk: &ProjectWalk) -> String {
    let mut counts = vec![0u64; LANGUAGE_EXTENSIONS.len()];

    for path in walk.files() {
        let Some(ext) = file_extension(path) else {
            continue;
        };
        // First table entry claiming the extension wins
        for (index, (_, extensions)) in LANGUAGE_EXTENSIONS.iter().enumerate() {
            if extensions.contains(&ext.as_str()) {
                counts[index] += 1;
                break;
            }
        }
    }

    let mut best: Option<(usize, u64)> = None;
    for (index, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((index, count)),
        }
    }

    match best {
        Some((index, _)) => LANGUAGE_EXTENSIONS[index].0.to_string(),
        None => "Unknown".to_string(),
    }
}

/// First framework keyword found in the manifests present at the root.
///
/// Manifests are scanned in table order and their keywords in keyword
/// order; a manifest that cannot be read is skipped.
pub fn detect_framework(root: &Path, primary_language: &str) -> String {
    for (manifest, keywords) in FRAMEWORK_MANIFESTS {
        let path = root.join(manifest);
        if !path.exists() {
            continue;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content.to_lowercase(),
            Err(_) => continue,
        };
        for (keyword, framework) in *keywords {
            if content.contains(keyword) {
                return (*framework).to_string();
            }
        }
    }

    format!("{} (No specific framework detected)", primary_language)
}

/// First project type whose indicator exists directly under the root.
pub fn detect_project_type(root: &Path) -> String {
    for (project_type, indicators) in PROJECT_TYPES {
        for indicator in *indicators {
            if root.join(indicator).exists() {
                return (*project_type).to_string();
            }
        }
    }

    "General Application".to_string()
}

/// First architecture pattern whose indicators are all present.
///
/// An indicator is satisfied by a root-level entry or by a matching
/// directory/file name anywhere in the walked tree.
pub fn detect_architecture_pattern(root: &Path, walk: &ProjectWalk) -> String {
    for (pattern, indicators) in ARCHITECTURE_PATTERNS {
        let satisfied = indicators
            .iter()
            .all(|indicator| root.join(indicator).exists() || walk.contains_name(indicator));
        if satisfied {
            return (*pattern).to_string();
        }
    }

    "Layered (Default)".to_string()
}

/// Diagnostic focus suggestions for a detected language.
pub fn focus_recommendations(language: &str) -> &'static [&'static str] {
    FOCUS_RECOMMENDATIONS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, recommendations)| *recommendations)
        .unwrap_or(GENERAL_RECOMMENDATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "x").unwrap();
    }

    #[test]
    fn go_only_project_detects_go() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.go");
        touch(tmp.path(), "util.go");

        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(detect_primary_language(&walk), "Go");
    }

    #[test]
    fn empty_project_detects_unknown() {
        let tmp = TempDir::new().unwrap();
        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(detect_primary_language(&walk), "Unknown");
    }

    #[test]
    fn language_count_ties_break_by_table_order() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "app.py");
        touch(tmp.path(), "app.rb");

        // Python precedes Ruby in the table
        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(detect_primary_language(&walk), "Python");
    }

    #[test]
    fn dependency_dirs_do_not_influence_language() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.go");
        touch(tmp.path(), "node_modules/lib/index.js");
        touch(tmp.path(), "node_modules/lib/util.js");

        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(detect_primary_language(&walk), "Go");
    }

    #[test]
    fn gin_in_go_mod_detects_gin() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("go.mod"),
            "module demo\nrequire github.com/gin-gonic/gin v1.9.0\n",
        )
        .unwrap();

        assert_eq!(detect_framework(tmp.path(), "Go"), "Gin");
    }

    #[test]
    fn manifest_table_order_wins_over_later_manifests() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), r#"{"dependencies":{"react":"18"}}"#)
            .unwrap();
        std::fs::write(tmp.path().join("go.mod"), "require gin\n").unwrap();

        assert_eq!(detect_framework(tmp.path(), "Go"), "React");
    }

    #[test]
    fn keyword_order_wins_within_a_manifest() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("package.json"),
            r#"{"dependencies":{"vue":"3","react":"18"}}"#,
        )
        .unwrap();

        // react precedes vue in the keyword table
        assert_eq!(detect_framework(tmp.path(), "JavaScript"), "React");
    }

    #[test]
    fn no_manifest_reports_language_fallback() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            detect_framework(tmp.path(), "Rust"),
            "Rust (No specific framework detected)"
        );
    }

    #[test]
    fn project_type_first_indicator_wins() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("api")).unwrap();
        std::fs::create_dir(tmp.path().join("docs")).unwrap();

        assert_eq!(detect_project_type(tmp.path()), "API/Backend");
    }

    #[test]
    fn project_type_defaults_to_general() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(detect_project_type(tmp.path()), "General Application");
    }

    #[test]
    fn architecture_requires_all_indicators() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("controllers")).unwrap();
        std::fs::create_dir(tmp.path().join("models")).unwrap();

        let walk = ProjectWalk::capture(tmp.path());
        // views missing: MVC does not match
        assert_eq!(
            detect_architecture_pattern(tmp.path(), &walk),
            "Layered (Default)"
        );

        std::fs::create_dir(tmp.path().join("src")).unwrap();
        std::fs::create_dir(tmp.path().join("src/views")).unwrap();
        let walk = ProjectWalk::capture(tmp.path());
        // nested views satisfies the anywhere-in-tree check
        assert_eq!(detect_architecture_pattern(tmp.path(), &walk), "MVC");
    }

    #[test]
    fn detect_composes_stack_string() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.go");
        std::fs::write(tmp.path().join("go.mod"), "require gin\n").unwrap();

        let context = detect(tmp.path());
        assert_eq!(context.primary_language, "Go");
        assert_eq!(context.framework, "Gin");
        assert_eq!(context.detected_stack, "Go + Gin");
        assert_eq!(context.total_files, 2);
        assert_eq!(context.code_files, 1);
    }

    #[test]
    fn recommendations_fall_back_to_general() {
        assert_eq!(focus_recommendations("Go").len(), 4);
        assert_eq!(
            focus_recommendations("COBOL"),
            &["General code quality review"]
        );
    }
}
