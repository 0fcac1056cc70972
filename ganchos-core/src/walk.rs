//! Shared project-tree walk
//!
//! The detector and the validator both need the same view of a project:
//! every file under the root, minus dependency and build directories. The
//! walk is captured once per invocation into an immutable snapshot so the
//! heuristics stay pure functions of filesystem state, and so the
//! anywhere-in-tree checks do not re-traverse the project per indicator.

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

/// Directories skipped at any depth during traversal.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    ".git",
    "build",
    "dist",
    "target",
    "__pycache__",
];

/// One traversal of a project tree.
///
/// Files are recorded as root-relative paths in breadth-first order with
/// children visited in name order, so "first match wins" heuristics are
/// deterministic across platforms. Unreadable directories are skipped
/// silently - partial data beats no data for best-effort heuristics.
#[derive(Debug, Clone)]
pub struct ProjectWalk {
    root: PathBuf,
    files: Vec<PathBuf>,
    dir_names: BTreeSet<String>,
    file_names: BTreeSet<String>,
}

impl ProjectWalk {
    /// Traverse `root` and capture the snapshot.
    pub fn capture(root: &Path) -> Self {
        let mut files = Vec::new();
        let mut dir_names = BTreeSet::new();
        let mut file_names = BTreeSet::new();

        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        queue.push_back(root.to_path_buf());

        while let Some(dir) = queue.pop_front() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => continue,
            };

            let mut children: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
            children.sort();

            for child in children {
                let name = match child.file_name().and_then(|n| n.to_str()) {
                    Some(name) => name.to_string(),
                    None => continue,
                };

                if child.is_dir() {
                    if EXCLUDED_DIRS.contains(&name.as_str()) {
                        continue;
                    }
                    dir_names.insert(name);
                    queue.push_back(child);
                } else {
                    file_names.insert(name);
                    if let Ok(relative) = child.strip_prefix(root) {
                        files.push(relative.to_path_buf());
                    }
                }
            }
        }

        Self {
            root: root.to_path_buf(),
            files,
            dir_names,
            file_names,
        }
    }

    /// Root the walk was captured from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root-relative file paths in breadth-first order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Whether a directory or file with this exact name exists anywhere in
    /// the walked tree.
    pub fn contains_name(&self, name: &str) -> bool {
        self.dir_names.contains(name) || self.file_names.contains(name)
    }

    /// Files whose extension (lowercased, dot included) is in `extensions`.
    pub fn files_with_extensions<'a>(
        &'a self,
        extensions: &'a [&'a str],
    ) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files.iter().filter(move |path| {
            file_extension(path)
                .map(|ext| extensions.contains(&ext.as_str()))
                .unwrap_or(false)
        })
    }
}

/// Lowercased extension of a path, with the leading dot (".rs").
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
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
    fn capture_skips_excluded_dirs() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/main.rs");
        touch(tmp.path(), "node_modules/pkg/index.js");
        touch(tmp.path(), "target/debug/out");

        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(walk.files(), &[PathBuf::from("src/main.rs")]);
        assert!(walk.contains_name("src"));
        assert!(!walk.contains_name("node_modules"));
    }

    #[test]
    fn capture_is_breadth_first_and_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.rs");
        touch(tmp.path(), "a.rs");
        touch(tmp.path(), "sub/deep.rs");

        let walk = ProjectWalk::capture(tmp.path());
        assert_eq!(
            walk.files(),
            &[
                PathBuf::from("a.rs"),
                PathBuf::from("b.rs"),
                PathBuf::from("sub/deep.rs"),
            ]
        );
    }

    #[test]
    fn contains_name_sees_nested_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "deploy/docker-compose.yml");

        let walk = ProjectWalk::capture(tmp.path());
        assert!(walk.contains_name("docker-compose.yml"));
        assert!(walk.contains_name("deploy"));
        assert!(!walk.contains_name("Dockerfile"));
    }

    #[test]
    fn file_extension_is_lowercased() {
        assert_eq!(
            file_extension(Path::new("Main.RS")),
            Some(".rs".to_string())
        );
        assert_eq!(file_extension(Path::new("Makefile")), None);
    }
}
