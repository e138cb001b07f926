use crate::error::LoadError;
use camino::Utf8Path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};
use wfguard_types::RepoPath;

/// Discover workflow files under `repo_root/workflows_dir`.
///
/// Behavior:
/// - Recursive walk, lexical by file name at each level (stable across filesystems).
/// - Regular files (or symlinks to regular files) with extension `yml` or `yaml` match.
/// - Directories are traversed but never returned, even when named `*.yml`.
/// - `exclude` globs are matched against the path relative to `workflows_dir`.
///
/// Returned paths are relative to `repo_root`.
pub fn discover_workflow_files(
    repo_root: &Utf8Path,
    workflows_dir: &Utf8Path,
    exclude: &[String],
) -> Result<Vec<RepoPath>, LoadError> {
    let exclude_set = build_globset(exclude)?;
    let base = repo_root.join(workflows_dir);

    let mut out = Vec::new();
    for entry in WalkDir::new(&base).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: source
                .path()
                .and_then(Utf8Path::from_path)
                .map(Utf8Path::to_path_buf)
                .unwrap_or_else(|| base.clone()),
            source,
        })?;

        if !is_regular_file(&entry) || !is_workflow_file(entry.path()) {
            trace!(path = %entry.path().display(), "skipping non-workflow entry");
            continue;
        }

        let abs = Utf8Path::from_path(entry.path())
            .ok_or_else(|| LoadError::NonUtf8Path(entry.path().to_path_buf()))?;

        let in_dir = abs
            .strip_prefix(&base)
            .unwrap_or(abs)
            .as_str()
            .replace('\\', "/");
        if exclude_set.is_match(&in_dir) {
            debug!(path = %abs, "excluded by glob");
            continue;
        }

        out.push(RepoPath::from(abs.strip_prefix(repo_root).unwrap_or(abs)));
    }

    Ok(out)
}

/// `true` when the file name ends in `.yml` or `.yaml` (case-sensitive).
///
/// A file named just `.yml` matches too.
pub fn is_workflow_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(".yml") || name.ends_with(".yaml"))
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let invalid = |pattern: &str, source| LoadError::InvalidExclude {
        pattern: pattern.to_string(),
        source,
    };

    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).map_err(|e| invalid(p, e))?);
    }
    b.build().map_err(|e| invalid(patterns.join(", ").as_str(), e))
}
