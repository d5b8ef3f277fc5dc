//! Path helpers: resolution, project membership and display.

use rustc_hash::FxHashSet;
use std::path::{Component, Path, PathBuf};

use crate::config::HEADER_SUFFIXES;

/// Makes `path` absolute and canonical.
///
/// Existing paths are canonicalized (symlinks followed). For paths that do
/// not exist, each existing prefix is canonicalized as it is built and the
/// rest is appended lexically, so a `..` after a symlink leaves the link's
/// target rather than the link.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            Component::Normal(_) => {
                out.push(component);
                if let Ok(canonical) = std::fs::canonicalize(&out) {
                    out = canonical;
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Joins `path` onto `base` unless it is already absolute, then resolves.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        resolve(path)
    } else {
        resolve(&base.join(path))
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_user(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Longest shared leading path of every entry.
pub fn common_path(paths: &[PathBuf]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;
    let mut common: Vec<Component> = first.components().collect();
    for path in rest {
        let shared = common
            .iter()
            .zip(path.components())
            .take_while(|(a, b)| **a == *b)
            .count();
        common.truncate(shared);
    }
    if common.is_empty() {
        return None;
    }
    Some(common.iter().collect())
}

pub fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            HEADER_SUFFIXES.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

pub fn is_project_path(path: &Path, project_root: &Path) -> bool {
    path.starts_with(project_root)
}

/// `path` relative to `root` with `/` separators, or the full path when it
/// lies outside `root`.
pub fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Resolves every path and drops duplicates, keeping first-seen order.
pub fn unique_paths<I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for path in paths {
        let resolved = resolve(&path);
        if seen.insert(resolved.clone()) {
            out.push(resolved);
        }
    }
    out
}
