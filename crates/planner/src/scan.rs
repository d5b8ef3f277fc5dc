//! Preprocessor directive scanning and include resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::paths::{is_header, resolve};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// `#include <name>`
    Angle,
    /// `#include "name"`
    Quote,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncludeDirective {
    pub kind: IncludeKind,
    pub name: String,
}

impl IncludeDirective {
    /// Spelling as written, e.g. `<vector>` or `"core/math.hpp"`.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IncludeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IncludeKind::Angle => write!(f, "<{}>", self.name),
            IncludeKind::Quote => write!(f, "\"{}\"", self.name),
        }
    }
}

/// Strips `#` and the directive keyword, tolerating whitespace around `#`.
fn directive_body<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix('#')?;
    rest.trim_start().strip_prefix(keyword)
}

/// Parses one line as an `#include` directive.
pub fn parse_include_line(line: &str) -> Option<IncludeDirective> {
    let rest = directive_body(line, "include")?.trim_start();
    let mut chars = rest.chars();
    let kind = match chars.next()? {
        '<' => IncludeKind::Angle,
        '"' => IncludeKind::Quote,
        _ => return None,
    };
    let body = chars.as_str();
    let end = body.find(['"', '>'])?;
    if end == 0 {
        return None;
    }
    Some(IncludeDirective {
        kind,
        name: body[..end].trim().to_string(),
    })
}

/// Whether a line is a `#define` directive.
pub fn is_define_line(line: &str) -> bool {
    match directive_body(line, "define") {
        Some(rest) => !rest
            .chars()
            .next()
            .map(|c| c.is_alphanumeric() || c == '_')
            .unwrap_or(false),
        None => false,
    }
}

fn read_lossy(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// All include directives in a file. Missing or unreadable files yield none.
pub fn parse_includes(path: &Path) -> Vec<IncludeDirective> {
    if !path.exists() {
        return Vec::new();
    }
    match read_lossy(path) {
        Some(text) => text.lines().filter_map(parse_include_line).collect(),
        None => Vec::new(),
    }
}

/// Number of `#define` lines in a header. Non-headers count zero.
pub fn count_defines(path: &Path) -> usize {
    if !path.exists() || !is_header(path) {
        return 0;
    }
    match read_lossy(path) {
        Some(text) => text.lines().filter(|line| is_define_line(line)).count(),
        None => 0,
    }
}

/// Finds the file an include refers to.
///
/// Quote includes look next to the including file first, then every include
/// directory is tried in order.
pub fn resolve_include(
    directive: &IncludeDirective,
    including_file: &Path,
    include_dirs: &[PathBuf],
) -> Option<PathBuf> {
    let include_path = Path::new(&directive.name);
    if include_path.is_absolute() && include_path.exists() {
        return Some(resolve(include_path));
    }

    let local = match (directive.kind, including_file.parent()) {
        (IncludeKind::Quote, Some(parent)) => Some(parent.join(include_path)),
        _ => None,
    };

    local
        .into_iter()
        .chain(include_dirs.iter().map(|dir| dir.join(include_path)))
        .find(|candidate| candidate.exists())
        .map(|candidate| resolve(&candidate))
}
