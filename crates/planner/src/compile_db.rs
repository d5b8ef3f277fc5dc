//! Loading translation units from a `compile_commands.json` database.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{PlannerError, Result};
use crate::paths::{resolve, resolve_against, unique_paths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub path: PathBuf,
    pub include_dirs: Vec<PathBuf>,
    /// Lowercased value of `-std=` / `/std:`, or `"unknown"`.
    pub std_flag: String,
}

/// Reads the database and keeps only object entries.
pub fn load(path: &Path) -> Result<Vec<serde_json::Map<String, Value>>> {
    if !path.exists() {
        return Err(PlannerError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    let payload: Value = serde_json::from_str(&text)?;

    match payload {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect()),
        _ => Err(PlannerError::NotAnArray),
    }
}

/// Builds translation units from database entries.
///
/// `db_path` must already be resolved; relative `directory` values are taken
/// against its parent.
pub fn collect_translation_units(
    entries: &[serde_json::Map<String, Value>],
    db_path: &Path,
) -> Vec<TranslationUnit> {
    let db_dir = db_path.parent().unwrap_or(Path::new("/"));
    let mut tus = Vec::new();

    for entry in entries {
        let file = match entry.get("file").and_then(Value::as_str) {
            Some(f) if !f.is_empty() => f,
            _ => continue,
        };

        let directory = match entry.get("directory").and_then(Value::as_str) {
            Some(d) if !d.is_empty() => resolve_against(db_dir, Path::new(d)),
            _ => resolve(db_dir),
        };

        let path = resolve_against(&directory, Path::new(file));
        let args = extract_args(entry);

        tus.push(TranslationUnit {
            path,
            include_dirs: extract_include_dirs(&args, &directory),
            std_flag: extract_std_flag(&args),
        });
    }

    tus
}

/// Compiler arguments of an entry: `arguments` if present, else a shell split
/// of `command`.
pub fn extract_args(entry: &serde_json::Map<String, Value>) -> Vec<String> {
    if let Some(Value::Array(args)) = entry.get("arguments") {
        return args
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
    }

    if let Some(Value::String(command)) = entry.get("command") {
        return split_command(command)
            .unwrap_or_else(|| command.split_whitespace().map(str::to_owned).collect());
    }

    Vec::new()
}

/// Characters that separate words outside quotes.
const SHELL_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// POSIX shell word splitting. Returns `None` on an unterminated quote or a
/// trailing escape.
///
/// Inside double quotes a backslash only escapes `"` and `\`; elsewhere it
/// is kept literally.
pub fn split_command(command: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next()? {
                        '\'' => break,
                        ch => current.push(ch),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next()? {
                        '"' => break,
                        '\\' => {
                            let escaped = chars.next()?;
                            if !matches!(escaped, '\\' | '"') {
                                current.push('\\');
                            }
                            current.push(escaped);
                        }
                        ch => current.push(ch),
                    }
                }
            }
            '\\' => {
                in_word = true;
                current.push(chars.next()?);
            }
            c if SHELL_WHITESPACE.contains(&c) => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Some(words)
}

/// Include directories from `-I`, `/I` and `-isystem`, joined or separate.
pub fn extract_include_dirs(args: &[String], directory: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut idx = 0;

    while idx < args.len() {
        let token = args[idx].as_str();
        let mut value: Option<&str> = None;

        if matches!(token, "-I" | "/I" | "-isystem") {
            if idx + 1 < args.len() {
                value = Some(args[idx + 1].as_str());
                idx += 1;
            }
        } else if let Some(rest) = token.strip_prefix("-isystem") {
            value = Some(rest);
        } else if let Some(rest) = token.strip_prefix("-I").or_else(|| token.strip_prefix("/I")) {
            value = Some(rest);
        }

        if let Some(v) = value.filter(|v| !v.is_empty()) {
            dirs.push(resolve_against(directory, Path::new(v)));
        }
        idx += 1;
    }

    unique_paths(dirs)
}

pub fn extract_std_flag(args: &[String]) -> String {
    for token in args {
        if let Some(v) = token.strip_prefix("-std=").or_else(|| token.strip_prefix("/std:")) {
            return v.to_lowercase();
        }
    }
    "unknown".to_string()
}

/// Whether a std flag selects C++20 or a later standard.
pub fn is_cxx20_or_newer(std_flag: &str) -> bool {
    let value = std_flag.to_lowercase();
    if value == "unknown" {
        return false;
    }
    if ["++2a", "++2b", "++2c", "++latest"]
        .iter()
        .any(|draft| value.contains(draft))
    {
        return true;
    }

    let Some(pos) = value.find("++") else {
        return false;
    };
    let digits: String = value[pos + 2..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().map(|n| n >= 20).unwrap_or(false)
}
