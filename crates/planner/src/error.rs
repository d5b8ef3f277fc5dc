use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("compile_commands file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("compile_commands.json must be a JSON array")]
    NotAnArray,
    #[error("No translation units found in compile_commands.json")]
    NoTranslationUnits,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
