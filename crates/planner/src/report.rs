//! Report types. Their serde layout is the `--json` output format.

use serde::Serialize;
use std::fmt;

use crate::risk::{Recommendation, RiskLevel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Header path relative to the project root.
    pub header: String,
    pub include_frequency: usize,
    pub macro_defines: usize,
    pub in_cycle: bool,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub rationale: Vec<String>,
    pub suggested_module: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
}

impl CheckStatus {
    pub fn from_ok(ok: bool) -> Self {
        if ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Warn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warn => "warn",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessCheck {
    pub title: String,
    pub status: CheckStatus,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedInclude {
    pub from: String,
    pub include: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub goal: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessPhase {
    pub goal: String,
    pub checks: Vec<ReadinessCheck>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phases {
    pub p1_header_units: Phase,
    pub p2_named_modules: Phase,
    pub p3_import_std_readiness: ReadinessPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub translation_units: usize,
    pub scanned_headers: usize,
    pub cycle_header_count: usize,
    pub unresolved_include_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerReport {
    pub input_file: String,
    pub project_root: String,
    pub summary: Summary,
    pub candidates: Vec<Candidate>,
    pub phases: Phases,
    pub readiness_checks: Vec<ReadinessCheck>,
    pub unresolved_includes: Vec<UnresolvedInclude>,
}

impl PlannerReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Looks up a candidate by its project-relative header path.
    pub fn candidate(&self, header: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.header == header)
    }

    pub fn check(&self, title: &str) -> Option<&ReadinessCheck> {
        self.readiness_checks.iter().find(|c| c.title == title)
    }
}
