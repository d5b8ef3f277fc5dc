//! Migration risk scoring for project headers.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::{
    BASE_RISK, CYCLE_PENALTY, DOT_H_PENALTY, HIGH_REUSE_BONUS, HIGH_REUSE_FREQUENCY,
    LOW_REUSE_PENALTY, LOW_RISK_MAX, MACRO_HEAVY_THRESHOLD, MACRO_PENALTY_PER_DEFINE,
    MAX_MACRO_PENALTY, MAX_RISK, MEDIUM_RISK_MAX,
};
use crate::paths::relative_display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score <= LOW_RISK_MAX {
            RiskLevel::Low
        } else if score <= MEDIUM_RISK_MAX {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "refactor include cycle before module migration")]
    RefactorCycle,
    #[serde(rename = "P1 header unit candidate")]
    HeaderUnit,
    #[serde(rename = "P2 named module pilot")]
    NamedModulePilot,
    #[serde(rename = "defer until macro usage is reduced")]
    Defer,
}

impl Recommendation {
    pub fn new(risk_score: u32, in_cycle: bool) -> Self {
        if in_cycle {
            Recommendation::RefactorCycle
        } else if risk_score <= LOW_RISK_MAX {
            Recommendation::HeaderUnit
        } else if risk_score <= MEDIUM_RISK_MAX {
            Recommendation::NamedModulePilot
        } else {
            Recommendation::Defer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::RefactorCycle => "refactor include cycle before module migration",
            Recommendation::HeaderUnit => "P1 header unit candidate",
            Recommendation::NamedModulePilot => "P2 named module pilot",
            Recommendation::Defer => "defer until macro usage is reduced",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores one header on a 0..=100 scale and explains each contribution.
pub fn risk_score(
    header: &Path,
    include_frequency: usize,
    macro_count: usize,
    in_cycle: bool,
) -> (u32, Vec<String>) {
    let mut risk = BASE_RISK;
    let mut rationale = vec![format!(
        "included {} time(s) across scanned files",
        include_frequency
    )];

    if macro_count > 0 {
        let penalty = (macro_count as u32)
            .saturating_mul(MACRO_PENALTY_PER_DEFINE)
            .min(MAX_MACRO_PENALTY);
        risk += penalty;
        if macro_count >= MACRO_HEAVY_THRESHOLD {
            rationale.push(format!("macro-heavy: {} #define directives", macro_count));
        } else {
            rationale.push(format!("contains {} #define directives", macro_count));
        }
    } else {
        rationale.push("no #define directives found".to_string());
    }

    if in_cycle {
        risk += CYCLE_PENALTY;
        rationale.push("participates in an include cycle".to_string());
    }

    let is_dot_h = header
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("h"))
        .unwrap_or(false);
    if is_dot_h {
        risk += DOT_H_PENALTY;
        rationale.push(".h extension may indicate C/C++ mixed usage".to_string());
    }

    if include_frequency <= 1 {
        risk += LOW_REUSE_PENALTY;
        rationale.push("low reuse means lower migration payoff".to_string());
    } else if include_frequency >= HIGH_REUSE_FREQUENCY {
        risk = risk.saturating_sub(HIGH_REUSE_BONUS);
        rationale.push("high reuse improves migration payoff".to_string());
    }

    (risk.min(MAX_RISK), rationale)
}

/// Dotted module name derived from a header's project-relative path.
pub fn suggest_module_name(path: &Path, project_root: &Path) -> String {
    let rel = relative_display(path, project_root);
    let rel = rel.strip_prefix("include/").unwrap_or(&rel);

    // Drop the suffix of the final component only
    let stem = match rel.rfind('.') {
        Some(dot) if dot > rel.rfind('/').map(|s| s + 1).unwrap_or(0) => &rel[..dot],
        _ => rel,
    };

    let filtered: String = stem
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-'))
        .map(|c| match c {
            '/' => '.',
            '-' => '_',
            other => other,
        })
        .collect();

    let mut collapsed = String::with_capacity(filtered.len());
    for c in filtered.chars() {
        if c == '.' && collapsed.ends_with('.') {
            continue;
        }
        collapsed.push(c);
    }

    let name = collapsed.trim_matches('.');
    if name.is_empty() {
        "unnamed.module".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_heavy_dot_h() {
        let (score, rationale) = risk_score(Path::new("/p/include/common/config.h"), 2, 10, false);
        // 10 base + 50 macros + 10 for .h
        assert_eq!(score, 70);
        assert_eq!(rationale[0], "included 2 time(s) across scanned files");
        assert_eq!(rationale[1], "macro-heavy: 10 #define directives");
        assert_eq!(rationale[2], ".h extension may indicate C/C++ mixed usage");
        assert_eq!(RiskLevel::from_score(score), RiskLevel::High);
        assert_eq!(Recommendation::new(score, false), Recommendation::Defer);
    }

    #[test]
    fn test_macro_penalty_capped_and_clamped() {
        let (score, _) = risk_score(Path::new("x.h"), 1, 40, true);
        // 10 + 55 + 30 + 10 + 8 = 113, clamped
        assert_eq!(score, 100);
    }

    #[test]
    fn test_high_reuse_lowers_risk() {
        let (score, rationale) = risk_score(Path::new("x.hpp"), 4, 0, false);
        assert_eq!(score, 4);
        assert_eq!(rationale.last().unwrap(), "high reuse improves migration payoff");
        assert_eq!(Recommendation::new(score, false), Recommendation::HeaderUnit);
    }

    #[test]
    fn test_cycle_recommendation_wins() {
        let (score, rationale) = risk_score(Path::new("cycle_b.hpp"), 1, 0, true);
        assert_eq!(score, 48);
        assert!(rationale.contains(&"participates in an include cycle".to_string()));
        assert_eq!(RiskLevel::from_score(score), RiskLevel::Medium);
        assert_eq!(Recommendation::new(score, true), Recommendation::RefactorCycle);
        assert_eq!(Recommendation::new(48, false), Recommendation::NamedModulePilot);
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(65), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(66), RiskLevel::High);
    }

    #[test]
    fn test_suggest_module_name() {
        let root = Path::new("/p");
        assert_eq!(suggest_module_name(Path::new("/p/include/core/math.hpp"), root), "core.math");
        assert_eq!(suggest_module_name(Path::new("/p/src/my-lib/v1.2/x.h"), root), "src.my_lib.v1.2.x");
        assert_eq!(suggest_module_name(Path::new("/p/include/a b+c.hpp"), root), "abc");
        assert_eq!(suggest_module_name(Path::new("/p/include/+++.hpp"), root), "unnamed.module");
        // Dotfiles have no suffix to drop
        assert_eq!(suggest_module_name(Path::new("/p/include/.h"), root), "h");
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&Recommendation::HeaderUnit).unwrap(),
            "\"P1 header unit candidate\""
        );
    }
}
