//! Readiness checks and the three-phase migration plan.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::compile_db::{is_cxx20_or_newer, TranslationUnit};
use crate::config::{MACRO_HEAVY_THRESHOLD, MEDIUM_RISK_MAX, PHASE_ACTION_LIMIT, PILOT_MIN_FREQUENCY};
use crate::graph::TokenCounter;
use crate::report::{Candidate, CheckStatus, Phase, Phases, ReadinessCheck, ReadinessPhase};
use crate::risk::Recommendation;

pub const CHECK_CXX20: &str = "C++20 compiler mode coverage";
pub const CHECK_CYCLES: &str = "Include cycle cleanup";
pub const CHECK_MACROS: &str = "Macro-heavy header reduction";
pub const CHECK_RESOLUTION: &str = "Include resolution quality";

fn check(title: &str, ok: bool, pass_details: &str, warn_details: String) -> ReadinessCheck {
    ReadinessCheck {
        title: title.to_string(),
        status: CheckStatus::from_ok(ok),
        details: if ok { pass_details.to_string() } else { warn_details },
    }
}

pub fn build_readiness_checks(
    tus: &[TranslationUnit],
    macro_counts: &FxHashMap<PathBuf, usize>,
    cycle_nodes: &BTreeSet<PathBuf>,
    unresolved_count: usize,
) -> Vec<ReadinessCheck> {
    let below_cxx20 = tus
        .iter()
        .filter(|tu| !is_cxx20_or_newer(&tu.std_flag))
        .count();
    let macro_heavy = macro_counts
        .values()
        .filter(|&&count| count >= MACRO_HEAVY_THRESHOLD)
        .count();

    vec![
        check(
            CHECK_CXX20,
            below_cxx20 == 0,
            "All translation units appear to use C++20+ flags",
            format!("{} TU(s) are below C++20 or missing -std flag", below_cxx20),
        ),
        check(
            CHECK_CYCLES,
            cycle_nodes.is_empty(),
            "No include cycles detected",
            format!("{} header(s) are part of cycle(s)", cycle_nodes.len()),
        ),
        check(
            CHECK_MACROS,
            macro_heavy == 0,
            "No macro-heavy headers detected",
            format!(
                "{} header(s) have >= {} #define directives",
                macro_heavy, MACRO_HEAVY_THRESHOLD
            ),
        ),
        check(
            CHECK_RESOLUTION,
            unresolved_count == 0,
            "All scanned includes resolved",
            format!(
                "{} unresolved include(s); verify include paths",
                unresolved_count
            ),
        ),
    ]
}

pub fn build_phases(
    candidates: &[Candidate],
    tokens: &TokenCounter,
    readiness_checks: &[ReadinessCheck],
) -> Phases {
    let mut p1_actions: Vec<String> = candidates
        .iter()
        .filter(|c| {
            c.recommendation == Recommendation::HeaderUnit
                && c.include_frequency >= PILOT_MIN_FREQUENCY
        })
        .take(PHASE_ACTION_LIMIT)
        .map(|c| {
            format!(
                "Convert {} to a header unit pilot (risk {})",
                c.header, c.risk_score
            )
        })
        .collect();

    let system_headers: Vec<String> = tokens
        .most_common()
        .into_iter()
        .filter(|(token, count)| token.starts_with('<') && *count >= PILOT_MIN_FREQUENCY)
        .take(PHASE_ACTION_LIMIT)
        .map(|(token, count)| format!("{} ({}x)", token, count))
        .collect();
    if !system_headers.is_empty() {
        p1_actions.push(format!(
            "Evaluate toolchain support for standard/third-party header units: {}",
            system_headers.join(", ")
        ));
    }
    if p1_actions.is_empty() {
        p1_actions.push("Start with one low-risk, high-frequency project header as a pilot".to_string());
    }

    let mut p2_actions: Vec<String> = candidates
        .iter()
        .filter(|c| {
            c.risk_score <= MEDIUM_RISK_MAX
                && !c.in_cycle
                && c.include_frequency >= PILOT_MIN_FREQUENCY
        })
        .take(PHASE_ACTION_LIMIT)
        .map(|c| {
            format!(
                "Prototype named module '{}' from {}",
                c.suggested_module.as_deref().unwrap_or("unnamed.module"),
                c.header
            )
        })
        .collect();
    if p2_actions.is_empty() {
        p2_actions.push(
            "No safe named-module candidates yet; reduce macro usage and break cycles first"
                .to_string(),
        );
    }

    Phases {
        p1_header_units: Phase {
            goal: "Reduce parse cost by importing stable headers as header units.".to_string(),
            actions: p1_actions,
        },
        p2_named_modules: Phase {
            goal: "Promote stable components to named modules with explicit interfaces."
                .to_string(),
            actions: p2_actions,
        },
        p3_import_std_readiness: ReadinessPhase {
            goal: "Prepare for adopting import std where supported by toolchain.".to_string(),
            checks: readiness_checks.to_vec(),
            actions: vec![
                "Ensure all TUs compile in C++20+ mode".to_string(),
                "Eliminate include cycles and shrink macro-heavy public headers".to_string(),
                "Validate compiler/libstdc++ or libc++ support for import std in CI".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;

    fn candidate(header: &str, freq: usize, risk: u32, in_cycle: bool) -> Candidate {
        Candidate {
            header: header.to_string(),
            include_frequency: freq,
            macro_defines: 0,
            in_cycle,
            risk_score: risk,
            risk_level: RiskLevel::from_score(risk),
            recommendation: Recommendation::new(risk, in_cycle),
            rationale: vec![],
            suggested_module: Some(header.replace('/', ".")),
        }
    }

    #[test]
    fn test_fallback_actions() {
        let phases = build_phases(&[], &TokenCounter::default(), &[]);
        assert_eq!(
            phases.p1_header_units.actions,
            vec!["Start with one low-risk, high-frequency project header as a pilot"]
        );
        assert_eq!(phases.p2_named_modules.actions.len(), 1);
        assert!(phases.p2_named_modules.actions[0].starts_with("No safe named-module candidates"));
        assert_eq!(phases.p3_import_std_readiness.actions.len(), 3);
    }

    #[test]
    fn test_pilot_selection() {
        let candidates = vec![
            candidate("a", 3, 10, false),
            candidate("b", 1, 10, false),
            candidate("c", 2, 50, false),
            candidate("d", 2, 40, true),
        ];
        let mut tokens = TokenCounter::default();
        tokens.bump("<vector>".to_string());
        tokens.bump("<vector>".to_string());
        tokens.bump("<map>".to_string());
        tokens.bump("\"a\"".to_string());
        tokens.bump("\"a\"".to_string());

        let phases = build_phases(&candidates, &tokens, &[]);
        assert_eq!(
            phases.p1_header_units.actions,
            vec![
                "Convert a to a header unit pilot (risk 10)",
                "Evaluate toolchain support for standard/third-party header units: <vector> (2x)",
            ]
        );
        assert_eq!(
            phases.p2_named_modules.actions,
            vec![
                "Prototype named module 'a' from a",
                "Prototype named module 'c' from c",
            ]
        );
    }

    #[test]
    fn test_readiness_checks() {
        let tus = vec![TranslationUnit {
            path: PathBuf::from("/p/main.cpp"),
            include_dirs: vec![],
            std_flag: "c++20".to_string(),
        }];
        let checks = build_readiness_checks(&tus, &FxHashMap::default(), &BTreeSet::new(), 0);
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| c.status == CheckStatus::Pass));
        assert_eq!(checks[0].title, CHECK_CXX20);
        assert_eq!(checks[3].details, "All scanned includes resolved");

        let mut macros = FxHashMap::default();
        macros.insert(PathBuf::from("/p/cfg.h"), 9);
        let checks = build_readiness_checks(&tus, &macros, &BTreeSet::new(), 2);
        assert_eq!(checks[2].status, CheckStatus::Warn);
        assert_eq!(checks[2].details, "1 header(s) have >= 8 #define directives");
        assert_eq!(checks[3].details, "2 unresolved include(s); verify include paths");
    }
}
