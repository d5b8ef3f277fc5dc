//! End-to-end analysis of a compilation database.

use std::path::{Path, PathBuf};

use crate::compile_db::{collect_translation_units, load};
use crate::config::{PlannerConfig, FREQUENCY_WEIGHT};
use crate::error::{PlannerError, Result};
use crate::graph::{infer_project_root, IncludeScan};
use crate::paths::{expand_user, is_header, is_project_path, relative_display, resolve, unique_paths};
use crate::phases::{build_phases, build_readiness_checks};
use crate::report::{Candidate, PlannerReport, Summary};
use crate::risk::{risk_score, suggest_module_name, Recommendation, RiskLevel};
use crate::scan::count_defines;

/// Analyzes `compile_commands.json` and builds the migration report.
pub fn analyze_compile_commands(path: impl AsRef<Path>, config: &PlannerConfig) -> Result<PlannerReport> {
    let db_path = resolve(&expand_user(path.as_ref()));
    tracing::info!("Analyzing {:?}", db_path);

    let entries = load(&db_path)?;
    let tus = collect_translation_units(&entries, &db_path);
    if tus.is_empty() {
        return Err(PlannerError::NoTranslationUnits);
    }

    let all_include_dirs = unique_paths(tus.iter().flat_map(|tu| tu.include_dirs.iter().cloned()));
    let db_dir = db_path.parent().unwrap_or(Path::new("/"));
    let root_inputs: Vec<PathBuf> = tus
        .iter()
        .map(|tu| tu.path.clone())
        .chain(all_include_dirs.iter().cloned())
        .collect();
    let project_root = infer_project_root(&root_inputs, db_dir);
    tracing::debug!("Project root: {:?}", project_root);

    let scan = IncludeScan::run(&tus, &all_include_dirs, &project_root);
    let cycle_nodes = scan.graph.cycle_nodes();

    let mut headers: Vec<&PathBuf> = scan
        .include_frequency
        .keys()
        .chain(scan.graph.nodes())
        .filter(|p| is_project_path(p, &project_root) && is_header(p))
        .collect();
    headers.sort();
    headers.dedup();

    let mut candidates: Vec<Candidate> = headers
        .into_iter()
        .map(|header| {
            let include_frequency = scan.include_frequency.get(header).copied().unwrap_or(0);
            let macro_defines = scan
                .macro_counts
                .get(header)
                .copied()
                .unwrap_or_else(|| count_defines(header));
            let in_cycle = cycle_nodes.contains(header);
            let (score, rationale) = risk_score(header, include_frequency, macro_defines, in_cycle);

            Candidate {
                header: relative_display(header, &project_root),
                include_frequency,
                macro_defines,
                in_cycle,
                risk_score: score,
                risk_level: RiskLevel::from_score(score),
                recommendation: Recommendation::new(score, in_cycle),
                rationale,
                suggested_module: Some(suggest_module_name(header, &project_root)),
            }
        })
        .collect();

    // Highest payoff first: frequent, low-risk headers
    candidates.sort_by(|a, b| rank_key(b).cmp(&rank_key(a)));
    candidates.truncate(config.top);

    let unresolved_total = scan.unresolved.len();
    let readiness_checks =
        build_readiness_checks(&tus, &scan.macro_counts, &cycle_nodes, unresolved_total);
    let phases = build_phases(&candidates, &scan.tokens, &readiness_checks);

    let mut unresolved_includes = scan.unresolved;
    unresolved_includes.truncate(config.max_unresolved);

    tracing::info!(
        "Scanned {} translation units, {} headers, {} in cycles, {} unresolved includes",
        tus.len(),
        scan.scanned.len(),
        cycle_nodes.len(),
        unresolved_total
    );

    Ok(PlannerReport {
        input_file: db_path.display().to_string(),
        project_root: project_root.display().to_string(),
        summary: Summary {
            translation_units: tus.len(),
            scanned_headers: scan.scanned.len(),
            cycle_header_count: cycle_nodes.len(),
            unresolved_include_count: unresolved_includes.len(),
        },
        candidates,
        phases,
        readiness_checks,
        unresolved_includes,
    })
}

fn rank_key(c: &Candidate) -> (i64, usize, i64, &str) {
    (
        c.include_frequency as i64 * FREQUENCY_WEIGHT - c.risk_score as i64,
        c.include_frequency,
        -(c.risk_score as i64),
        c.header.as_str(),
    )
}
