//! Plain-text rendering of a [`PlannerReport`].

use crate::config::{TEXT_RATIONALE_SHOWN, TEXT_UNRESOLVED_SHOWN};
use crate::report::PlannerReport;

pub fn format_report(report: &PlannerReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    let summary = &report.summary;

    lines.push("modpath-cpp migration plan".to_string());
    lines.push(format!("Input: {}", report.input_file));
    lines.push(format!("Project root: {}", report.project_root));
    lines.push(format!(
        "Scanned: {} translation units, {} headers, {} cycle-involved headers",
        summary.translation_units, summary.scanned_headers, summary.cycle_header_count
    ));
    lines.push(String::new());

    lines.push("Top migration candidates".to_string());
    if report.candidates.is_empty() {
        lines.push("- No project headers were discovered from the input metadata.".to_string());
    }
    for (idx, c) in report.candidates.iter().enumerate() {
        lines.push(format!(
            "{}. {} (includes={}, risk={}/100 {})",
            idx + 1,
            c.header,
            c.include_frequency,
            c.risk_score,
            c.risk_level
        ));
        lines.push(format!("   recommendation: {}", c.recommendation));
        lines.push(format!(
            "   module hint: {}",
            c.suggested_module.as_deref().unwrap_or("None")
        ));
        for reason in c.rationale.iter().take(TEXT_RATIONALE_SHOWN) {
            lines.push(format!("   - {}", reason));
        }
    }

    lines.push(String::new());
    lines.push("Phased plan".to_string());

    lines.push("P1) Header units".to_string());
    for action in &report.phases.p1_header_units.actions {
        lines.push(format!("- {}", action));
    }

    lines.push("P2) Named modules".to_string());
    for action in &report.phases.p2_named_modules.actions {
        lines.push(format!("- {}", action));
    }

    lines.push("P3) import std readiness".to_string());
    for check in &report.phases.p3_import_std_readiness.checks {
        lines.push(format!("- [{}] {}: {}", check.status, check.title, check.details));
    }

    if !report.unresolved_includes.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Unresolved includes (showing first {}):",
            report.unresolved_includes.len()
        ));
        for unresolved in report.unresolved_includes.iter().take(TEXT_UNRESOLVED_SHOWN) {
            lines.push(format!("- {}: {}", unresolved.from, unresolved.include));
        }
    }

    lines.join("\n")
}
