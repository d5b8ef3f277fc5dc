use anyhow::Context;
use std::path::Path;

use modpath_planner::{analyze_compile_commands, format_report, PlannerConfig};

/// Renders the migration plan as text, or as pretty JSON for CI.
pub fn render(compile_commands: &Path, as_json: bool, top: usize) -> anyhow::Result<String> {
    let config = PlannerConfig::default().with_top(top);
    let report = analyze_compile_commands(compile_commands, &config)?;

    if as_json {
        report
            .to_json_pretty()
            .context("Failed to serialize report")
    } else {
        Ok(format_report(&report))
    }
}

pub fn run(compile_commands: &Path, as_json: bool, top: usize) -> anyhow::Result<()> {
    let output = render(compile_commands, as_json, top)?;
    println!("{output}");
    Ok(())
}
