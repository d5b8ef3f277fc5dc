use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use modpath_core::config::CONFIG;

/// Renders the build-time configuration set.
pub fn render(as_json: bool) -> anyhow::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(&CONFIG).context("Failed to serialize config");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Value"]);

    for (name, value) in CONFIG.entries() {
        table.add_row(vec![name.to_string(), value.to_string()]);
    }

    Ok(format!("\nBuild Configuration\n\n{table}\n"))
}

pub fn run(as_json: bool) -> anyhow::Result<()> {
    println!("{}", render(as_json)?);
    Ok(())
}
