// scrumlint/src/commands/rules.rs
//
// USE CASE: show the active catalog, the way a coach would review it
// before handing it to the team.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use scrumlint_core::infrastructure::load_catalog_or_default;
use std::path::PathBuf;

pub fn execute(rules: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog_or_default(rules.as_deref());

    if let Some(meta) = &catalog.meta_info {
        println!(
            "📚 Knowledge base v{} (updated {})",
            meta.version, meta.last_updated
        );
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(200) // stable layout when stdout is not a terminal (CI)
        .set_header(vec!["Id", "Name", "Category", "Severity", "Field", "Operator"]);

    for rule in catalog.rules() {
        let operator = match rule.operator_kind() {
            Some(op) => op.to_string(),
            None => format!("{} (unknown, inert)", rule.detection_logic.operator),
        };
        table.add_row(vec![
            rule.id.clone(),
            rule.name.clone(),
            rule.category.clone(),
            rule.severity.to_string(),
            rule.detection_logic.field.clone(),
            operator,
        ]);
    }

    println!("{table}");
    println!("{} rules active.", catalog.len());
    Ok(())
}
