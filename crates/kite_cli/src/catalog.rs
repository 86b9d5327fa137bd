//! `kite catalog`: every registered diagnostic.

use kite_analysis::diagnostic_registry;
use kite_diagnostics::CatalogEntry;

use crate::ReportFormat;

/// Prints the registry, one diagnostic per line or as a JSON array.
pub fn run(format: ReportFormat) -> Result<i32, Box<dyn std::error::Error>> {
    let entries = diagnostic_registry()?.entries();
    match format {
        ReportFormat::Text => print!("{}", format_table(&entries)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(0)
}

/// Aligned `NAME  severity  (params)  template` rows.
fn format_table(entries: &[CatalogEntry]) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        let params: Vec<&str> = entry.parameters.iter().map(|p| p.label()).collect();
        out.push_str(&format!(
            "{:<width$}  {:<7}  ({})  {}\n",
            entry.name,
            entry.severity.label(),
            params.join(", "),
            entry.template,
        ));
    }
    out
}
