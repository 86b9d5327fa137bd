//! `kite explain`: one diagnostic in detail.

use kite_analysis::diagnostic_registry;
use kite_diagnostics::RegisteredFactory;

/// Prints the registration of diagnostic `name`; exits 1 if there is none.
pub fn run(name: &str) -> Result<i32, Box<dyn std::error::Error>> {
    let registry = diagnostic_registry()?;
    match registry.get(name) {
        Some(factory) => {
            print!("{}", describe(factory));
            Ok(0)
        }
        None => {
            eprintln!("error: no diagnostic named `{name}`; run `kite catalog` for the list");
            Ok(1)
        }
    }
}

fn describe(factory: &RegisteredFactory) -> String {
    let params = factory.descriptor().params();
    let mut out = format!("{}\n", factory.name());
    out.push_str(&format!("  severity:    {}\n", factory.severity()));
    out.push_str(&format!("  positioning: {}\n", factory.positioning().name()));
    if params.is_empty() {
        out.push_str("  parameters:  none\n");
    } else {
        out.push_str("  parameters:\n");
        for (i, kind) in params.iter().enumerate() {
            out.push_str(&format!("    {{{i}}} {kind}\n"));
        }
    }
    out.push_str(&format!("  message:     {}\n", factory.template().as_str()));
    out.push_str(&format!("  catalog:     {}\n", factory.catalog()));
    out
}
