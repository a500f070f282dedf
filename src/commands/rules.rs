//! Implementation of the `vetted rules` command.

use std::fmt::Write;
use vetted::Result;
use vetted::exit_codes::SUCCESS;
use vetted::rules::{self, RULES_VERSION};

/// Print every built-in rule table.
pub fn cmd_rules() -> Result<i32> {
    // Fail loudly if a built-in table no longer compiles.
    rules::builtin()?;
    print!("{}", render_rules());
    Ok(SUCCESS)
}

fn render_rules() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rule tables (version {})", RULES_VERSION);

    for table in rules::list_tables() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({} entries)", table.name, table.entries.len());
        for entry in &table.entries {
            let _ = writeln!(out, "  {}", entry);
        }
    }

    out
}
