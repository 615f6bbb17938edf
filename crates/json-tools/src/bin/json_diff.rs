//! `json-diff` — print the edit list that transforms one document into
//! another.
//!
//! Usage:
//!   json-diff <a.json> <b.json>

use json_tools::json_cli::{load_document, CliError};
use json_tools::json_patch::to_json_patch;
use json_tools::json_patch_diff::diff;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (a, b) = match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => (a.clone(), b.clone()),
        _ => {
            eprintln!("Usage: json-diff <a.json> <b.json>");
            std::process::exit(1);
        }
    };

    match run(&a, &b) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(a: &str, b: &str) -> Result<String, CliError> {
    let src = load_document(a)?;
    let dst = load_document(b)?;
    let ops = diff(&src, &dst);
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}
