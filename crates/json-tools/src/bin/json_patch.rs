//! `json-patch` — apply one or more edit-list files to a document.
//!
//! Usage:
//!   json-patch [-i|--inplace] <doc.json> <patch.json>...
//!
//! Patch files are applied in argument order. The result is printed to
//! stdout, or written back to the document file when `--inplace` is given.
//! A missing document exits with code 2, a missing patch file with code 3.

use json_tools::json_cli::{load_document, load_patch, write_document, CliError};
use json_tools::json_patch::apply_patch;

fn main() {
    let mut inplace = false;
    let mut files = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-i" | "--inplace" => inplace = true,
            _ => files.push(arg),
        }
    }

    if files.len() < 2 {
        eprintln!("Usage: json-patch [-i|--inplace] <doc.json> <patch.json>...");
        std::process::exit(1);
    }

    match run(&files[0], &files[1..], inplace) {
        Ok(Some(out)) => println!("{out}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(doc_path: &str, patches: &[String], inplace: bool) -> Result<Option<String>, CliError> {
    let mut doc = load_document(doc_path)?;
    for patch_path in patches {
        let ops = load_patch(patch_path)?;
        apply_patch(&mut doc, &ops).map_err(|e| CliError::Patch(e.to_string()))?;
    }

    if inplace {
        write_document(doc_path, &doc)?;
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string_pretty(&doc)?))
    }
}
