use anyhow::{anyhow, Context, Result};
use console::{style, Emoji};
use std::fs;
use std::path::Path;

use crate::cli::Args;
use crate::config::Messages;
use crate::emit::{output_file_name, render_instantiation, to_json};
use crate::scan::scan_source;

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

/// Read the declaration file, scan it, render the instantiation, and hand
/// the result back out (file and/or stdout).
pub fn run_generate(args: &Args, messages: &Messages) -> Result<()> {
    let path = &args.file;
    if !path.is_file() {
        return Err(anyhow!(messages.missing_file(&path.display().to_string())));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // Fail fast: no rendering happens on a failed scan.
    let decl = scan_source(&contents).map_err(|err| anyhow!(messages.for_scan_error(&err)))?;

    let snippet = render_instantiation(&decl, &args.instance);

    if args.json {
        println!("{}", to_json(&decl, &snippet)?);
        return Ok(());
    }

    if !decl.has_parameters() {
        println!("{}{}", INFO, style(messages.no_parameters()).dim());
    }

    if args.stdout {
        println!("{}", snippet);
        return Ok(());
    }

    let out_path = match &args.output {
        Some(path) => path.clone(),
        None => path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(output_file_name(&decl.name, path)),
    };

    fs::write(&out_path, &snippet)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!(
        "{}{}",
        SUCCESS,
        style(messages.wrote_file(&out_path.display().to_string())).green()
    );
    println!("\n{}", snippet);

    Ok(())
}
