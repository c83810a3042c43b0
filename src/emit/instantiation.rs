//! Renders a scanned [`Declaration`] into an instantiation snippet.
//!
//! Every binding uses the named idiom `.port(port)`, connecting each port
//! and parameter to an identically named signal in the enclosing scope, so
//! the snippet drops straight into a testbench next to same-named wires.

use std::path::Path;

use crate::types::Declaration;

// Section delimiters inside the rendered port list
const PARAMS_HEADER: &str = "// ==== Parameters ====";
const INPUTS_HEADER: &str = "// ==== Inputs ====";
const OUTPUTS_HEADER: &str = "// ==== Outputs ====";

/// Renders the instantiation text. Cannot fail: a `Declaration` only
/// reaches the renderer once the scanner has accepted it.
///
/// With parameters:
///
/// ```text
/// serialTX #
///     (
///     // ==== Parameters ====
///     .INCR(INCR)
///     ) dut
///     (
///     // ==== Inputs ====
///     .clk(clk),
///     ...
/// ```
///
/// Without parameters the header collapses to `counter dut` followed
/// directly by the port list.
pub fn render_instantiation(decl: &Declaration, instance: &str) -> String {
    let mut out = String::new();

    if decl.has_parameters() {
        out.push_str(&decl.name);
        out.push_str(" #\n\t(\n\t");
        out.push_str(PARAMS_HEADER);
        out.push_str("\n\t");
        out.push_str(&join_bindings(&decl.parameters));
        out.push_str("\n\t) ");
        out.push_str(instance);
        out.push('\n');
    } else {
        out.push_str(&decl.name);
        out.push(' ');
        out.push_str(instance);
        out.push('\n');
    }

    out.push_str("\t(\n\t");
    out.push_str(INPUTS_HEADER);
    out.push_str("\n\t");
    // Inputs are all comma-terminated: the outputs block always follows,
    // since an empty output list never gets past the scanner.
    for input in &decl.inputs {
        out.push_str(&format!(".{0}({0}),\n\t", input));
    }
    out.push_str(OUTPUTS_HEADER);
    out.push_str("\n\t");
    out.push_str(&join_bindings(&decl.outputs));
    out.push_str("\n\t);\n");

    out
}

/// `.name(name)` bindings, comma-separated, no comma after the last.
fn join_bindings(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!(".{0}({0})", n))
        .collect::<Vec<_>>()
        .join(",\n\t")
}

/// The suggested output artifact name: `<module>_instantiated.<ext>`,
/// where `<ext>` is copied from the declaration file (`.v` or `.sv`).
pub fn output_file_name(module: &str, source: &Path) -> String {
    match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_instantiated.{}", module, ext),
        None => format!("{}_instantiated.v", module),
    }
}
