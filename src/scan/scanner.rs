//! Line-by-line declaration scanner.
//!
//! Each line is reduced to its non-comment prefix, then all patterns are
//! run against it independently. Keeping the scan per-line means a runaway
//! block comment can never swallow the rest of the file, at the cost of
//! not recognizing a declaration deliberately split across a comment line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::comment::strip_comments;
use crate::scan::decl::{parse_decl_tail, DeclKind};
use crate::types::{push_unique, Declaration, ScanError};

// module serialTX #( ... ) ( ... )
// The `#(` / `(` opener may sit several lines below the name, so the
// pattern only captures the name; `followed_by_port_list` checks the rest.
// An optional backtick token allows vendor macro prefixes before the name.
static MODULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bmodule\s+(?:`[A-Za-z_][\w$]*\s+)?(?P<name>[A-Za-z_][\w$]*)").unwrap()
});

// parameter INCR = ..., input [7:0] data, output reg txOut
// `\b` rejects occurrences embedded in identifiers (`data_input`,
// `localparam`); comment occurrences are gone before matching.
static KEYWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:parameter|input|output)\b").unwrap());

/// Scans a whole source blob. Equivalent to [`scan_lines`] over its lines.
pub fn scan_source(text: &str) -> Result<Declaration, ScanError> {
    scan_lines(text.lines())
}

/// Scans an ordered sequence of lines (terminators already stripped) and
/// assembles the [`Declaration`], or classifies the failure.
pub fn scan_lines<'a, I>(lines: I) -> Result<Declaration, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let stripped: Vec<&str> = lines.into_iter().map(strip_comments).collect();

    let mut names: Vec<String> = Vec::new();
    let mut parameters: Vec<String> = Vec::new();
    let mut inputs: Vec<String> = Vec::new();
    let mut outputs: Vec<String> = Vec::new();

    for (row, line) in stripped.iter().enumerate() {
        for caps in MODULE_PATTERN.captures_iter(line) {
            let whole = caps.get(0).unwrap();
            if followed_by_port_list(&stripped, row, whole.end()) {
                // Candidates are collected verbatim: two headers for the
                // same name are still ambiguous.
                names.push(caps["name"].to_string());
            }
        }

        for m in KEYWORD_PATTERN.find_iter(line) {
            let rest = &line[m.end()..];
            let (kind, list) = match m.as_str() {
                "parameter" => (DeclKind::Parameter, &mut parameters),
                "input" => (DeclKind::Port, &mut inputs),
                _ => (DeclKind::Port, &mut outputs),
            };
            if let Some(decl) = parse_decl_tail(rest, kind) {
                push_unique(list, decl.identifier);
            }
        }
    }

    if names.len() != 1 {
        return Err(ScanError::ModuleNameAmbiguous { found: names.len() });
    }
    if inputs.is_empty() {
        return Err(ScanError::NoInputsFound);
    }
    if outputs.is_empty() {
        return Err(ScanError::NoOutputsFound);
    }

    Ok(Declaration {
        name: names.remove(0),
        parameters,
        inputs,
        outputs,
    })
}

/// Checks that the first non-whitespace text at or after (`row`, `col`),
/// scanning forward across lines, is `#` then `(`, or `(` directly.
/// Anything else means the `module` keyword was not a header.
fn followed_by_port_list(lines: &[&str], mut row: usize, mut col: usize) -> bool {
    let mut seen_hash = false;
    loop {
        if row >= lines.len() {
            return false;
        }
        let rest = &lines[row][col..];
        match rest.char_indices().find(|(_, c)| !c.is_whitespace()) {
            Some((_, '(')) => return true,
            Some((i, '#')) if !seen_hash => {
                seen_hash = true;
                col += i + 1;
            }
            Some(_) => return false,
            None => {
                row += 1;
                col = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIAL_TX: &str = "\
module serialTX #
    (
    parameter INCR = 26'd25770 // amount by which the accumulator is incremented
    )
    (
    input clk,
    input reset,
    input [7:0] data,
    input send,
    output reg txOut,
    output busy
    );
    // The module description or logic goes below
";

    #[test]
    fn test_scan_serial_tx() {
        let decl = scan_source(SERIAL_TX).unwrap();
        assert_eq!(decl.name, "serialTX");
        assert_eq!(decl.parameters, vec!["INCR"]);
        assert_eq!(decl.inputs, vec!["clk", "reset", "data", "send"]);
        assert_eq!(decl.outputs, vec!["txOut", "busy"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let first = scan_source(SERIAL_TX).unwrap();
        let second = scan_source(SERIAL_TX).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blob_and_lines_agree() {
        let from_blob = scan_source(SERIAL_TX).unwrap();
        let from_lines = scan_lines(SERIAL_TX.lines()).unwrap();
        assert_eq!(from_blob, from_lines);
    }

    #[test]
    fn test_parameterless_module() {
        let src = "\
module counter (
    input clk,
    output [3:0] q
    );
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.name, "counter");
        assert!(decl.parameters.is_empty());
        assert_eq!(decl.inputs, vec!["clk"]);
        assert_eq!(decl.outputs, vec!["q"]);
    }

    #[test]
    fn test_comment_lines_do_not_contribute() {
        let src = "\
// output foo is driven externally
module counter (
    input clk, // input sampled on the rising edge
    //input spare_pin,
    output q
    );
    /* the following is a note:
     * output bar used to exist
     */
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.inputs, vec!["clk"]);
        assert_eq!(decl.outputs, vec!["q"]);
    }

    #[test]
    fn test_keywords_inside_identifiers_ignored() {
        let src = "\
module filter (
    input clk,
    input data_input,
    output wire filtered_output,
    output done
    );
";
        let decl = scan_source(src).unwrap();
        // `data_input` / `filtered_output` must match as identifiers, not
        // as embedded keywords.
        assert_eq!(decl.inputs, vec!["clk", "data_input"]);
        assert_eq!(decl.outputs, vec!["filtered_output", "done"]);
    }

    #[test]
    fn test_duplicate_declarations_deduplicated() {
        let src = "\
module m (clk, q);
    input clk;
    input clk;
    output q;
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.inputs, vec!["clk"]);
        assert_eq!(decl.outputs, vec!["q"]);
    }

    #[test]
    fn test_two_modules_ambiguous() {
        let src = "\
module foo (
    input a,
    output b
    );
endmodule
module bar (
    input c,
    output d
    );
";
        assert_eq!(
            scan_source(src),
            Err(ScanError::ModuleNameAmbiguous { found: 2 })
        );
    }

    #[test]
    fn test_no_module_header_ambiguous() {
        // `module` without a following port list is not a header.
        let src = "// module notes\ninput a,\noutput b,\n";
        assert_eq!(
            scan_source(src),
            Err(ScanError::ModuleNameAmbiguous { found: 0 })
        );
    }

    #[test]
    fn test_missing_inputs_fatal() {
        let src = "\
module generator (
    output pulse
    );
";
        assert_eq!(scan_source(src), Err(ScanError::NoInputsFound));
    }

    #[test]
    fn test_missing_outputs_fatal() {
        let src = "\
module sink (
    input pulse
    );
";
        assert_eq!(scan_source(src), Err(ScanError::NoOutputsFound));
    }

    #[test]
    fn test_width_specifier_tolerance() {
        let src = "\
module widths (
    input [31:0][7:0] data,
    input[3:0]bank_addr,
    output wire [3:0]name,
    output [`BUS_W-1:0] bus,
    output [$clog2(DEPTH)-1:0] addr
    );
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.inputs, vec!["data", "bank_addr"]);
        assert_eq!(decl.outputs, vec!["name", "bus", "addr"]);
    }

    #[test]
    fn test_header_opener_many_lines_below_name() {
        let src = "\
module spaced_out


    #
    (
    parameter WIDTH = 8
    )
    (
    input clk,
    output [WIDTH-1:0] q
    );
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.name, "spaced_out");
        assert_eq!(decl.parameters, vec!["WIDTH"]);
    }

    #[test]
    fn test_body_parameter_excluded_from_header_set() {
        let src = "\
module fsm #
    (
    parameter WIDTH = 4
    )
    (
    input clk,
    output reg [1:0] state
    );
    parameter state_idle = 2'b00;
    parameter state_busy = 2'b01;
";
        let decl = scan_source(src).unwrap();
        assert_eq!(decl.parameters, vec!["WIDTH"]);
    }

    #[test]
    fn test_endmodule_does_not_count() {
        let src = "\
module wrap (
    input a,
    output y
    );
endmodule
";
        assert_eq!(scan_source(src).unwrap().name, "wrap");
    }

    #[test]
    fn test_macro_prefix_before_module_name() {
        let src = "\
module `VENDOR_PREFIX top (
    input clk,
    output done
    );
";
        assert_eq!(scan_source(src).unwrap().name, "top");
    }
}
