//! The declaration-tail grammar shared by `parameter`, `input`, and
//! `output` matches.
//!
//! A tail is everything after the keyword:
//!
//! ```text
//! [qualifier] [width-specifier]{0,2} identifier (= | ,)?
//! ```
//!
//! Width specifiers are balanced `[...]` groups whose contents are left
//! free-form so that macro widths (`` [`BUS_W-1:0] ``), system calls
//! (`[$clog2(DEPTH)-1:0]`), and packed multi-dimensional shapes
//! (`[31:0][7:0]`) all pass through. Only the identifier survives into the
//! `Declaration`; the rest is kept in the match record so callers never
//! reach for positional capture-group indices.

/// One matched declaration tail, named fields instead of group numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclMatch<'a> {
    /// Storage/type qualifier (`wire`, `reg`, or a user type), if present
    pub qualifier: Option<&'a str>,
    /// Bit-width/array specifiers, in source order (at most two)
    pub widths: Vec<&'a str>,
    /// The declared identifier
    pub identifier: &'a str,
}

/// What trailing syntax the tail must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// Requires `=` after the identifier; rejects body-internal parameters.
    Parameter,
    /// Optional trailing comma.
    Port,
}

/// Parses the text following an accepted keyword occurrence.
///
/// Returns `None` when the tail does not form a declaration; the caller
/// simply moves on to the next keyword occurrence.
///
/// Separator rule: a width specifier may sit flush against both the
/// qualifier and the identifier (`output wire [3:0]name,` and
/// `input[3:0]bank_addr,` are both legal); without a width specifier the
/// qualifier must be whitespace-separated from the identifier, which falls
/// out of the structure here rather than being checked explicitly: an
/// unseparated `wirename` lexes as a single identifier.
pub fn parse_decl_tail(rest: &str, kind: DeclKind) -> Option<DeclMatch<'_>> {
    let mut s = rest.trim_start();
    let mut qualifier = None;
    let mut widths = Vec::new();

    // A leading identifier is the qualifier only when a width specifier or
    // another identifier follows; otherwise it is the declared name itself.
    let identifier = if let Some((word, after)) = take_identifier(s) {
        let after_ws = after.trim_start();
        let had_space = after_ws.len() != after.len();
        if after_ws.starts_with('[') || (had_space && starts_identifier(after_ws)) {
            qualifier = Some(word);
            s = after_ws;
            None
        } else {
            s = after;
            Some(word)
        }
    } else {
        None
    };

    let (identifier, s) = match identifier {
        Some(word) => (word, s),
        None => {
            while widths.len() < 2 && s.starts_with('[') {
                let (width, after) = take_bracket_group(s)?;
                widths.push(width);
                s = after.trim_start();
            }
            take_identifier(s)?
        }
    };

    match kind {
        DeclKind::Parameter => {
            let after_eq = s.trim_start().strip_prefix('=')?;
            // `parameter x = <value>;` is a body item, not a header
            // parameter. Header entries end in `,`, `)`, or nothing.
            if after_eq.trim_end().ends_with(';') {
                return None;
            }
        }
        DeclKind::Port => {}
    }

    Some(DeclMatch {
        qualifier,
        widths,
        identifier,
    })
}

fn starts_identifier(s: &str) -> bool {
    s.chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
}

/// Splits a leading `[A-Za-z_][A-Za-z0-9_$]*` identifier off `s`.
fn take_identifier(s: &str) -> Option<(&str, &str)> {
    if !starts_identifier(s) {
        return None;
    }
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

/// Splits a balanced `[...]` group off `s`, tracking nesting depth.
fn take_bracket_group(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[..=i], &s[i + 1..]));
                }
            }
            _ => {}
        }
    }
    // Unbalanced within the line: not a declaration we can use.
    None
}
