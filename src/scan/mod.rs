mod comment;
mod decl;
mod scanner;

pub use comment::strip_comments;
pub use decl::{parse_decl_tail, DeclKind, DeclMatch};
pub use scanner::{scan_lines, scan_source};
