//! Turn a Verilog/SystemVerilog module declaration into a port-connected
//! instantiation template.
//!
//! Pipeline: source text → [`scan`] (comment-aware identifier extraction)
//! → [`types::Declaration`] → [`emit`] (named-binding rendering). The
//! [`cli`] layer wraps it in file I/O and console reporting.

pub mod cli;
pub mod config;
pub mod emit;
pub mod scan;
pub mod types;
