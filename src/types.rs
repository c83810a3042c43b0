//! Shared types for the scan → render pipeline.

use serde::Serialize;
use thiserror::Error;

/// The parsed result of scanning one module declaration.
///
/// Identifier lists are duplicate-free and keep first-occurrence order, so
/// rendering the same source twice produces byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Module name from the `module <name> ...` header
    pub name: String,
    /// Parameter names, first-seen order
    pub parameters: Vec<String>,
    /// Input port names, first-seen order
    pub inputs: Vec<String>,
    /// Output port names, first-seen order
    pub outputs: Vec<String>,
}

impl Declaration {
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// Why a scan failed. Empty parameter lists are not an error; the
/// declaration is simply treated as parameterless.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// Zero or more than one `module <name> (`-style header was found.
    #[error("expected exactly one module declaration, found {found}")]
    ModuleNameAmbiguous { found: usize },
    #[error("no module inputs were identified")]
    NoInputsFound,
    #[error("no module outputs were identified")]
    NoOutputsFound,
}

/// Append `name` unless the list already holds it.
pub(crate) fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_keeps_first_seen_order() {
        let mut list = Vec::new();
        push_unique(&mut list, "clk");
        push_unique(&mut list, "reset");
        push_unique(&mut list, "clk");
        push_unique(&mut list, "data");
        assert_eq!(list, vec!["clk", "reset", "data"]);
    }

    #[test]
    fn test_has_parameters() {
        let mut decl = Declaration::default();
        assert!(!decl.has_parameters());
        decl.parameters.push("WIDTH".to_string());
        assert!(decl.has_parameters());
    }
}
