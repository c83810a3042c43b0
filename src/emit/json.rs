//! Machine-readable scan summary for `--json`.

use serde::Serialize;

use crate::types::Declaration;

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub module: &'a str,
    pub parameters: &'a [String],
    pub inputs: &'a [String],
    pub outputs: &'a [String],
    pub instantiation: &'a str,
}

impl<'a> JsonOutput<'a> {
    pub fn new(decl: &'a Declaration, instantiation: &'a str) -> Self {
        Self {
            module: &decl.name,
            parameters: &decl.parameters,
            inputs: &decl.inputs,
            outputs: &decl.outputs,
            instantiation,
        }
    }
}

pub fn to_json(decl: &Declaration, instantiation: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput::new(decl, instantiation))
}
