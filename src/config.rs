//! Console message templates.
//!
//! The wording lives here as data, injected into the CLI layer, so the
//! core never prints and callers can swap the presentation wholesale.
//! `{}` marks the single substitution slot in templates that have one.

use crate::types::ScanError;

#[derive(Debug, Clone)]
pub struct Messages {
    pub error_tag: String,
    pub success_tag: String,
    pub info_tag: String,
    /// Template, `{}` = path of the missing declaration file
    pub no_such_file: String,
    pub module_name_ambiguous: String,
    pub no_params_found: String,
    pub no_inputs_found: String,
    pub no_outputs_found: String,
    /// Template, `{}` = path of the written instantiation file
    pub written: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            error_tag: "***Error: ".to_string(),
            success_tag: "***Success: ".to_string(),
            info_tag: "***Info: ".to_string(),
            no_such_file: "The module file '{}' could not be located - double-check the name or file path.".to_string(),
            module_name_ambiguous: "\
The module name could not be identified. Please ensure that you have used
a standard or conventional structure. An example is shown below:
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
"
            .to_string(),
            no_params_found: "No parameters were identified for this module.".to_string(),
            no_inputs_found: "No module inputs were identified.".to_string(),
            no_outputs_found: "No module outputs were identified.".to_string(),
            written: "Success! The instantiated module is at {}.".to_string(),
        }
    }
}

impl Messages {
    /// The full console message for a scan failure.
    pub fn for_scan_error(&self, err: &ScanError) -> String {
        match err {
            ScanError::ModuleNameAmbiguous { .. } => self.module_name_ambiguous.clone(),
            ScanError::NoInputsFound => format!("{}{}", self.error_tag, self.no_inputs_found),
            ScanError::NoOutputsFound => format!("{}{}", self.error_tag, self.no_outputs_found),
        }
    }

    pub fn missing_file(&self, path: &str) -> String {
        format!("{}{}", self.error_tag, self.no_such_file.replace("{}", path))
    }

    pub fn no_parameters(&self) -> String {
        format!("{}{}", self.info_tag, self.no_params_found)
    }

    pub fn wrote_file(&self, path: &str) -> String {
        format!("{}{}", self.success_tag, self.written.replace("{}", path))
    }
}
