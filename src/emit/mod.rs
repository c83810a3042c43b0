mod instantiation;
mod json;

pub use instantiation::{output_file_name, render_instantiation};
pub use json::{to_json, JsonOutput};
