use clap::Parser;
use std::path::PathBuf;

/// Generate a port-connected instantiation template from a Verilog or
/// SystemVerilog module declaration.
#[derive(Parser, Debug)]
#[command(name = "vinst", version, about)]
pub struct Args {
    /// Path to the file containing the module declaration (.v or .sv)
    pub file: PathBuf,

    /// Instance name used in the generated snippet
    #[arg(short, long, default_value = "dut")]
    pub instance: String,

    /// Write the snippet here instead of <module>_instantiated.<ext>
    /// next to the input file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the snippet to stdout without writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit the scan result and snippet as JSON to stdout (no file is
    /// written)
    #[arg(long)]
    pub json: bool,
}
