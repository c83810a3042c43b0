use clap::Parser;

use vinst::cli::{run_generate, Args};
use vinst::config::Messages;

fn main() {
    let args = Args::parse();
    if let Err(err) = run_generate(&args, &Messages::default()) {
        eprintln!("{}", console::style(err).red());
        std::process::exit(1);
    }
}
