mod args;
mod generate;

pub use args::Args;
pub use generate::run_generate;
