//! `cppac`: command-line driver for the completion engine.

mod args;
mod driver;
mod reporter;
mod tracing_config;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    tracing_config::init_tracing();
    let args = args::CliArgs::parse();
    driver::run(args)
}
