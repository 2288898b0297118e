//! CLI entry point for the cage puzzle generation tool

use calcugen::io::cli::{BatchGenerator, Cli};
use clap::Parser;

fn main() -> calcugen::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.process()
}
