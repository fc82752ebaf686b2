//! CLI entry point for the Voronoi image shatter tool

use clap::Parser;
use fracture::io::cli::{Cli, FileProcessor};

fn main() -> fracture::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
