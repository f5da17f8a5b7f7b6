use anyhow::Result;
use clap::Parser;
use gpaint::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
