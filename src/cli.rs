use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gpaint")]
#[command(about = "Design synthetic contribution patterns and export them as git commands")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(
        long,
        value_parser = clap::value_parser!(i32).range(1..=9999),
        help = "Target year (defaults to the current year)"
    )]
    pub year: Option<i32>,

    #[arg(long, help = "Path to the pattern database directory")]
    pub store: Option<PathBuf>,
}

impl CommonArgs {
    pub fn resolve_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Utc::now().year())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Edit,
    Show,
    Export {
        #[arg(long, help = "Output the raw JSON day array instead of commands")]
        json: bool,

        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Copy the output to the clipboard")]
        copy: bool,
    },
    Import {
        #[arg(help = "Path to a JSON day array file")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Edit => crate::tui::run(&self.common),
            Commands::Show => crate::show::exec(self.common),
            Commands::Export { json, output, copy } => {
                crate::export::exec(self.common, json, output, copy)
            }
            Commands::Import { file } => crate::import::exec(self.common, &file),
        }
    }
}
