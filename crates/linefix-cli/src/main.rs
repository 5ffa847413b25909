// crates/linefix-cli/src/main.rs

use clap::{Parser, Subcommand};

use linefix_cli::{cmd, logging};

#[derive(Parser)]
#[command(name = "linefix")]
#[command(about = "Line-oriented source text tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand tabs and strip trailing spaces in matching files, in place
    Retab(cmd::retab::RetabArgs),

    /// Turn a text block into a string literal block (-c) or back (-d)
    Strconst(cmd::strconst::StrconstArgs),
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Retab(args) => cmd::retab::run(args),
        Commands::Strconst(args) => cmd::strconst::run(args),
    }
}
