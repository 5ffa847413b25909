use std::io;

use clap::{ArgGroup, Args};
use linefix_core::{run_filter, Mode};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["constify", "deconstify"])))]
pub struct StrconstArgs {
    /// Plain lines -> quoted `" +`-joined literal block
    #[arg(short = 'c', long)]
    pub constify: bool,

    /// Quoted literal block -> plain lines (best effort)
    #[arg(short = 'd', long)]
    pub deconstify: bool,
}

impl StrconstArgs {
    pub fn mode(&self) -> Mode {
        if self.constify {
            Mode::Constify
        } else {
            Mode::Deconstify
        }
    }
}

pub fn run(args: StrconstArgs) -> anyhow::Result<()> {
    filter_stdio(args.mode())
}

/// Run the filter over locked stdin/stdout.
pub fn filter_stdio(mode: Mode) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::BufWriter::new(io::stdout().lock());
    run_filter(mode, stdin, stdout)?;
    Ok(())
}
