use std::path::PathBuf;

use clap::Parser;

use linefix_cli::cmd::retab::{run, RetabArgs};
use linefix_cli::logging;
use linefix_core::config::{DEFAULT_SUFFIX, DEFAULT_TAB_WIDTH};

/// Expand tabs and strip trailing spaces in every .java file under ROOT.
#[derive(Parser, Debug)]
#[command(name = "retabber")]
struct Args {
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let a = Args::parse();

    run(RetabArgs {
        root: a.root,
        suffix: DEFAULT_SUFFIX.to_string(),
        tab_width: DEFAULT_TAB_WIDTH,
        dry_run: false,
        keep_going: false,
    })
}
