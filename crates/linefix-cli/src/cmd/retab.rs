use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use linefix_core::config::{DEFAULT_SUFFIX, DEFAULT_TAB_WIDTH};
use linefix_core::{retab_tree, FailurePolicy, RetabConfig};

#[derive(Args, Debug)]
pub struct RetabArgs {
    /// Root directory to walk
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Only touch files whose name ends with this suffix
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Spaces per tab
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    pub tab_width: usize,

    /// List files that would change, write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going past unreadable/unwritable files and report them all at the end
    #[arg(long)]
    pub keep_going: bool,
}

impl RetabArgs {
    pub fn config(&self) -> RetabConfig {
        RetabConfig {
            suffix: self.suffix.clone(),
            tab_width: self.tab_width,
            dry_run: self.dry_run,
            policy: if self.keep_going {
                FailurePolicy::Collect
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

pub fn run(args: RetabArgs) -> anyhow::Result<()> {
    let cfg = args.config();
    let report = retab_tree(&args.root, &cfg)
        .with_context(|| format!("retab {}", args.root.display()))?;

    let mut out = io::stdout().lock();
    for p in &report.rewritten {
        writeln!(out, "{}", p.display())?;
    }
    out.flush()?;

    let verb = if cfg.dry_run { "would_rewrite" } else { "rewritten" };
    eprintln!(
        "retab {}: root={} scanned={} {}={} unchanged={} failed={}",
        if report.failed.is_empty() { "ok" } else { "incomplete" },
        args.root.display(),
        report.scanned,
        verb,
        report.rewritten.len(),
        report.unchanged,
        report.failed.len()
    );
    report
        .check()
        .with_context(|| format!("retab {}", args.root.display()))?;
    Ok(())
}
