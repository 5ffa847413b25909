// crates/linefix-core/src/retab/walk.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{FailurePolicy, RetabConfig};
use crate::error::{LinefixError, Result};
use crate::retab::normalize_buffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Rewritten { lines_changed: usize },
    WouldRewrite { lines_changed: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RetabReport {
    pub scanned: usize,
    pub unchanged: usize,
    /// Rewritten paths, or would-be rewritten paths on a dry run.
    pub rewritten: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl RetabReport {
    /// `Err(Failed)` listing every failed path, if any.
    pub fn check(&self) -> Result<()> {
        if self.failed.is_empty() {
            return Ok(());
        }
        Err(LinefixError::Failed {
            paths: self.failed.clone(),
        })
    }

    fn record(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Rewritten { .. } | FileOutcome::WouldRewrite { .. } => {
                self.rewritten.push(path.to_path_buf())
            }
        }
    }
}

/// Normalize one file in place. The file is only opened for writing if a
/// line actually changed, so clean files keep their mtime.
pub fn retab_file(path: &Path, config: &RetabConfig) -> Result<FileOutcome> {
    let bytes = std::fs::read(path).map_err(|e| LinefixError::io(path, e))?;
    let norm = normalize_buffer(&bytes, config.tab_width);

    if !norm.changed() {
        debug!(path = %path.display(), "clean");
        return Ok(FileOutcome::Unchanged);
    }

    let lines_changed = norm.lines_changed;
    if config.dry_run {
        info!(path = %path.display(), lines_changed, "would rewrite");
        return Ok(FileOutcome::WouldRewrite { lines_changed });
    }

    std::fs::write(path, norm.render()).map_err(|e| LinefixError::io(path, e))?;
    info!(path = %path.display(), lines_changed, "rewrote");
    Ok(FileOutcome::Rewritten { lines_changed })
}

/// Walk `root` and normalize every regular file whose name ends with the
/// configured suffix. Symlinks are not followed and are never rewritten.
///
/// Under [`FailurePolicy::Collect`] the run completes and failed paths land in
/// [`RetabReport::failed`]; call [`RetabReport::check`] to turn them into an error.
pub fn retab_tree(root: &Path, config: &RetabConfig) -> Result<RetabReport> {
    config.validate()?;
    visit_selected(root, config, |path| retab_file(path, config))
}

fn visit_selected<F>(root: &Path, config: &RetabConfig, mut visit: F) -> Result<RetabReport>
where
    F: FnMut(&Path) -> Result<FileOutcome>,
{
    let mut report = RetabReport::default();
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => match config.policy {
                FailurePolicy::Abort => return Err(e.into()),
                FailurePolicy::Collect => {
                    let p = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    warn!(path = %p.display(), error = %e, "walk failed");
                    report.failed.push(p);
                    continue;
                }
            },
        };

        if !entry.file_type().is_file() || !config.selects(entry.file_name()) {
            continue;
        }

        report.scanned += 1;
        let path = entry.path();
        match visit(path) {
            Ok(outcome) => report.record(path, outcome),
            Err(e) => match config.policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Collect => {
                    warn!(path = %path.display(), error = %e, "skipping");
                    report.failed.push(path.to_path_buf());
                }
            },
        }
    }

    Ok(report)
}
