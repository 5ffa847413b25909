// crates/linefix-core/src/strconst/filter.rs

use std::io::{BufRead, Write};
use std::iter::Peekable;

use tracing::debug;

use crate::error::Result;
use crate::strconst::Mode;

/// Iterator adapter yielding `(item, is_last)`.
///
/// Holds a single pending item: an item is only released once the next one
/// has been pulled from the source (or the source is exhausted).
pub struct LastAware<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> LastAware<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }
}

impl<I: Iterator> Iterator for LastAware<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let is_last = self.inner.peek().is_none();
        Some((item, is_last))
    }
}

/// Stream `input` line by line through `mode`, writing one output line per
/// input line. Returns the number of lines written.
pub fn run_filter<R: BufRead, W: Write>(mode: Mode, input: R, mut output: W) -> Result<usize> {
    let mut written = 0usize;

    for (line, is_last) in LastAware::new(input.lines()) {
        let line = line?;
        writeln!(output, "{}", mode.transform(&line, is_last))?;
        written += 1;
    }

    output.flush()?;
    debug!(%mode, lines = written, "filter done");
    Ok(written)
}

/// In-memory form of [`run_filter`].
pub fn transform_lines<S: AsRef<str>>(mode: Mode, lines: &[S]) -> Vec<String> {
    LastAware::new(lines.iter())
        .map(|(l, is_last)| mode.transform(l.as_ref(), is_last))
        .collect()
}
