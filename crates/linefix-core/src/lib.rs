pub mod error;
pub mod config;

pub mod retab;
pub mod strconst;

pub use crate::config::{FailurePolicy, RetabConfig};
pub use crate::error::{LinefixError, Result};
pub use crate::retab::walk::{retab_file, retab_tree, FileOutcome, RetabReport};
pub use crate::strconst::filter::run_filter;
pub use crate::strconst::Mode;
