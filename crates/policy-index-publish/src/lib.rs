//! Side effects of a run: splicing the README and writing the index page
//!
//! Both operations take a [`WriteMode`]. In [`WriteMode::Check`] nothing is
//! written; the outcome only says whether the file on disk is current.

pub mod index_page;
pub mod markers;
pub mod readme;

use serde::Serialize;

pub use index_page::{IndexOutcome, write_index};
pub use markers::{END_MARKER, START_MARKER, replace_generated_block};
pub use readme::{ReadmeOutcome, update_readme};

/// Whether outputs are written or only compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Write,
    Check,
}

impl WriteMode {
    #[must_use]
    pub fn is_check(self) -> bool {
        matches!(self, Self::Check)
    }
}
