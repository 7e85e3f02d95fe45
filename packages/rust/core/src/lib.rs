//! Core pipeline and filesystem side of notesplit.
//!
//! This crate ties segmentation, slug/topic resolution, page rendering,
//! the backup guard and the topic index updater into one `split_notes` run.

pub mod backup;
pub mod index;
pub mod pipeline;
pub mod writer;

pub use pipeline::{ProgressReporter, SilentProgress, split_notes};
