//! The clippings pipeline: split an export into blocks, group the blocks by
//! book title, write one file per book.
//!
//! A clipping is kept as the raw text of one entry (title line, metadata line,
//! highlight body) with its line endings untouched.

mod grouper;
mod splitter;
mod writer;

pub use grouper::{BookGroups, group_clippings};
pub use splitter::read_clippings;
pub use writer::{WriteOptions, WriteSummary, output_path, write_book_groups};
