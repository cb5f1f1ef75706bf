//! Shared helpers for the command handlers.

mod formatting;
mod interaction;

pub use formatting::sanitize_filename;
pub use interaction::confirm;
