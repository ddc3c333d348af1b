//! Terminal host for the article list view.
//!
//! - [`commands`]: Line command parsing
//! - [`console`]: Console surface and confirmation prompt
//! - [`html_file`]: HTML mirror surface
//! - [`logging`]: `tracing` subscriber setup
//! - [`session`]: The command loop
//!
//! Output formatting for `show` and `stats` is in [`output`].

pub mod commands;
pub mod console;
pub mod html_file;
pub mod logging;
pub mod output;
pub mod session;
