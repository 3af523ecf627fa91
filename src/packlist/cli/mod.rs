//! # CLI Layer
//!
//! This module is **one possible UI client** for packlist, not the application itself.
//! It plays the part of the view: it renders the current list and forwards intents
//! (add, pack, remove, reset, sort) to [`packlist::api::PackingApi`].
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Asks the user to confirm clearing the list
//! - Installs a tracing subscriber
//! - Formats output for human consumption
//!
//! ## Naked Execution
//!
//! Running `packlist` with no arguments is `packlist list`.
//!
//! ## Selecting Items
//!
//! Per-item commands take positions as shown by `list` (`packlist pack 1 3`) or raw
//! ids with an `@` prefix. Positions follow the order items were added, whatever
//! `--sort` was used to display them.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and per-command handlers
//! - `render.rs`: terminal output
//! - `logging.rs`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
