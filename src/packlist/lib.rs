//! # Packlist Architecture
//!
//! Packlist is a **UI-agnostic packing-list library** with a small command-line client.
//! The library owns one ordered list of items (description, quantity, packed flag),
//! applies a handful of transitions to it, derives sorted views and progress stats,
//! and persists it to a single named slot after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the list, asks for confirmation│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current Collection; the only thing replacing it │
//! │  - Resolves selectors (positions, @ids) to item ids         │
//! │  - Saves after every mutation, logs failed saves            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions: &Collection in, new Collection out       │
//! │  - Sorted views and stats computed on read                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Item operations never fail. An empty description is rejected, an unknown item is
//! a no-op, and both are visible in the returned [`commands::Outcome`]. A stored list
//! that cannot be read degrades to an empty one. Only configuration and storage
//! plumbing return [`error::Result`].
//!
//! ## Module Overview
//!
//! - [`api`]: The item store facade, entry point for all operations
//! - [`commands`]: Pure transitions and derived views
//! - [`store`]: Persistence trait and implementations
//! - [`model`]: `Item`, `Collection`, `Quantity`, `SortKey`
//! - [`ids`]: Item id generation
//! - [`index`]: User-facing item selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod index;
pub mod model;
pub mod store;
