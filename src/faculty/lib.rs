//! # Faculty Architecture
//!
//! Faculty is a **UI-agnostic roster library** for teacher records kept in a flat,
//! comma-delimited text file. The interactive menu and the one-shot subcommands
//! shipped in the binary are just two clients of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menu              │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the Roster and the storage backend                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One business operation per module                        │
//! │  - Operates on the in-memory Roster, returns CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs) + Storage Layer (store/)                │
//! │  - Roster: ordered records, find/update/delete/filter/sort  │
//! │  - DataStore trait: FileStore (production),                 │
//! │    InMemoryStore (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. "Not found" outcomes are reported as warning messages in the result,
//! not as errors.
//!
//! ## Persistence Model
//!
//! The whole file is read once when the API is opened and rewritten in full on
//! save. There is no escaping in the line format, so a name containing a comma
//! cannot round-trip; see [`codec`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`roster`]: The in-memory ordered record collection
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: One record per line, comma separated
//! - [`model`]: Core data types (`Teacher`, `TeacherFilter`, `SortKey`)
//! - [`age`]: Date of birth parsing and age computation
//! - [`config`]: Configuration management
//! - [`init`]: Resolves config and data file locations into a ready API
//! - [`error`]: Error types

pub mod age;
pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod roster;
pub mod store;
