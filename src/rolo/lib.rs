//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic phonebook library** with a thin CLI client on top.
//! Anything a different frontend (a TUI, a web service) would need lives
//! behind the library API; the binary only parses arguments and prints.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes plain arguments
//! and returns plain values (`Result<CmdResult>`). It never touches
//! stdout/stderr, never calls `std::process::exit`, and never reads
//! environment variables; the CLI boundary resolves all of that once and
//! passes it down.
//!
//! ## Testing Strategy
//!
//! Each layer is tested where its logic lives:
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of business logic against
//!    `InMemoryStore`. This is where the lion's share of testing lives.
//!
//! 2. **Model and codec** (`model.rs`, `codec.rs`): unit tests of the phonebook
//!    mapping and the row format.
//!
//! 3. **CLI** (thin `main.rs` + `args.rs`): end-to-end tests in `tests/` that run
//!    the binary against real files and assert on output and exit codes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Phonebook`)
//! - [`codec`]: The one-row-per-contact text format
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
