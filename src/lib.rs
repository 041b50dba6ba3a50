//! # Bookz Architecture
//!
//! Bookz is a catalog library with an interactive CLI client. The data layer
//! is usable on its own; the text menu is just one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, terminal output                      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - In-memory ordered collection of books                    │
//! │  - Id generation, CRUD, filtering                           │
//! │  - Persists the whole collection after every mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Backend trait (load/save of a full snapshot)    │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `catalog.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types (`Result<T>`), and never touches stdout/stderr or
//! assumes a terminal. The menu loop itself is generic over `BufRead` and
//! `Write`, so the whole interactive flow is testable without a tty.
//!
//! ## Persistence Model
//!
//! The backing file is a pretty-printed JSON array mirroring the in-memory
//! collection. Every mutating operation rewrites the whole file before it
//! returns; the file is a durable mirror of memory, never a source of truth
//! mid-session. Single process, single owner, no locking.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Book` record type
//! - [`catalog`]: the collection plus its operations
//! - [`store`]: storage abstraction and implementations
//! - [`cli`]: the interactive menu and output formatting
//! - [`error`]: error types

pub mod catalog;
pub mod cli;
pub mod error;
pub mod model;
pub mod store;
