//! # Qtrack Architecture
//!
//! Qtrack is a **UI-agnostic practice-question tracker library**. The CLI in
//! `main.rs` is just one client; the same core could sit behind a TUI or a
//! web view.
//!
//! ## The Layers
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
//! │  - Thin facade over the core                                │
//! │  - Holds the session state (selected topic)                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Layer (tracker.rs + view.rs)                          │
//! │  - Tracker: owns state, mutates, then persists              │
//! │  - view: pure queries, recomputed per call                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Mutate, Then Persist
//!
//! The tracker's in-memory state is authoritative for the life of the
//! process. Each command applies its change in memory and then flushes the
//! affected record through the storage port as a full overwrite. Loading is
//! the mirror image: absent or malformed records fall back to defaults and
//! never surface an error.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, never writes to stdout/stderr, and never assumes a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`tracker`]: The question store and its mutations
//! - [`view`]: Pure display queries (counts, solved flags, progress)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Question`, `Difficulty`, `Link`, `Theme`)
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod model;
pub mod store;
pub mod tracker;
pub mod view;
