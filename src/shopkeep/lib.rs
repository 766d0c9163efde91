//! # Shopkeep Architecture
//!
//! Shopkeep is a text-command interpreter over a small in-memory
//! inventory store with soft deletion. The library is UI-agnostic: the
//! binary wraps it in a read/print loop, but nothing inside the
//! library touches a stream.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs + args.rs)                                  │
//! │  - Reads lines, prints replies, owns stdin/stdout           │
//! │  - The ONLY place that knows about terminals and exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (interpreter.rs)                               │
//! │  - One raw line in, one rendered reply out                  │
//! │  - Dispatches structured matches, renders all outcomes      │
//! └─────────────────────────────────────────────────────────────┘
//!                │                             │
//!                ▼                             ▼
//! ┌──────────────────────────────┐ ┌──────────────────────────────┐
//! │  Matcher (matcher.rs)        │ │  Store (store.rs)            │
//! │  - Grammar + typed fields    │ │  - Two tables, id lifecycle  │
//! │  - Pure classification       │ │  - active ⇄ deleted moves    │
//! └──────────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! Validation always precedes dispatch: a line that fails the grammar
//! or a field type never reaches the store, so invalid input cannot
//! mutate state.
//!
//! ## Module Overview
//!
//! - [`model`]: `Item`, `DeletedItem`, `Price`, `Table`, and the
//!   ordered schema descriptor
//! - [`grammar`]: the command shapes and their keywords
//! - [`matcher`]: raw text → [`matcher::ParsedCommand`]
//! - [`store`]: the two-table CRUD/soft-delete engine
//! - [`interpreter`]: dispatch and text rendering
//! - [`config`]: shell configuration (prompt, default seed file)
//! - [`seed`]: JSON fixture loading at startup
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod matcher;
pub mod model;
pub mod seed;
pub mod store;
