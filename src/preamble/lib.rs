//! # Preamble Architecture
//!
//! Preamble is a **UI-agnostic front-matter library**. The binary is a thin
//! client; every operation it offers is available to any other UI through
//! the same API.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, prompt.rs)                    │
//! │  - Parses arguments, prompts, prints, owns exit codes       │
//! │  - The ONLY place that knows about stdout/stderr/terminals  │
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
//! │  - Pure business logic over the front-matter patcher        │
//! │  - No terminal I/O, no ambient clock, no globals            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContentStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Front-Matter Patcher
//!
//! [`frontmatter`] is the heart of the crate: detection, field-presence
//! checks, field insertion and block synthesis, all byte-preserving and
//! idempotent. Every command is a thin orchestration around it.
//!
//! ## Generation Strategies
//!
//! Slugs, tags and summaries come from an explicit ordered strategy list
//! (model endpoint → rule table → timestamp, see [`generate`]). The model
//! call is optional, bounded by a fixed timeout, and never retried; its
//! failure is invisible to the user.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments (including the
//! current time), returns regular `Result` types, and never writes to
//! stdout/stderr or calls `std::process::exit`.
//!
//! ## Testing Strategy
//!
//! 1. **Patcher and leaf utilities**: exhaustive unit tests next to the
//!    code — this is where the lion's share of testing lives.
//! 2. **Commands**: unit tests against `InMemoryStore`.
//! 3. **CLI**: integration tests under `tests/` drive the real binary in a
//!    temporary content tree.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`frontmatter`]: the front-matter patch algorithm
//! - [`generate`]: slug/tag/summary strategies
//! - [`chat`]: blocking chat-completion client
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: shared vocabulary (`ContentKind`, date formats)
//! - [`slug`], [`markdown`]: leaf text utilities
//! - [`config`]: the optional models.yaml
//! - [`error`]: error types

pub mod api;
pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod generate;
pub mod markdown;
pub mod model;
pub mod slug;
pub mod store;
