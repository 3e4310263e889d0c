//! # Taskpad
//!
//! A terminal client for a remote task-tracking REST API. Tasks are
//! created, listed, edited and completed against a task server; the server
//! stays the single source of truth and the client re-fetches the full
//! list after every mutation.
//!
//! ## Features
//!
//! - **Task Creation**: Title plus optional description, validated locally
//! - **Chronological Listing**: Tasks ordered by creation time ascending
//! - **Edit In Place**: Draft-based edit workflow with explicit failure handling
//! - **Completion**: Confirmed completion, with visibility left to the server
//! - **Pessimistic Sync**: Local state changes only after server confirmation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
