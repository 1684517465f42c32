//! Core library for autofix
//!
//! This crate implements the **Functional Core** of the autofix application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The autofix project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`autofix_core`** (this crate): Pure transformation functions with zero I/O
//! - **`autofix`**: CLI, backend clients, and file I/O (the Imperative Shell)
//!
//! Everything that decides *what* gets sent to the model and *what* gets written
//! back lives here. Reading the target, talking to the remote API, and writing the
//! backup and the rewritten file live in the shell.
//!
//! # Module Organization
//!
//! - [`error`]: The failure taxonomy shared by every step of a rewrite
//! - [`rewrite`]: Request types, prompt templates, response validation, and backup naming
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use autofix_core::rewrite::{build_prompt, PromptStyle, RewriteRequest, DEFAULT_PURPOSE};
//!
//! let request = RewriteRequest::new("src/server.js", None, "let x=1".to_string());
//! let prompt = build_prompt(&request, PromptStyle::Split);
//!
//! assert!(prompt.user.contains(DEFAULT_PURPOSE));
//! assert!(prompt.user.contains("let x=1"));
//! ```

pub mod error;
pub mod rewrite;

pub use error::RewriteError;
