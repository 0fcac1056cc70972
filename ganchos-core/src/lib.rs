//! # ganchos-core
//!
//! Core library for ganchos - automation hooks for AI coding-assistant
//! runtimes.
//!
//! This library provides:
//! - A tool-event logging hook that appends daily JSONL records
//! - A newline-delimited JSON protocol server with a fixed tool catalog
//! - Heuristic stack detection (language, framework, type, architecture)
//! - Zero-trust claim validation with weighted-evidence scoring
//!
//! ## Architecture
//!
//! Every component is a pure function of the filesystem snapshot and the
//! input stream at invocation time: there is no shared runtime, no cache,
//! and no persistence beyond the hook's append-only event log. Heuristics
//! degrade gracefully - unreadable files are skipped, never fatal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ganchos_core::detect;
//!
//! let context = detect::detect(std::path::Path::new("."));
//! println!("{} + {}", context.primary_language, context.framework);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Public modules
pub mod config;
pub mod detect;
pub mod error;
pub mod hook;
pub mod logging;
pub mod server;
pub mod validate;
pub mod walk;
