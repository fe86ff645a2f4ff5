//! studybell - a desktop study-reminder notifier
//!
//! This library provides the core functionality for showing study-reminder
//! desktop notifications behind a browser-style, three-valued permission
//! flag (granted / denied / default).

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod notifier;

// Re-export core types for convenience
pub use crate::core::*;
