//! Prompt Gallery HTTP Server Library
//!
//! Provides REST API components for testing and reuse.

pub mod actions;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod state;
