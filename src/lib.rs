// ABOUTME: Library root for gh-deployment - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod action;
pub mod api;
pub mod config;
pub mod deploy;
pub mod error;
pub mod output;
pub mod types;
