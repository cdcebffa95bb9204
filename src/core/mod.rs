//! Core library components.
//!
//! Handle validation, key lookup and caching, argument rewriting, and
//! launching the wrapped tool.

pub mod cache;
pub mod config;
pub mod constants;
pub mod handle;
pub mod keys;
pub mod launch;
pub mod resolver;
pub mod rewrite;
