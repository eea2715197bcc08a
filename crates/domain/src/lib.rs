//! # Étincelle Domain
//!
//! Business domain types and models for Étincelle.
//!
//! This crate contains:
//! - Domain data types (UserProfile, Swipe, Match, Message, LocalEvent)
//! - Domain error types and Result definitions
//! - Domain constants and the interest catalog
//! - Seed fixtures for the demo session
//!
//! ## Architecture
//! - No dependencies on other Étincelle crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod fixtures;
pub mod interests;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
