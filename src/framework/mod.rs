//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems that manage resource entities with create/get operations and custom
//! actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
