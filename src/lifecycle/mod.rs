//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`OrderSystem`] - Spawns the order actor, wires the kitchen notifier, and
//!   coordinates graceful shutdown
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
