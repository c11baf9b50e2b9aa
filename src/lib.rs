#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Bistro
//!
//! > **An interactive restaurant-ordering shell, built on resource actors.**
//!
//! This crate is a console demonstration of a handful of classic design
//! patterns wired into one ordering workflow:
//!
//! - **Factory**: the menu catalog ([`model::MenuItem::new`]) stamps out the
//!   fixed dishes.
//! - **Decorator**: toppings ([`model::MenuItem::with_cheese`]) wrap an item,
//!   adding a surcharge and a display line.
//! - **Builder**: the order accumulates items one at a time inside the order
//!   actor; the total is always recomputed from the parts.
//! - **Strategy**: payment ([`payment::PaymentStrategy`]) is selected at
//!   checkout time over a single `pay` capability.
//! - **Observer**: the kitchen ([`kitchen::KitchenNotifier`]) can notify a
//!   chef of placed orders. It is wired up at startup but never triggered by
//!   the interactive flow, on purpose.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns entity state and processes
//! messages sequentially in its own Tokio task. Written once, usable for any
//! [`framework::Entity`]; the order is its only production tenant here.
//!
//! ### 2. The Data ([`model`])
//! Pure data: the menu catalog with hardcoded prices, and the append-only
//! [`model::Order`].
//!
//! ### 3. The Interface ([`clients`])
//! [`clients::OrderClient`] wraps the generic client so the rest of the app
//! never touches raw message passing.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`lifecycle::OrderSystem`] spawns the actor, attaches the chef, and handles
//! graceful shutdown.
//!
//! ### 5. The Surface ([`shell`])
//! The interactive menu loop: read a numeric choice, dispatch, print, repeat
//! until exit. Generic over its input/output streams so whole sessions can be
//! scripted in tests.
//!
//! ## 🚀 Running
//!
//! ```bash
//! # Interactive session with info logs
//! RUST_LOG=info cargo run
//!
//! # Tests
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
pub mod shell;
