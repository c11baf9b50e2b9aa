//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The shell's own output (menus, prompts, confirmations) goes straight to the
//! session's `Write` sink; tracing carries the structured, operator-facing
//! view of the same run: actor lifecycle, entity operations, payments.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact
//! format hides the crate/module prefix (`with_target(false)`); actor events
//! carry an `entity_type` field instead.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads (e.g. the menu item in an AddItem action)
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "add_item")
        .init();
}
