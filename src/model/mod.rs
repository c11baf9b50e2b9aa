//! Pure data structures (DTOs) for the menu catalog and the order.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
