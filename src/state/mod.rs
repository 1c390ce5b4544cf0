//! Sidebar state and decision logic.
//!
//! DESIGN
//! ======
//! Navigation data and dismissal rules are plain Rust with no browser
//! dependency, so components stay thin and every rule is testable natively.

pub mod nav;
pub mod sidebar;
