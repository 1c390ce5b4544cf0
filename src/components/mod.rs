//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome. The sidebar reads the open flag
//! from its props and routes every change back through the host's setter.

pub mod admin_layout;
pub mod nav_link;
pub mod sidebar;
pub mod top_bar;
