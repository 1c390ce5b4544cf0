//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are placeholders that render inside `AdminLayout`; the sidebar and
//! its route highlighting do not depend on their content.

pub mod section;
