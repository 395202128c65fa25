//! Page-level components.

pub mod showcase;
