//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by controller domain (`theme`, `counters`, `lightbox`, ...)
//! so individual components can depend on small focused models. Each module
//! owns its state cell and its storage keys exclusively; controllers never
//! call each other.

pub mod animation;
pub mod calculator;
pub mod counters;
pub mod greeting;
pub mod lightbox;
pub mod scroll;
pub mod theme;
