//! # omoro-showcase
//!
//! Leptos + WASM client for the OMORO's Jewelry product showcase page.
//!
//! The page is a set of independent UI controllers sharing a page-load
//! lifecycle: persisted theme preference, a one-time name greeting,
//! per-product tally counters, an image lightbox, an entrance-animation
//! trigger, a price/tax calculator modal, and a scroll-triggered back-to-top
//! control. Controllers never call one another; they compose through shared
//! reactive contexts and the localStorage namespace.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
