//! UI components, one file per page area.

pub mod back_to_top;
pub mod header;
pub mod lightbox;
pub mod name_dialog;
pub mod price_calculator;
pub mod product_card;
pub mod product_grid;
