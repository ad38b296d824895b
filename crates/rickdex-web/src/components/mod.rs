pub mod card_grid;
pub mod filter_bar;
pub mod modal;
pub mod pagination;
