pub mod fixtures;
pub mod merkle_tree;
pub mod price_update;
