pub mod common;
pub mod u501_seed_catalog;
pub mod u502_submit_listing;
