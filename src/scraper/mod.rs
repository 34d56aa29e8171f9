//! Shop directory scraper
//!
//! Paginates the A–Z shop listing, extracts per-shop metadata from the
//! detail pages, and exports the results to CSV.

pub mod detail;
pub mod export;
pub mod listing;

pub use detail::ShopRecord;
pub use listing::ShopSummary;
