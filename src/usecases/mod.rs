//! Use Cases Layer - Marketplace Operations
//!
//! `MarketplaceStore` is the single state container. Its operations are
//! split by concern into one `impl` block per module:
//! - `store`: construction, theme restore/toggle, accessors
//! - `session`: login, signup, logout
//! - `listings`: listing submission and admin moderation
//! - `exchange`: swap requests and point redemptions
//! - `catalog`: browse, moderation queue, dashboards, eligibility

pub mod catalog;
pub mod exchange;
pub mod listings;
pub mod session;
pub mod store;

pub use catalog::{CatalogQuery, Eligibility, ListingSummary, ModerationCounts, ModerationQuery};
pub use exchange::{ExchangeError, Redemption};
pub use store::MarketplaceStore;
