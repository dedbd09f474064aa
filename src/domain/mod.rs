//! Domain layer - Marketplace entities and their vocabularies.
//!
//! Pure data and invariants for the clothing-swap marketplace: members,
//! listings, swap requests, the theme preference and the seed snapshot
//! the store starts from. No I/O here (hexagonal architecture inner ring).
//! All types are serializable and testable in isolation.

pub mod item;
pub mod listing;
pub mod seed;
pub mod swap;
pub mod theme;
pub mod user;

// Re-export core types for convenience
pub use item::{Availability, Item, ItemId, ModerationStatus, NewItem};
pub use listing::{ListingDraft, ListingError};
pub use seed::MarketSeed;
pub use swap::{SwapRequest, SwapRequestId, SwapStatus};
pub use theme::Theme;
pub use user::{User, UserId};
