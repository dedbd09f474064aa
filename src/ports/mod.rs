//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `PreferenceStore`: durable client preferences (theme flag)

pub mod preferences;

pub use preferences::PreferenceStore;
