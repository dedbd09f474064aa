//! Preference Adapters - Implementations of the PreferenceStore port
//!
//! `FilePreferenceStore` persists to an atomic JSON file;
//! `InMemoryPreferenceStore` keeps values for the life of the process.

pub mod file;
pub mod memory;

pub use file::FilePreferenceStore;
pub use memory::InMemoryPreferenceStore;
