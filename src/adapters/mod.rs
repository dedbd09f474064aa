//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! storage, and loads the data the store starts from.
//!
//! Adapter categories:
//! - `preferences`: file-backed and in-memory `PreferenceStore`s
//! - `seed`: built-in demo catalog and JSON seed files

pub mod preferences;
pub mod seed;
