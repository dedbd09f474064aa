//! ReWear Market - Library Root
//!
//! In-memory state store for a clothing-swap marketplace: users, the item
//! catalog, swap requests, a points ledger and a persisted theme flag.
//! Re-exports all modules for integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
