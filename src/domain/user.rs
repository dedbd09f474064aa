//! Marketplace members.
//!
//! A `User` is both a directory record (seed data consulted at login) and
//! the signed-in session copy that the points ledger mutates.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a user record.
pub type UserId = String;

/// A marketplace member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name shown on listings and swap requests.
    pub name: String,
    /// Login key. Also compared against the configured admin email.
    pub email: String,
    /// Points balance. Spent on redemptions, never below zero.
    pub points: u32,
    /// Calendar date the account was created.
    pub join_date: NaiveDate,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a freshly signed-up user with a new id and today's join date.
    pub fn new_member(name: &str, email: &str, starting_points: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            points: starting_points,
            join_date: Utc::now().date_naive(),
            avatar: None,
        }
    }

    /// Whether the balance covers a purchase of `cost` points.
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.points >= cost
    }

    /// Points still missing to cover `cost`, if any.
    pub fn shortfall(&self, cost: u32) -> Option<u32> {
        cost.checked_sub(self.points).filter(|missing| *missing > 0)
    }
}
