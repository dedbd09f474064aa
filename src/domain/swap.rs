//! Swap requests: append-only records of intent to trade for an item.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::{Item, ItemId};
use super::user::{User, UserId};

/// Identifier of a swap request.
pub type SwapRequestId = String;

/// Lifecycle status of a swap request.
///
/// Only `Pending` is ever assigned; the remaining variants are carried for
/// records loaded from seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A user's request to swap for an item.
///
/// Requester name and item title are snapshots taken at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: SwapRequestId,
    pub requester_id: UserId,
    pub requester_name: String,
    pub item_id: ItemId,
    pub item_title: String,
    pub status: SwapStatus,
    pub created_at: NaiveDate,
}

impl SwapRequest {
    /// Open a pending request from `requester` for `item`.
    pub fn open(requester: &User, item: &Item) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requester_id: requester.id.clone(),
            requester_name: requester.name.clone(),
            item_id: item.id.clone(),
            item_title: item.title.clone(),
            status: SwapStatus::Pending,
            created_at: Utc::now().date_naive(),
        }
    }
}
