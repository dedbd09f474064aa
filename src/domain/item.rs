//! Garment listings and their two lifecycles.
//!
//! An item carries two independent status flags:
//! - `ModerationStatus` is admin-controlled and gates catalog visibility.
//! - `Availability` is transactional and gates swap/redemption eligibility.
//!
//! Availability only moves forward: `Available` → `Reserved` or `Swapped`.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserId};

/// Identifier of a catalog item.
pub type ItemId = String;

/// Admin-controlled listing status.
///
/// `Swapped` is part of the vocabulary but no store operation assigns it;
/// the transactional outcome lives in `Availability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// Awaiting admin review. Every new listing starts here.
    Pending,
    /// Visible in the catalog.
    Approved,
    /// Hidden from the catalog.
    Rejected,
    /// Never assigned; see `Availability::Swapped`.
    Swapped,
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Swapped => write!(f, "swapped"),
        }
    }
}

/// Transactional availability of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Open for swap requests and redemptions.
    Available,
    /// Held by a pending swap request.
    Reserved,
    /// Redeemed with points.
    Swapped,
}

impl Availability {
    /// Catalog ordering rank: available first, then reserved, then swapped.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Reserved => 1,
            Self::Swapped => 2,
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Reserved => write!(f, "reserved"),
            Self::Swapped => write!(f, "swapped"),
        }
    }
}

/// A listed garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Free-form category (e.g. "Outerwear").
    pub category: String,
    /// Free-form garment type (e.g. "Jacket").
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub condition: String,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub tags: Vec<String>,
    /// Owner of the listing.
    pub uploader_id: UserId,
    /// Owner display name captured when the listing was created.
    pub uploader_name: String,
    /// Moderation lifecycle.
    pub status: ModerationStatus,
    /// Transactional lifecycle.
    pub availability: Availability,
    /// Calendar date the listing was submitted.
    pub created_at: NaiveDate,
    /// Price when redeemed with points.
    pub point_value: u32,
}

impl Item {
    /// Build a new listing owned by `owner`: pending, available, dated today.
    pub fn list(data: NewItem, owner: &User) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            category: data.category,
            kind: data.kind,
            size: data.size,
            condition: data.condition,
            images: data.images,
            tags: data.tags,
            uploader_id: owner.id.clone(),
            uploader_name: owner.name.clone(),
            status: ModerationStatus::Pending,
            availability: Availability::Available,
            created_at: Utc::now().date_naive(),
            point_value: data.point_value,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn is_approved(&self) -> bool {
        self.status == ModerationStatus::Approved
    }

    /// Whether `user_id` owns this listing.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.uploader_id == user_id
    }
}

/// Caller-supplied fields of a new listing.
///
/// The store fills in id, owner, statuses and creation date. The point
/// value is taken as given; defaulting is the caller's job (see
/// `ListingDraft`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub condition: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub point_value: u32,
}
