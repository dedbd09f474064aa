//! Listing form normalization.
//!
//! `ListingDraft` is the raw submission as typed by a member. Turning it
//! into a `NewItem` applies the form rules: a title and one to
//! `MAX_IMAGES` images are required, tags are trimmed and de-duplicated,
//! and a zero point value falls back to the marketplace default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::NewItem;

/// Most photos a single listing may carry.
pub const MAX_IMAGES: usize = 5;

/// Reasons a draft cannot become a listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("listing title must not be empty")]
    MissingTitle,
    #[error("listing needs at least one image")]
    MissingImages,
    #[error("listing has {0} images, at most {max} allowed", max = MAX_IMAGES)]
    TooManyImages(usize),
}

/// Unvalidated listing form contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub condition: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    /// Zero means "not set".
    #[serde(default)]
    pub point_value: u32,
}

impl ListingDraft {
    /// Normalize the draft into the payload accepted by `add_item`.
    ///
    /// # Errors
    /// Returns `ListingError` when the title is blank or the image count is
    /// outside `1..=MAX_IMAGES`.
    pub fn into_new_item(self, default_point_value: u32) -> Result<NewItem, ListingError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ListingError::MissingTitle);
        }

        let images: Vec<String> = self
            .images
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .collect();
        if images.is_empty() {
            return Err(ListingError::MissingImages);
        }
        if images.len() > MAX_IMAGES {
            return Err(ListingError::TooManyImages(images.len()));
        }

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        let point_value = if self.point_value == 0 {
            default_point_value
        } else {
            self.point_value
        };

        Ok(NewItem {
            title,
            description: self.description,
            category: self.category,
            kind: self.kind,
            size: self.size,
            condition: self.condition,
            images,
            tags,
            point_value,
        })
    }
}
