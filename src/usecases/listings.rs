//! Listings Use Case - Submission and Moderation
//!
//! New listings always enter the catalog as pending + available, owned by
//! the signed-in user. Moderation flips the admin-controlled status and is
//! deliberately unguarded here: only the presentation layer decides who
//! is offered the approve/reject actions (see `is_admin`).

use tracing::{debug, info, instrument};

use super::store::MarketplaceStore;
use crate::domain::{Item, ItemId, ListingDraft, ListingError, ModerationStatus, NewItem};
use crate::ports::preferences::PreferenceStore;

impl<P: PreferenceStore> MarketplaceStore<P> {
  /// Append a listing owned by the signed-in user.
  ///
  /// Returns the new item id, or `None` (no change) when nobody is signed
  /// in. Field contents are not validated.
  #[instrument(skip(self, data), fields(title = %data.title))]
  pub fn add_item(&mut self, data: NewItem) -> Option<ItemId> {
    let Some(owner) = self.current_user.as_ref() else {
      debug!("Listing ignored: no signed-in user");
      return None;
    };

    let item = Item::list(data, owner);
    let id = item.id.clone();

    info!(
      item_id = %id,
      owner = %item.uploader_id,
      points = item.point_value,
      "Listing submitted for review"
    );

    self.items.push(item);
    Some(id)
  }

  /// Normalize a listing form and submit it.
  ///
  /// A zero point value takes the configured default. Returns `Ok(None)`
  /// when nobody is signed in.
  ///
  /// # Errors
  /// Returns `ListingError` when the draft is missing a title or images.
  pub fn submit_listing(&mut self, draft: ListingDraft) -> Result<Option<ItemId>, ListingError> {
    let data = draft.into_new_item(self.default_point_value)?;
    Ok(self.add_item(data))
  }

  /// Mark an item approved. Unknown ids are ignored.
  pub fn approve_item(&mut self, item_id: &str) {
    self.set_moderation(item_id, ModerationStatus::Approved);
  }

  /// Mark an item rejected. Unknown ids are ignored.
  pub fn reject_item(&mut self, item_id: &str) {
    self.set_moderation(item_id, ModerationStatus::Rejected);
  }

  #[instrument(skip(self))]
  fn set_moderation(&mut self, item_id: &str, status: ModerationStatus) {
    match self.item_mut(item_id) {
      Some(item) => {
        let previous = item.status;
        item.status = status;
        info!(%previous, "Moderation status updated");
      }
      None => debug!("Moderation ignored: unknown item"),
    }
  }
}
