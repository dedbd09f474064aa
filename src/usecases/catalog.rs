//! Catalog Queries - Read-only Views over the Store
//!
//! Browse, moderation queue, member dashboards and per-item action
//! eligibility. Nothing here mutates state.

use serde::Serialize;

use super::store::MarketplaceStore;
use crate::domain::{Availability, Item, ModerationStatus, SwapRequest};
use crate::ports::preferences::PreferenceStore;

/// Filters for the public catalog. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
  /// Case-insensitive match against title, description and tags.
  pub search: Option<String>,
  pub category: Option<String>,
  pub condition: Option<String>,
  pub size: Option<String>,
}

impl CatalogQuery {
  pub fn search(text: impl Into<String>) -> Self {
    Self {
      search: Some(text.into()),
      ..Self::default()
    }
  }

  fn matches(&self, item: &Item) -> bool {
    let search_hit = self.search.as_deref().is_none_or(|text| {
      let needle = text.to_lowercase();
      contains_ci(&item.title, &needle)
        || contains_ci(&item.description, &needle)
        || item.tags.iter().any(|tag| contains_ci(tag, &needle))
    });

    search_hit
      && field_matches(self.category.as_deref(), &item.category)
      && field_matches(self.condition.as_deref(), &item.condition)
      && field_matches(self.size.as_deref(), &item.size)
  }
}

/// Filters for the admin moderation view. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct ModerationQuery {
  /// Case-insensitive match against title, description and uploader name.
  pub search: Option<String>,
  pub status: Option<ModerationStatus>,
}

impl ModerationQuery {
  fn matches(&self, item: &Item) -> bool {
    let search_hit = self.search.as_deref().is_none_or(|text| {
      let needle = text.to_lowercase();
      contains_ci(&item.title, &needle)
        || contains_ci(&item.description, &needle)
        || contains_ci(&item.uploader_name, &needle)
    });

    search_hit && self.status.is_none_or(|status| item.status == status)
  }
}

/// Moderation totals across the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModerationCounts {
  pub pending: usize,
  pub approved: usize,
  pub rejected: usize,
}

/// Availability totals for one member's listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
  pub total: usize,
  pub available: usize,
  pub reserved: usize,
  pub swapped: usize,
}

/// Which exchange actions the signed-in user may take on an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Eligibility {
  /// The signed-in user listed this item.
  pub is_owner: bool,
  pub can_request_swap: bool,
  pub can_redeem: bool,
  /// Points missing to redeem an available item the user does not own.
  /// Reported regardless of moderation status.
  pub points_shortfall: Option<u32>,
}

impl<P: PreferenceStore> MarketplaceStore<P> {
  /// Approved items matching `query`, available first, then reserved,
  /// then swapped. Catalog order is kept within each group.
  pub fn browse(&self, query: &CatalogQuery) -> Vec<&Item> {
    let mut hits: Vec<&Item> = self
      .items
      .iter()
      .filter(|item| item.is_approved() && query.matches(item))
      .collect();
    hits.sort_by_key(|item| item.availability.rank());
    hits
  }

  /// The first `limit` approved items in catalog order.
  pub fn featured(&self, limit: usize) -> Vec<&Item> {
    self
      .items
      .iter()
      .filter(|item| item.is_approved())
      .take(limit)
      .collect()
  }

  /// All items matching the moderation filters, in catalog order.
  pub fn moderation_queue(&self, query: &ModerationQuery) -> Vec<&Item> {
    self.items.iter().filter(|item| query.matches(item)).collect()
  }

  pub fn moderation_counts(&self) -> ModerationCounts {
    self
      .items
      .iter()
      .fold(ModerationCounts::default(), |mut counts, item| {
        match item.status {
          ModerationStatus::Pending => counts.pending += 1,
          ModerationStatus::Approved => counts.approved += 1,
          ModerationStatus::Rejected => counts.rejected += 1,
          ModerationStatus::Swapped => {}
        }
        counts
      })
  }

  /// Listings owned by `user_id`.
  pub fn listings_of(&self, user_id: &str) -> Vec<&Item> {
    self
      .items
      .iter()
      .filter(|item| item.is_owned_by(user_id))
      .collect()
  }

  /// Swap requests made by `user_id`.
  pub fn swap_requests_of(&self, user_id: &str) -> Vec<&SwapRequest> {
    self
      .swap_requests
      .iter()
      .filter(|request| request.requester_id == user_id)
      .collect()
  }

  pub fn listing_summary(&self, user_id: &str) -> ListingSummary {
    self
      .listings_of(user_id)
      .into_iter()
      .fold(ListingSummary::default(), |mut summary, item| {
        summary.total += 1;
        match item.availability {
          Availability::Available => summary.available += 1,
          Availability::Reserved => summary.reserved += 1,
          Availability::Swapped => summary.swapped += 1,
        }
        summary
      })
  }

  /// Actions open to the signed-in user on `item_id`.
  ///
  /// `None` for unknown items. Swap and redemption both require a
  /// signed-in non-owner and an approved, available item; redemption
  /// also requires enough points. The shortfall ignores approval.
  pub fn eligibility(&self, item_id: &str) -> Option<Eligibility> {
    let item = self.item(item_id)?;

    let Some(user) = self.current_user.as_ref() else {
      return Some(Eligibility::default());
    };

    let is_owner = item.is_owned_by(&user.id);
    let open = !is_owner && item.is_available();
    let can_request_swap = open && item.is_approved();
    let points_shortfall = if open {
      user.shortfall(item.point_value)
    } else {
      None
    };

    Some(Eligibility {
      is_owner,
      can_request_swap,
      can_redeem: can_request_swap && points_shortfall.is_none(),
      points_shortfall,
    })
  }
}

/// `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(needle)
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
  wanted.is_none_or(|w| w == actual)
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::adapters::preferences::InMemoryPreferenceStore;
  use crate::adapters::seed::builtin_seed;
  use crate::config::AppConfig;
  use crate::domain::Theme;

  fn store() -> MarketplaceStore<InMemoryPreferenceStore> {
    MarketplaceStore::new(
      builtin_seed().unwrap(),
      Arc::new(InMemoryPreferenceStore::new()),
      &AppConfig::default(),
      Theme::Light,
    )
  }

  fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
  }

  #[test]
  fn test_browse_hides_unapproved() {
    let store = store();
    assert_eq!(ids(&store.browse(&CatalogQuery::default())), vec!["1", "2"]);
  }

  #[test]
  fn test_browse_search_is_case_insensitive_over_tags() {
    let store = store();
    assert_eq!(ids(&store.browse(&CatalogQuery::search("DENIM"))), vec!["1"]);
    assert_eq!(ids(&store.browse(&CatalogQuery::search("formal"))), vec!["2"]);
    // Pending sweater matches but stays hidden
    assert!(store.browse(&CatalogQuery::search("wool")).is_empty());
  }

  #[test]
  fn test_browse_exact_filters() {
    let store = store();
    let query = CatalogQuery {
      category: Some("Tops".to_string()),
      size: Some("S".to_string()),
      ..CatalogQuery::default()
    };
    assert_eq!(ids(&store.browse(&query)), vec!["2"]);

    let query = CatalogQuery {
      condition: Some("Mint".to_string()),
      ..CatalogQuery::default()
    };
    assert!(store.browse(&query).is_empty());
  }

  #[tokio::test]
  async fn test_browse_orders_by_availability() {
    let mut store = store();
    store.approve_item("3");
    assert!(store.login("admin@rewear.com", "pw").await);
    store.request_swap("1");

    assert_eq!(ids(&store.browse(&CatalogQuery::default())), vec!["2", "3", "1"]);
  }

  #[test]
  fn test_featured_limit() {
    let store = store();
    assert_eq!(ids(&store.featured(1)), vec!["1"]);
    assert_eq!(store.featured(6).len(), 2);
  }

  #[test]
  fn test_moderation_queue_and_counts() {
    let mut store = store();
    store.reject_item("2");

    let pending = store.moderation_queue(&ModerationQuery {
      status: Some(ModerationStatus::Pending),
      ..ModerationQuery::default()
    });
    assert_eq!(ids(&pending), vec!["3"]);

    let by_uploader = store.moderation_queue(&ModerationQuery {
      search: Some("sarah".to_string()),
      ..ModerationQuery::default()
    });
    assert_eq!(by_uploader.len(), 3);

    assert_eq!(
      store.moderation_counts(),
      ModerationCounts {
        pending: 1,
        approved: 1,
        rejected: 1,
      }
    );
  }

  #[tokio::test]
  async fn test_dashboard_views() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);
    store.request_swap("1");
    store.approve_item("3");

    assert!(store.login("sarah@example.com", "pw").await);
    assert!(store.redeem_with_points("3"));

    assert_eq!(
      store.listing_summary("1"),
      ListingSummary {
        total: 3,
        available: 1,
        reserved: 1,
        swapped: 1,
      }
    );
    assert_eq!(store.swap_requests_of("2").len(), 1);
    assert!(store.swap_requests_of("1").is_empty());
    assert!(store.listings_of("2").is_empty());
  }

  #[tokio::test]
  async fn test_eligibility() {
    let mut store = store();
    assert_eq!(store.eligibility("1"), Some(Eligibility::default()));
    assert_eq!(store.eligibility("nope"), None);

    // Owner gets nothing
    assert!(store.login("sarah@example.com", "pw").await);
    let own = store.eligibility("1").unwrap();
    assert!(own.is_owner);
    assert!(!own.can_request_swap);
    assert_eq!(own.points_shortfall, None);

    // Broke non-owner can swap but not redeem
    assert!(store.login("admin@rewear.com", "pw").await);
    let broke = store.eligibility("1").unwrap();
    assert!(broke.can_request_swap);
    assert!(!broke.can_redeem);
    assert_eq!(broke.points_shortfall, Some(45));

    // Pending items are not offered
    let pending = store.eligibility("3").unwrap();
    assert!(!pending.can_request_swap);
    assert!(!pending.can_redeem);
    // Shortfall is shown even before approval
    assert_eq!(pending.points_shortfall, Some(40));

    // Funded non-owner can do both
    assert!(store.signup("Cy", "cy@x.com", "pw").await);
    let funded = store.eligibility("2").unwrap();
    assert!(funded.can_request_swap);
    assert!(funded.can_redeem);
    assert_eq!(funded.points_shortfall, None);
  }
}
