//! Exchange Use Case - Swap Requests and Point Redemptions
//!
//! Both operations consume an available item:
//! - a swap request reserves it and appends a pending `SwapRequest`
//! - a redemption spends the redeemer's points and marks it swapped
//!
//! A second attempt on an item that already left `Available` is a no-op.
//! Approval is not checked here; `eligibility` is the gate a presentation
//! layer consults before offering either action.
//!
//! Owner credit on redemption is recorded in the log only. The owner is
//! usually not the signed-in user and only the session copy of the
//! signed-in user is ever mutated.

use thiserror::Error;
use tracing::{debug, info, instrument};

use super::store::MarketplaceStore;
use crate::domain::{Availability, ItemId, SwapRequest, SwapRequestId};
use crate::ports::preferences::PreferenceStore;

/// Why a swap request or redemption made no change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
  #[error("no signed-in user")]
  NotSignedIn,
  #[error("item {0} not found")]
  ItemNotFound(ItemId),
  #[error("item {item_id} is {availability}")]
  Unavailable {
    item_id: ItemId,
    availability: Availability,
  },
  #[error("redemption needs {required} points, balance is {balance}")]
  InsufficientPoints { required: u32, balance: u32 },
}

impl ExchangeError {
  /// Points missing for an unaffordable redemption.
  pub const fn shortfall(&self) -> Option<u32> {
    match self {
      Self::InsufficientPoints { required, balance } => Some(required.saturating_sub(*balance)),
      _ => None,
    }
  }
}

/// Outcome of a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
  pub item_id: ItemId,
  /// Points deducted from the redeemer.
  pub points_spent: u32,
  /// Redeemer balance after the deduction.
  pub remaining_balance: u32,
  /// The item belongs to someone else, whose credit is not applied.
  pub owner_credit_pending: bool,
}

impl<P: PreferenceStore> MarketplaceStore<P> {
  /// Request a swap for an item, reserving it.
  ///
  /// # Errors
  /// No change is made and the reason is returned when nobody is signed
  /// in, the item is unknown, or it is no longer available.
  #[instrument(skip(self))]
  pub fn try_request_swap(&mut self, item_id: &str) -> Result<SwapRequestId, ExchangeError> {
    let requester = self
      .current_user
      .as_ref()
      .ok_or(ExchangeError::NotSignedIn)?;

    let item = self
      .items
      .iter_mut()
      .find(|i| i.id == item_id)
      .ok_or_else(|| ExchangeError::ItemNotFound(item_id.to_string()))?;

    if !item.is_available() {
      return Err(ExchangeError::Unavailable {
        item_id: item.id.clone(),
        availability: item.availability,
      });
    }

    let request = SwapRequest::open(requester, item);
    item.availability = Availability::Reserved;

    info!(
      request_id = %request.id,
      requester = %request.requester_id,
      owner = %item.uploader_id,
      "Swap requested, item reserved"
    );

    let id = request.id.clone();
    self.swap_requests.push(request);
    Ok(id)
  }

  /// Request a swap for an item; silently ignored when not possible.
  pub fn request_swap(&mut self, item_id: &str) {
    if let Err(e) = self.try_request_swap(item_id) {
      debug!(item_id, reason = %e, "Swap request ignored");
    }
  }

  /// Redeem an item with the signed-in user's points.
  ///
  /// # Errors
  /// No change is made and the reason is returned when nobody is signed
  /// in, the item is unknown or no longer available, or the balance does
  /// not cover the item's point value.
  #[instrument(skip(self))]
  pub fn try_redeem(&mut self, item_id: &str) -> Result<Redemption, ExchangeError> {
    let redeemer = self
      .current_user
      .as_mut()
      .ok_or(ExchangeError::NotSignedIn)?;

    let item = self
      .items
      .iter_mut()
      .find(|i| i.id == item_id)
      .ok_or_else(|| ExchangeError::ItemNotFound(item_id.to_string()))?;

    if !item.is_available() {
      return Err(ExchangeError::Unavailable {
        item_id: item.id.clone(),
        availability: item.availability,
      });
    }

    if !redeemer.can_afford(item.point_value) {
      return Err(ExchangeError::InsufficientPoints {
        required: item.point_value,
        balance: redeemer.points,
      });
    }

    redeemer.points -= item.point_value;
    item.availability = Availability::Swapped;

    let owner_credit_pending = !item.is_owned_by(&redeemer.id);
    if owner_credit_pending {
      info!(
        owner = %item.uploader_id,
        owner_name = %item.uploader_name,
        points = item.point_value,
        "Owner credit recorded, not applied"
      );
    }

    info!(
      redeemer = %redeemer.id,
      spent = item.point_value,
      balance = redeemer.points,
      "Item redeemed with points"
    );

    Ok(Redemption {
      item_id: item.id.clone(),
      points_spent: item.point_value,
      remaining_balance: redeemer.points,
      owner_credit_pending,
    })
  }

  /// Redeem an item with points. Returns `false` with no change when the
  /// redemption is not possible.
  pub fn redeem_with_points(&mut self, item_id: &str) -> bool {
    match self.try_redeem(item_id) {
      Ok(_) => true,
      Err(e) => {
        debug!(item_id, reason = %e, "Redemption refused");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::adapters::preferences::InMemoryPreferenceStore;
  use crate::adapters::seed::builtin_seed;
  use crate::config::AppConfig;
  use crate::domain::{SwapStatus, Theme};

  fn store() -> MarketplaceStore<InMemoryPreferenceStore> {
    MarketplaceStore::new(
      builtin_seed().unwrap(),
      Arc::new(InMemoryPreferenceStore::new()),
      &AppConfig::default(),
      Theme::Light,
    )
  }

  #[tokio::test]
  async fn test_request_swap_reserves_item() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);

    let id = store.try_request_swap("1").unwrap();
    let request = &store.swap_requests()[0];
    assert_eq!(request.id, id);
    assert_eq!(request.status, SwapStatus::Pending);
    assert_eq!(request.requester_id, "2");
    assert_eq!(request.requester_name, "Admin User");
    assert_eq!(request.item_title, "Vintage Denim Jacket");
    assert_eq!(store.item("1").unwrap().availability, Availability::Reserved);
  }

  #[tokio::test]
  async fn test_second_swap_request_is_noop() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);
    store.request_swap("1");
    store.request_swap("1");
    assert_eq!(store.swap_requests().len(), 1);

    let err = store.try_request_swap("1").unwrap_err();
    assert_eq!(
      err,
      ExchangeError::Unavailable {
        item_id: "1".to_string(),
        availability: Availability::Reserved,
      }
    );
  }

  #[test]
  fn test_swap_requires_user() {
    let mut store = store();
    assert_eq!(store.try_request_swap("1"), Err(ExchangeError::NotSignedIn));
    assert_eq!(store.item("1").unwrap().availability, Availability::Available);
  }

  #[tokio::test]
  async fn test_owner_may_request_own_item() {
    let mut store = store();
    assert!(store.login("sarah@example.com", "pw").await);
    assert!(store.try_request_swap("2").is_ok());
  }

  #[tokio::test]
  async fn test_swap_on_pending_item_is_not_blocked() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);
    assert!(store.try_request_swap("3").is_ok());
  }

  #[tokio::test]
  async fn test_unknown_item() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);
    assert_eq!(
      store.try_request_swap("42"),
      Err(ExchangeError::ItemNotFound("42".to_string()))
    );
    assert!(!store.redeem_with_points("42"));
  }

  #[tokio::test]
  async fn test_redeem_deducts_exact_points() {
    let mut store = store();
    assert!(store.signup("Bea", "bea@x.com", "pw").await);

    let redemption = store.try_redeem("2").unwrap();
    assert_eq!(redemption.points_spent, 35);
    assert_eq!(redemption.remaining_balance, 15);
    assert!(redemption.owner_credit_pending);
    assert_eq!(store.current_user().unwrap().points, 15);
    assert_eq!(store.item("2").unwrap().availability, Availability::Swapped);

    // Owner credit is logged only; Sarah's record keeps its balance
    let owner = store.users().iter().find(|u| u.id == "1").unwrap();
    assert_eq!(owner.points, 150);
  }

  #[tokio::test]
  async fn test_redeem_insufficient_points_changes_nothing() {
    let mut store = store();
    assert!(store.login("admin@rewear.com", "pw").await);

    let err = store.try_redeem("1").unwrap_err();
    assert_eq!(err.shortfall(), Some(45));
    assert_eq!(store.current_user().unwrap().points, 0);
    assert_eq!(store.item("1").unwrap().availability, Availability::Available);
  }

  #[tokio::test]
  async fn test_redeem_own_item_has_no_owner_credit() {
    let mut store = store();
    assert!(store.login("sarah@example.com", "pw").await);
    let redemption = store.try_redeem("1").unwrap();
    assert!(!redemption.owner_credit_pending);
  }

  #[tokio::test]
  async fn test_redeem_reserved_item_refused() {
    let mut store = store();
    assert!(store.login("sarah@example.com", "pw").await);
    store.request_swap("1");
    assert!(!store.redeem_with_points("1"));
    assert_eq!(store.current_user().unwrap().points, 150);
  }

  #[tokio::test]
  async fn test_points_are_session_only() {
    let mut store = store();
    assert!(store.login("sarah@example.com", "pw").await);
    assert!(store.redeem_with_points("2"));
    assert_eq!(store.current_user().unwrap().points, 115);

    store.logout();
    assert!(store.login("sarah@example.com", "pw").await);
    assert_eq!(store.current_user().unwrap().points, 150);
  }

  #[test]
  fn test_shortfall_only_for_insufficient_points() {
    assert_eq!(ExchangeError::NotSignedIn.shortfall(), None);
    assert_eq!(
      ExchangeError::InsufficientPoints {
        required: 45,
        balance: 10
      }
      .shortfall(),
      Some(35)
    );
  }
}
