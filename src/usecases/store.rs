//! Marketplace Store - Authoritative In-Memory State
//!
//! Owns the user directory, the signed-in user, the item catalog, the
//! swap-request log and the theme flag. The sanctioned mutations live in
//! the sibling modules as further `impl` blocks:
//! - `session`: login, signup, logout
//! - `listings`: listing submission and moderation
//! - `exchange`: swap requests and point redemptions
//! - `catalog`: read-only queries
//!
//! Every mutation takes `&mut self` and either applies completely or
//! leaves the state untouched. Only the theme touches the preference
//! store, once when opening and once per toggle.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::domain::{Item, MarketSeed, SwapRequest, Theme, User};
use crate::ports::preferences::PreferenceStore;

/// The marketplace state container.
pub struct MarketplaceStore<P: PreferenceStore> {
  /// Durable client storage for the theme flag.
  prefs: Arc<P>,
  /// Known accounts consulted at login. Never mutated.
  pub(super) directory: Vec<User>,
  /// Session copy of the signed-in user.
  pub(super) current_user: Option<User>,
  /// Catalog in insertion order.
  pub(super) items: Vec<Item>,
  /// Append-only swap-request log.
  pub(super) swap_requests: Vec<SwapRequest>,
  theme: Theme,
  theme_key: String,
  /// Points granted on signup.
  pub(super) signup_bonus: u32,
  /// Point value for drafts that leave it unset.
  pub(super) default_point_value: u32,
  /// Account allowed into moderation views.
  admin_email: String,
}

impl<P: PreferenceStore> MarketplaceStore<P> {
  /// Create a store with an explicit theme.
  pub fn new(seed: MarketSeed, prefs: Arc<P>, config: &AppConfig, theme: Theme) -> Self {
    Self {
      prefs,
      directory: seed.users,
      current_user: None,
      items: seed.items,
      swap_requests: seed.swap_requests,
      theme,
      theme_key: config.preferences.theme_key.clone(),
      signup_bonus: config.marketplace.signup_bonus,
      default_point_value: config.marketplace.default_point_value,
      admin_email: config.marketplace.admin_email.clone(),
    }
  }

  /// Create a store, restoring the theme from the preference store.
  ///
  /// A missing, unreadable or unrecognized stored value falls back to
  /// the configured default theme.
  #[instrument(skip_all)]
  pub async fn open(seed: MarketSeed, prefs: Arc<P>, config: &AppConfig) -> Self {
    let theme = restore_theme(
      prefs.as_ref(),
      &config.preferences.theme_key,
      config.preferences.default_theme,
    )
    .await;

    info!(
      users = seed.users.len(),
      items = seed.items.len(),
      swap_requests = seed.swap_requests.len(),
      theme = %theme,
      "Marketplace store opened"
    );

    Self::new(seed, prefs, config, theme)
  }

  /// Current theme.
  pub const fn theme(&self) -> Theme {
    self.theme
  }

  /// Flip the theme and persist the new value.
  ///
  /// The in-memory flip always applies; a storage failure is logged and
  /// the previous stored value stays behind.
  #[instrument(skip(self))]
  pub async fn toggle_theme(&mut self) -> Theme {
    self.theme = self.theme.toggled();

    if let Err(e) = self.prefs.set(&self.theme_key, self.theme.as_str()).await {
      warn!(
        error = %e,
        theme = %self.theme,
        "Failed to persist theme preference"
      );
    } else {
      info!(theme = %self.theme, "Theme toggled");
    }

    self.theme
  }

  /// Signed-in user, if any.
  pub const fn current_user(&self) -> Option<&User> {
    self.current_user.as_ref()
  }

  /// Whether the signed-in user is the configured admin account.
  ///
  /// Moderation operations do not consult this; it gates what a
  /// presentation layer offers.
  pub fn is_admin(&self) -> bool {
    self
      .current_user
      .as_ref()
      .is_some_and(|u| u.email == self.admin_email)
  }

  /// Whole catalog in insertion order.
  pub fn items(&self) -> &[Item] {
    &self.items
  }

  /// Look up one item.
  pub fn item(&self, item_id: &str) -> Option<&Item> {
    self.items.iter().find(|i| i.id == item_id)
  }

  /// Swap-request log in creation order.
  pub fn swap_requests(&self) -> &[SwapRequest] {
    &self.swap_requests
  }

  /// Known accounts.
  pub fn users(&self) -> &[User] {
    &self.directory
  }

  pub(super) fn item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
    self.items.iter_mut().find(|i| i.id == item_id)
  }
}

/// Read the stored theme, falling back to `default` on any problem.
async fn restore_theme<P: PreferenceStore>(prefs: &P, key: &str, default: Theme) -> Theme {
  match prefs.get(key).await {
    Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
      warn!(error = %e, fallback = %default, "Ignoring stored theme");
      default
    }),
    Ok(None) => default,
    Err(e) => {
      warn!(error = %e, fallback = %default, "Failed to read theme preference");
      default
    }
  }
}
