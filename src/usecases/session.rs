//! Session Use Case - Login, Signup, Logout
//!
//! Authentication is a directory lookup by exact email; the password is
//! only required to be non-empty. The signed-in user is a copy of the
//! directory record, so point changes never reach the directory and a
//! signup never adds to it.
//!
//! `login` and `signup` are async for call-site compatibility with
//! deferred-completion callers; neither suspends.

use tracing::{debug, info, instrument};

use super::store::MarketplaceStore;
use crate::domain::User;
use crate::ports::preferences::PreferenceStore;

impl<P: PreferenceStore> MarketplaceStore<P> {
  /// Sign in as the directory user whose email matches exactly.
  ///
  /// Returns `false` with no state change when the email is unknown or
  /// the password is empty.
  #[instrument(skip(self, password))]
  pub async fn login(&mut self, email: &str, password: &str) -> bool {
    if password.is_empty() {
      debug!("Login refused: empty password");
      return false;
    }

    let Some(found) = self.directory.iter().find(|u| u.email == email) else {
      debug!("Login refused: unknown email");
      return false;
    };

    info!(user_id = %found.id, "User signed in");
    self.current_user = Some(found.clone());
    true
  }

  /// Create a new member and sign in as them.
  ///
  /// All three fields must be non-empty. Emails are not checked for
  /// uniqueness; every successful call creates a distinct user.
  #[instrument(skip(self, password))]
  pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
    if name.is_empty() || email.is_empty() || password.is_empty() {
      debug!("Signup refused: missing field");
      return false;
    }

    let user = User::new_member(name, email, self.signup_bonus);
    info!(
      user_id = %user.id,
      points = user.points,
      "New member signed up"
    );
    self.current_user = Some(user);
    true
  }

  /// Clear the signed-in user.
  #[instrument(skip(self))]
  pub fn logout(&mut self) {
    if let Some(user) = self.current_user.take() {
      info!(user_id = %user.id, "User signed out");
    }
  }
}
