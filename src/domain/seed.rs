//! Initial marketplace contents.

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::swap::SwapRequest;
use super::user::User;

/// Everything the store starts from: the user directory consulted at
/// login, the catalog and the swap-request log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSeed {
    pub users: Vec<User>,
    pub items: Vec<Item>,
    #[serde(default)]
    pub swap_requests: Vec<SwapRequest>,
}

impl MarketSeed {
    /// Seed with a catalog and no users or requests.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}
