//! Property-Based Tests - Store and Domain Invariants
//!
//! Uses `proptest` to verify that the points ledger, the availability
//! lifecycle and authentication hold their invariants across random
//! inputs. Async store calls are driven with `tokio_test::block_on`.

use std::sync::Arc;

use proptest::prelude::*;

use rewear_market::adapters::preferences::InMemoryPreferenceStore;
use rewear_market::config::AppConfig;
use rewear_market::domain::{
    Availability, Item, ListingDraft, MarketSeed, ModerationStatus, NewItem, Theme, User,
};
use rewear_market::usecases::MarketplaceStore;

type Store = MarketplaceStore<InMemoryPreferenceStore>;

const BUYER: &str = "buyer@x.com";

fn availability() -> impl Strategy<Value = Availability> {
    prop_oneof![
        Just(Availability::Available),
        Just(Availability::Reserved),
        Just(Availability::Swapped),
    ]
}

/// One buyer with `balance` points and one item owned by someone else.
fn store_with(balance: u32, point_value: u32, availability: Availability) -> Store {
    let owner = User::new_member("Owner", "owner@x.com", 0);
    let mut buyer = User::new_member("Buyer", BUYER, balance);
    buyer.id = "buyer".to_string();

    let mut item = Item::list(
        NewItem {
            title: "Scarf".to_string(),
            point_value,
            ..NewItem::default()
        },
        &owner,
    );
    item.id = "item".to_string();
    item.status = ModerationStatus::Approved;
    item.availability = availability;

    let seed = MarketSeed {
        users: vec![owner, buyer],
        ..MarketSeed::with_items(vec![item])
    };

    let mut store = MarketplaceStore::new(
        seed,
        Arc::new(InMemoryPreferenceStore::new()),
        &AppConfig::default(),
        Theme::Light,
    );
    assert!(tokio_test::block_on(store.login(BUYER, "pw")));
    store
}

// ── Points Ledger Properties ────────────────────────────────

proptest! {
    /// Redemption succeeds iff the balance covers the price, and then
    /// deducts exactly the price.
    #[test]
    fn redemption_deducts_exactly_or_not_at_all(
        balance in 0u32..500,
        price in 0u32..500,
    ) {
        let mut store = store_with(balance, price, Availability::Available);
        let ok = store.redeem_with_points("item");

        prop_assert_eq!(ok, balance >= price);
        let after = store.current_user().unwrap().points;
        if ok {
            prop_assert_eq!(after, balance - price);
            prop_assert_eq!(store.item("item").unwrap().availability, Availability::Swapped);
        } else {
            prop_assert_eq!(after, balance);
            prop_assert_eq!(store.item("item").unwrap().availability, Availability::Available);
        }
    }

    /// A second redemption of the same item never changes anything.
    #[test]
    fn second_redemption_is_noop(
        balance in 100u32..1000,
        price in 0u32..100,
    ) {
        let mut store = store_with(balance, price, Availability::Available);
        prop_assert!(store.redeem_with_points("item"));
        let after_first = store.current_user().unwrap().points;

        prop_assert!(!store.redeem_with_points("item"));
        prop_assert_eq!(store.current_user().unwrap().points, after_first);
    }
}

// ── Availability Lifecycle Properties ───────────────────────

proptest! {
    /// Swap requests on anything but an available item leave no trace.
    #[test]
    fn swap_on_unavailable_item_is_noop(state in availability()) {
        prop_assume!(state != Availability::Available);

        let mut store = store_with(100, 10, state);
        store.request_swap("item");

        prop_assert!(store.swap_requests().is_empty());
        prop_assert_eq!(store.item("item").unwrap().availability, state);
    }

    /// Any sequence of swap/redeem attempts creates at most one request
    /// and the item never returns to available once it leaves.
    #[test]
    fn availability_only_moves_forward(ops in prop::collection::vec(any::<bool>(), 1..10)) {
        let mut store = store_with(1000, 10, Availability::Available);
        let mut left = false;

        for swap in ops {
            if swap {
                store.request_swap("item");
            } else {
                store.redeem_with_points("item");
            }
            let now = store.item("item").unwrap().availability;
            if left {
                prop_assert_ne!(now, Availability::Available);
            }
            left = now != Availability::Available;
        }

        prop_assert!(store.swap_requests().len() <= 1);
    }

    /// Listings from any valid draft start pending and available.
    #[test]
    fn new_listings_start_pending_and_available(
        title in "[A-Za-z][A-Za-z ]{0,30}",
        points in 0u32..200,
    ) {
        let mut store = store_with(0, 10, Availability::Available);
        let id = store
            .submit_listing(ListingDraft {
                title,
                images: vec!["https://img.example/a.jpg".to_string()],
                point_value: points,
                ..ListingDraft::default()
            })
            .unwrap()
            .unwrap();

        let item = store.item(&id).unwrap();
        prop_assert_eq!(item.status, ModerationStatus::Pending);
        prop_assert_eq!(item.availability, Availability::Available);
        prop_assert_eq!(item.point_value, if points == 0 { 30 } else { points });
    }
}

// ── Authentication Properties ───────────────────────────────

proptest! {
    /// Login succeeds iff the email is known and the password non-empty.
    #[test]
    fn login_iff_known_email_and_nonempty_password(
        known in any::<bool>(),
        password in "[ -~]{0,12}",
    ) {
        let mut store = store_with(0, 10, Availability::Available);
        store.logout();

        let email = if known { BUYER } else { "stranger@x.com" };
        let ok = tokio_test::block_on(store.login(email, &password));

        prop_assert_eq!(ok, known && !password.is_empty());
        prop_assert_eq!(store.current_user().is_some(), ok);
    }
}
