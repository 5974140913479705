//! Integration tests for location lookup, listings, and the order flow.

mod common;

use energy_nexus::config::MarketConfig;
use energy_nexus::location::{known_postal_codes, resolve};
use energy_nexus::market::metrics::savings;
use energy_nexus::market::{purchase_listing, quote_order, synthesize_listings};

#[test]
fn delhi_and_unknown_records() {
    let delhi = resolve("110001");
    assert_eq!(
        (delhi.city.as_str(), delhi.grid_price, delhi.carbon_intensity),
        ("Delhi", 7.2, 0.85)
    );
    let unknown = resolve("999999");
    assert_eq!(
        (unknown.city.as_str(), unknown.grid_price, unknown.carbon_intensity),
        ("Unknown", 7.0, 0.75)
    );
}

#[test]
fn listings_ladder_holds_for_every_location() {
    let mut rng = common::rng();
    for code in known_postal_codes().chain(["000000", ""]) {
        let location = resolve(code);
        let listings = synthesize_listings(&location, &mut rng);
        assert_eq!(listings.len(), 5);
        for pair in listings.windows(2) {
            assert!(pair[1].price_per_kwh < pair[0].price_per_kwh);
            assert!(pair[1].amount_kwh > pair[0].amount_kwh);
        }
        assert_eq!(listings[2].amount_kwh, 30);
        assert_eq!(listings[2].price_per_kwh, 3.95);
        assert_eq!(listings[2].total_price, 118.5);
        assert!(listings[0].seller.starts_with(&location.city));
        assert!(listings.iter().all(|l| l.price_per_kwh > 0.0 && l.amount_kwh > 0));
    }
}

#[test]
fn buying_ten_kwh_against_delhi_grid() {
    let cfg = MarketConfig::default();
    let delhi = resolve("110001");
    assert_eq!(savings(&delhi, 10.0, &cfg), 29.5);
    let quote = quote_order(10, &delhi, &cfg).expect("in range");
    assert_eq!(quote.savings_vs_grid, 29.5);
    assert!(quote.confirmation().contains("29.50"));
}

#[test]
fn purchase_message_names_seller() {
    let listings = synthesize_listings(&resolve("400001"), &mut common::rng());
    assert_eq!(
        purchase_listing(&listings[0]),
        "Purchase initiated for 20 kWh from Mumbai Solar Co-op!"
    );
}
