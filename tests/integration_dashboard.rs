//! Integration tests for dashboard rendering across sessions and presets.

mod common;

use energy_nexus::config::AppConfig;
use energy_nexus::dashboard::{DashboardView, export_series, render};
use energy_nexus::io::export::write_csv;
use energy_nexus::session::{Session, UserType};

#[test]
fn every_preset_renders_both_views() {
    for name in AppConfig::PRESETS {
        let cfg = AppConfig::from_preset(name).expect("preset");
        let base = Session::from_config(&cfg.session);
        for user_type in [UserType::Consumer, UserType::Prosumer] {
            let session = base.clone().with_user_type(user_type);
            let view = render(&session, &cfg, common::at(13, 0), &mut common::rng());
            match (user_type, view) {
                (UserType::Consumer, Ok(DashboardView::Consumer(v))) => {
                    assert_eq!(v.listings.len(), 5);
                }
                (UserType::Prosumer, Ok(DashboardView::Prosumer(v))) => {
                    assert_eq!(v.hourly.len(), cfg.series.hours);
                }
                (t, other) => panic!("preset {name}, {t}: unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn session_transitions_drive_the_view() {
    let cfg = AppConfig::demo();
    let session = Session::default();

    let out = session.clone().logout();
    let view = render(&out, &cfg, common::at(13, 0), &mut common::rng());
    assert!(matches!(view, Ok(DashboardView::Landing(_))));

    let back = out.login().with_postal_code("560001");
    match render(&back, &cfg, common::at(13, 0), &mut common::rng()) {
        Ok(DashboardView::Consumer(v)) => {
            assert_eq!(v.location.city, "Bangalore");
            assert_eq!(v.grid_price_per_kwh, 6.5);
            assert_eq!(v.savings_per_kwh, 2.25);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn night_time_prosumer_has_no_generation() {
    let cfg = AppConfig::demo();
    let session = Session::default().with_user_type(UserType::Prosumer);
    match render(&session, &cfg, common::at(2, 0), &mut common::rng()) {
        Ok(DashboardView::Prosumer(v)) => {
            assert_eq!(v.latest.generation_kwh, 0.0);
            assert_eq!(v.earnings, 0.0);
            assert_eq!(v.carbon_offset_kg, 0.0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn csv_export_matches_printed_analytics() {
    let mut cfg = AppConfig::seeded();
    cfg.series.hours = 3;
    let session = Session::from_config(&cfg.session).with_user_type(UserType::Prosumer);
    let now = common::at(16, 57);
    let mut rng = common::rng();

    let view = match render(&session, &cfg, now, &mut rng) {
        Ok(view) => view,
        Err(e) => panic!("render failed: {e}"),
    };
    let samples = export_series(&view, &cfg, now, &mut rng).expect("series");
    let mut buf = Vec::new();
    write_csv(&samples, &mut buf).expect("csv");
    let csv = String::from_utf8(buf).expect("utf8");

    let hourly = view.hourly().unwrap_or_default();
    assert_eq!(hourly.len(), 3);
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), hourly.len());
    for (row, s) in rows.iter().zip(hourly) {
        let expected = format!(
            "{},{:.2},{:.2},{:.2},{:.2}",
            s.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            s.generation_kwh,
            s.consumption_kwh,
            s.surplus_kwh,
            s.price_per_kwh,
        );
        assert_eq!(*row, expected);
    }
}
