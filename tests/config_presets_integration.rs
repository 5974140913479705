//! Integration tests for loading configuration from disk.

use std::fs;

use energy_nexus::config::AppConfig;
use energy_nexus::session::UserType;

#[test]
fn loads_toml_file_from_disk() {
    let dir = std::env::temp_dir().join(format!("energy-nexus-cfg-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "[session]\nuser_type = \"prosumer\"\npostal_code = \"302001\"\n\n[series]\nseed = 5\n",
    )
    .expect("write config");

    let cfg = AppConfig::from_toml_file(&path).expect("config loads");
    assert_eq!(cfg.session.user_type, UserType::Prosumer);
    assert_eq!(cfg.session.postal_code, "302001");
    assert_eq!(cfg.series.seed, Some(5));
    assert!(cfg.validate().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_reports_path() {
    let err = AppConfig::from_toml_file(std::path::Path::new("/no/such/energy-nexus.toml"));
    let err = err.expect_err("missing file must fail");
    assert_eq!(err.field, "config");
    assert!(err.message.contains("/no/such/energy-nexus.toml"));
}

#[test]
fn presets_differ_where_expected() {
    let demo = AppConfig::demo();
    assert_eq!(AppConfig::seeded().series.seed, Some(42));
    assert_eq!(demo.series.seed, None);
    assert_eq!(AppConfig::sunny().session.postal_code, "400001");
    assert_eq!(demo.market.green_price_per_kwh, 4.25);
}
