// Host-side tests for field configuration parsing.

use savoir_core::constants::MAX_MINIMUM_BEAMS;
use savoir_core::{ConfigError, FieldConfig, Intensity, RecyclePolicy};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn intensity_multipliers() {
    assert_eq!(Intensity::Subtle.multiplier(), 0.7);
    assert_eq!(Intensity::Medium.multiplier(), 0.85);
    assert_eq!(Intensity::Strong.multiplier(), 1.0);
    assert_eq!(Intensity::default(), Intensity::Strong);
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("Subtle".parse::<Intensity>(), Ok(Intensity::Subtle));
    assert_eq!(" MEDIUM ".parse::<Intensity>(), Ok(Intensity::Medium));
    assert_eq!("respawn".parse::<RecyclePolicy>(), Ok(RecyclePolicy::Respawn));
    assert_eq!(
        "loud".parse::<Intensity>(),
        Err(ConfigError::UnknownIntensity("loud".into()))
    );
}

#[test]
fn missing_keys_keep_defaults() {
    let cfg = FieldConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, FieldConfig::default());
    assert_eq!(cfg.pool_size(), 30);
    assert_eq!(cfg.recycle, RecyclePolicy::Columns);
    assert_eq!(cfg.seed, None);
}

#[test]
fn all_keys_are_read() {
    let cfg = FieldConfig::from_lookup(lookup(&[
        ("intensity", "subtle"),
        ("min-beams", "12"),
        ("recycle", "respawn"),
        ("seed", "42"),
    ]))
    .unwrap();
    assert_eq!(cfg.intensity, Intensity::Subtle);
    assert_eq!(cfg.minimum_beams, 12);
    assert_eq!(cfg.pool_size(), 18);
    assert_eq!(cfg.recycle, RecyclePolicy::Respawn);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn bad_values_are_reported() {
    let err = FieldConfig::from_lookup(lookup(&[("min-beams", "lots")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber {
            key: "min-beams",
            value: "lots".into()
        }
    );
    assert!(FieldConfig::from_lookup(lookup(&[("recycle", "spiral")])).is_err());
    assert!(FieldConfig::from_lookup(lookup(&[("seed", "-1")])).is_err());
}

#[test]
fn oversized_minimum_is_rejected() {
    let err = FieldConfig::from_lookup(lookup(&[("min-beams", "4000000000")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber {
            key: "min-beams",
            value: "4000000000".into()
        }
    );

    let at_cap = MAX_MINIMUM_BEAMS.to_string();
    let cfg = FieldConfig::from_lookup(lookup(&[("min-beams", at_cap.as_str())])).unwrap();
    assert_eq!(cfg.minimum_beams, MAX_MINIMUM_BEAMS);
}

#[test]
fn pool_size_stays_bounded_for_direct_configs() {
    let cfg = FieldConfig {
        minimum_beams: 4_000_000_000,
        ..Default::default()
    };
    assert!(cfg.pool_size() <= 10_000);
    assert_eq!(cfg.pool_size(), (MAX_MINIMUM_BEAMS as f32 * 1.5).round() as usize);
}
