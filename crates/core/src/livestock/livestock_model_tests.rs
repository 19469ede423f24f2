//! Unit tests for livestock data-entry validation.

use super::*;
use crate::errors::{Error, ValidationError};
use crate::settings::ValuationPreferences;
use chrono::{TimeZone, Utc};
use herdfolio_market_data::Species;
use rust_decimal_macros::dec;

fn base_input() -> LivestockGroupInput {
    LivestockGroupInput {
        id: Some("herd-1".to_string()),
        name: "River paddock steers".to_string(),
        species: "Cattle".to_string(),
        breed: Some("Angus".to_string()),
        category: "Grown Steer".to_string(),
        head_count: 100,
        initial_weight: dec!(300),
        daily_weight_gain: dec!(0.5),
        acquisition_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ..Default::default()
    }
}

#[test]
fn test_valid_input_builds_non_breeder() {
    let group = base_input()
        .into_group(&ValuationPreferences::default())
        .unwrap();

    assert_eq!(group.id, "herd-1");
    assert_eq!(group.species, Species::Cattle);
    assert_eq!(group.head_count, 100);
    assert_eq!(group.breeding, BreedingStatus::NonBreeder);
    assert!(group.mortality_rate.is_none());
    assert!(!group.is_sold());
}

#[test]
fn test_pregnant_without_joined_date_is_rejected() {
    let input = LivestockGroupInput {
        is_breeder: true,
        is_pregnant: true,
        joined_date: None,
        ..base_input()
    };

    let err = input.into_group(&ValuationPreferences::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(ref field)) if field == "joinedDate"
    ));
}

#[test]
fn test_pregnant_without_breeder_flag_is_rejected() {
    let input = LivestockGroupInput {
        is_breeder: false,
        is_pregnant: true,
        joined_date: Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()),
        ..base_input()
    };

    assert!(matches!(
        input.into_group(&ValuationPreferences::default()),
        Err(Error::Validation(ValidationError::InvalidInput(_)))
    ));
}

#[test]
fn test_pregnant_breeder_uses_default_calving_rate() {
    let joined = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    let input = LivestockGroupInput {
        is_breeder: true,
        is_pregnant: true,
        joined_date: Some(joined),
        calving_rate: None,
        ..base_input()
    };

    let group = input.into_group(&ValuationPreferences::default()).unwrap();
    assert_eq!(
        group.breeding,
        BreedingStatus::Pregnant {
            joined_date: joined,
            calving_rate: dec!(0.85),
        }
    );
    assert!(group.breeding.is_breeder());
    assert!(group.breeding.is_pregnant());
}

#[test]
fn test_open_breeder() {
    let input = LivestockGroupInput {
        is_breeder: true,
        calving_rate: Some(dec!(0.9)),
        ..base_input()
    };

    let group = input.into_group(&ValuationPreferences::default()).unwrap();
    assert_eq!(group.breeding, BreedingStatus::Open { calving_rate: dec!(0.9) });
    assert!(!group.breeding.is_pregnant());
}

#[test]
fn test_calving_rate_out_of_range() {
    let input = LivestockGroupInput {
        is_breeder: true,
        calving_rate: Some(dec!(1.5)),
        ..base_input()
    };

    assert!(matches!(
        input.into_group(&ValuationPreferences::default()),
        Err(Error::Validation(ValidationError::OutOfRange { .. }))
    ));
}

#[test]
fn test_negative_numbers_rejected() {
    let prefs = ValuationPreferences::default();

    let negative_heads = LivestockGroupInput {
        head_count: -3,
        ..base_input()
    };
    assert!(matches!(
        negative_heads.into_group(&prefs),
        Err(Error::Validation(ValidationError::Negative { .. }))
    ));

    let negative_weight = LivestockGroupInput {
        initial_weight: dec!(-1),
        ..base_input()
    };
    assert!(negative_weight.into_group(&prefs).is_err());

    let negative_gain = LivestockGroupInput {
        daily_weight_gain: dec!(-0.2),
        ..base_input()
    };
    assert!(negative_gain.into_group(&prefs).is_err());
}

#[test]
fn test_zero_head_count_is_valid() {
    let input = LivestockGroupInput {
        head_count: 0,
        ..base_input()
    };
    let group = input.into_group(&ValuationPreferences::default()).unwrap();
    assert_eq!(group.head_count, 0);
}

#[test]
fn test_default_mortality_rate_applied() {
    let prefs = ValuationPreferences {
        default_mortality_rate: Some(dec!(0.02)),
        ..Default::default()
    };

    let group = base_input().into_group(&prefs).unwrap();
    assert_eq!(group.mortality_rate, Some(dec!(0.02)));

    let explicit = LivestockGroupInput {
        mortality_rate: Some(dec!(0.05)),
        ..base_input()
    };
    assert_eq!(explicit.into_group(&prefs).unwrap().mortality_rate, Some(dec!(0.05)));
}

#[test]
fn test_sold_requires_date_and_price() {
    let input = LivestockGroupInput {
        is_sold: true,
        sold_date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
        sold_price: None,
        ..base_input()
    };
    assert!(matches!(
        input.into_group(&ValuationPreferences::default()),
        Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "soldPrice"
    ));

    let sold = LivestockGroupInput {
        is_sold: true,
        sold_date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
        sold_price: Some(dec!(180000)),
        ..base_input()
    };
    assert!(sold.into_group(&ValuationPreferences::default()).unwrap().is_sold());
}

#[test]
fn test_unknown_species_and_blank_category() {
    let prefs = ValuationPreferences::default();

    let alpaca = LivestockGroupInput {
        species: "Alpaca".to_string(),
        ..base_input()
    };
    assert!(matches!(
        alpaca.into_group(&prefs),
        Err(Error::Validation(ValidationError::InvalidInput(_)))
    ));

    let blank = LivestockGroupInput {
        category: "  ".to_string(),
        ..base_input()
    };
    assert!(matches!(
        blank.into_group(&prefs),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn test_missing_id_and_name_are_generated() {
    let input = LivestockGroupInput {
        id: None,
        name: String::new(),
        saleyard: Some("  ".to_string()),
        ..base_input()
    };
    let group = input.into_group(&ValuationPreferences::default()).unwrap();
    assert!(!group.id.is_empty());
    assert_eq!(group.name, "Cattle Grown Steer");
    assert!(group.saleyard.is_none());
}

#[test]
fn test_is_held_at() {
    let mut group = base_input()
        .into_group(&ValuationPreferences::default())
        .unwrap();
    let before = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
    let during = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();

    assert!(!group.is_held_at(before));
    assert!(group.is_held_at(during));

    group.sale = Some(SaleRecord {
        sold_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        sold_price: dec!(150000),
    });
    assert!(group.is_held_at(during));
    assert!(!group.is_held_at(after));
}

#[test]
fn test_input_deserializes_from_entry_form_json() {
    let json = r#"{
        "species": "sheep",
        "category": "Breeding Ewe",
        "headCount": 400,
        "initialWeight": 55,
        "dailyWeightGain": 0.1,
        "acquisitionDate": "2025-03-01T00:00:00Z",
        "isBreeder": true,
        "isPregnant": true,
        "joinedDate": "2025-04-01T00:00:00Z"
    }"#;
    let input: LivestockGroupInput = serde_json::from_str(json).unwrap();
    let group = input.into_group(&ValuationPreferences::default()).unwrap();
    assert_eq!(group.species, Species::Sheep);
    assert!(group.breeding.is_pregnant());
}

#[test]
fn test_is_active_at_excludes_any_sale_and_pending_acquisition() {
    let mut group = base_input()
        .into_group(&ValuationPreferences::default())
        .unwrap();
    let before = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
    let during = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    assert!(!group.is_active_at(before));
    assert!(group.is_active_at(during));

    group.sale = Some(SaleRecord {
        sold_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        sold_price: dec!(150000),
    });
    assert!(group.is_held_at(during));
    assert!(!group.is_active_at(during));
}
