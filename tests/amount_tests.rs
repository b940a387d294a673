// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use mondoclip::amount::Amount;
use mondoclip::error::Error;
use rust_decimal::Decimal;

#[test]
fn minor_units_convert_exactly() {
    let balance = Amount::from_minor_units(1951, "GBP");
    assert_eq!(balance.value(), Decimal::new(1951, 2));
    assert_eq!(balance.to_string(), "19.51 GBP");

    // Accumulating 1..=100 pence must not drift by a single cent.
    let mut total = Amount::from_minor_units(0, "GBP");
    for pence in 1..=100 {
        total = total.try_add(&Amount::from_minor_units(pence, "GBP")).unwrap();
    }
    assert_eq!(total, Amount::from_minor_units(5050, "GBP"));
    assert_eq!(total.to_string(), "50.50 GBP");
}

#[test]
fn negative_amounts_render_with_two_decimals() {
    assert_eq!(Amount::from_minor_units(-496, "GBP").to_string(), "-4.96 GBP");
    assert_eq!(Amount::from_minor_units(10000, "GBP").to_string(), "100.00 GBP");
    assert_eq!(Amount::from_minor_units(-650, "GBP").to_string(), "-6.50 GBP");
}

#[test]
fn addition_rejects_mixed_currencies() {
    let gbp = Amount::from_minor_units(100, "GBP");
    let eur = Amount::from_minor_units(100, "EUR");
    let err = gbp.try_add(&eur).unwrap_err();
    assert!(matches!(err, Error::CurrencyMismatch { .. }));
}

#[test]
fn addition_is_associative_and_commutative() {
    let a = Amount::from_minor_units(10000, "GBP");
    let b = Amount::from_minor_units(-650, "GBP");
    let c = Amount::from_minor_units(-550, "GBP");

    let left = a.try_add(&b).unwrap().try_add(&c).unwrap();
    let right = a.try_add(&b.try_add(&c).unwrap()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left, Amount::from_minor_units(8800, "GBP"));

    assert_eq!(a.try_add(&b).unwrap(), b.try_add(&a).unwrap());
}

#[test]
fn equality_requires_matching_currency() {
    assert_eq!(
        Amount::from_minor_units(100, "GBP"),
        Amount::from_minor_units(100, "GBP")
    );
    assert_ne!(
        Amount::from_minor_units(100, "GBP"),
        Amount::from_minor_units(100, "USD")
    );
    assert_ne!(
        Amount::from_minor_units(100, "GBP"),
        Amount::from_minor_units(101, "GBP")
    );
}
