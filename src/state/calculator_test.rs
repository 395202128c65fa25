use super::*;

// =============================================================
// Tax table
// =============================================================

#[test]
fn known_jurisdictions_use_the_table() {
    assert!((tax_rate("CA") - 0.08).abs() < 1e-12);
    assert!((tax_rate("NY") - 0.088).abs() < 1e-12);
    assert!((tax_rate("TX") - 0.0625).abs() < 1e-12);
    assert!((tax_rate("FL") - 0.06).abs() < 1e-12);
}

#[test]
fn unknown_jurisdictions_fall_back_to_the_default_rate() {
    assert!((tax_rate("ZZ") - DEFAULT_TAX_RATE).abs() < 1e-12);
    assert!((tax_rate("") - DEFAULT_TAX_RATE).abs() < 1e-12);
    assert!((tax_rate("ca") - DEFAULT_TAX_RATE).abs() < 1e-12);
}

// =============================================================
// Quantity parsing
// =============================================================

#[test]
fn quantity_defaults_to_one_on_parse_failure() {
    assert_eq!(parse_quantity(""), 1);
    assert_eq!(parse_quantity("lots"), 1);
}

#[test]
fn zero_and_negative_quantities_pass_through() {
    assert_eq!(parse_quantity("0"), 0);
    assert_eq!(parse_quantity("-2"), -2);
}

#[test]
fn quantity_tolerates_surrounding_whitespace() {
    assert_eq!(parse_quantity(" 12 "), 12);
}

// =============================================================
// Quotes
// =============================================================

#[test]
fn new_york_quote_for_three_units_at_one_hundred() {
    let quote = Quote::compute(100.0, 3, "NY");
    assert!((quote.subtotal - 300.0).abs() < 1e-9);
    assert!((quote.tax - 26.40).abs() < 1e-9);
    assert!((quote.total - 326.40).abs() < 1e-9);
    assert_eq!(
        quote.summary(),
        "Subtotal: $300.00 \u{2022} Tax (8.80%): $26.40 \u{2022} Total: $326.40"
    );
}

#[test]
fn unknown_jurisdiction_quote_uses_the_default_rate() {
    let quote = Quote::compute(50.0, 1, "ZZ");
    assert!((quote.tax - 4.0).abs() < 1e-9);
    assert!((quote.total - 54.0).abs() < 1e-9);
    assert_eq!(
        quote.summary(),
        "Subtotal: $50.00 \u{2022} Tax (8.00%): $4.00 \u{2022} Total: $54.00"
    );
}

#[test]
fn zero_price_quotes_to_zero() {
    let quote = Quote::compute(0.0, 5, "CA");
    assert_eq!(
        quote.summary(),
        "Subtotal: $0.00 \u{2022} Tax (8.00%): $0.00 \u{2022} Total: $0.00"
    );
}

// =============================================================
// Modal state
// =============================================================

#[test]
fn opening_captures_the_product_and_price() {
    let mut state = CalculatorState::default();
    assert!(!state.is_open());

    state.open("Aurora Gold Ring", 349.99);
    assert!(state.is_open());
    let session = state.session.clone().expect("open session");
    assert_eq!(session.product, "Aurora Gold Ring");
    assert!((session.unit_price - 349.99).abs() < 1e-9);
}

#[test]
fn closing_discards_the_session() {
    let mut state = CalculatorState::default();
    state.open("Celeste Pearl Necklace", 520.0);
    state.close();
    assert!(!state.is_open());
    assert!(state.session.is_none());
}
