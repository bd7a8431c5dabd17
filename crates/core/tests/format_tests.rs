// ═══════════════════════════════════════════════════════════════════
// Format Tests — price display tiers
// ═══════════════════════════════════════════════════════════════════

use asset_tracker_core::format::format_price;

#[test]
fn absent_price_renders_sentinel() {
    assert_eq!(format_price(None), "N/A");
}

#[test]
fn sub_dollar_prices_get_six_decimals() {
    assert_eq!(format_price(Some(0.0)), "$0.000000");
    assert_eq!(format_price(Some(0.5)), "$0.500000");
    assert_eq!(format_price(Some(0.000001)), "$0.000001");
    // Rounds to six fractional digits
    assert_eq!(format_price(Some(0.123456789)), "$0.123457");
}

#[test]
fn mid_range_prices_get_two_decimals() {
    assert_eq!(format_price(Some(1.0)), "$1.00");
    assert_eq!(format_price(Some(9.5)), "$9.50");
    assert_eq!(format_price(Some(25.0)), "$25.00");
    assert_eq!(format_price(Some(99.99)), "$99.99");
}

#[test]
fn large_prices_get_thousands_separators() {
    assert_eq!(format_price(Some(100.0)), "$100.00");
    assert_eq!(format_price(Some(999.99)), "$999.99");
    assert_eq!(format_price(Some(1000.0)), "$1,000.00");
    assert_eq!(format_price(Some(65000.0)), "$65,000.00");
    assert_eq!(format_price(Some(1234567.891)), "$1,234,567.89");
}

#[test]
fn grouping_survives_rounding_across_a_boundary() {
    // 999.999 rounds to 1000.00, which needs a separator
    assert_eq!(format_price(Some(999.999)), "$1,000.00");
}

#[test]
fn tier_boundaries_are_exact() {
    // Just below $1 stays in the six-decimal tier
    assert_eq!(format_price(Some(0.999999)), "$0.999999");
    // Exactly $1 moves to two decimals
    assert_eq!(format_price(Some(1.0)), "$1.00");
    // Exactly $100 moves to the grouped tier (no separator needed yet)
    assert_eq!(format_price(Some(100.0)), "$100.00");
}

#[test]
fn fractional_digit_counts_match_tiers() {
    for &x in &[0.0, 0.1, 0.654321, 0.999] {
        let s = format_price(Some(x));
        let frac = s.split('.').nth(1).unwrap();
        assert_eq!(frac.len(), 6, "six fractional digits for {x}: {s}");
    }
    for &x in &[1.0, 42.0, 99.0, 100.0, 65000.0] {
        let s = format_price(Some(x));
        let frac = s.split('.').nth(1).unwrap();
        assert_eq!(frac.len(), 2, "two fractional digits for {x}: {s}");
    }
}
