//! Display formatting for prices.
//!
//! Purely a function of the numeric value — no locale dependency, so the
//! same input always renders the same string on every platform.

/// Format a price for display with precision tiers:
///
/// - absent → `"N/A"`
/// - below $1 → six decimal places (sub-dollar crypto prices)
/// - below $100 → two decimal places
/// - $100 and up → two decimal places with comma thousands separators
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price else {
        return "N/A".to_string();
    };

    if price < 1.0 {
        format!("${price:.6}")
    } else if price < 100.0 {
        format!("${price:.2}")
    } else {
        format!("${}", group_thousands(price))
    }
}

/// Render `value` with two decimals and commas every three integer digits.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    format!("{grouped}.{frac_part}")
}
