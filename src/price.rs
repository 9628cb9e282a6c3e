/// Price text parsing and formatting for the storefront
/// Prices arrive as free-form text scraped from product cards
/// (e.g. "₹1,234.50" or a bare data attribute like "799").

/// Parse a displayed price into a number.
///
/// Algorithm:
/// 1. Strip every character that is not an ASCII digit or "."
///    (drops the currency glyph and thousands separators)
/// 2. Parse the longest leading numeric prefix, so a second dot
///    ends the number instead of invalidating it ("1.2.3" → 1.2)
/// 3. Fall back to 0.0 when no number remains (empty text, no
///    digits at all)
///
/// Examples:
/// - "₹1,234.50" → 1234.50
/// - "799" → 799.0
/// - "Sold out" → 0.0
pub fn parse_price(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // the stripped text is ASCII, so byte offsets are char offsets
    let mut end = 0;
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '.' if seen_dot => break,
            '.' => seen_dot = true,
            _ => {}
        }
        end += 1;
    }

    digits[..end].parse::<f64>().unwrap_or(0.0)
}

/// Format a price for display: rupee glyph, two decimal places.
pub fn format_price(value: f64) -> String {
    format!("₹{value:.2}")
}
