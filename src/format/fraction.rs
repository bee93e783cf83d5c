/// Largest denominator tried when approximating the fractional part
const MAX_DENOMINATOR: u32 = 16;

/// How far the approximation may drift from the real value
const TOLERANCE: f64 = 0.01;

/// Shown for amounts too small to write with two decimals
const TINY_QUANTITY: &str = "<0.01";

/// Format an ingredient quantity for display
///
/// Whole numbers print as integers and the remainder is written as the
/// smallest-denominator fraction close enough to it, e.g. `0.5 -> "½"`, `1.5 -> "1½"`,
/// `2.0 -> "2"`. Absent, non-finite or non-positive quantities print blank.
pub fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        Some(value) if value.is_finite() && value > 0.0 => format_positive(value),
        _ => String::new(),
    }
}

fn format_positive(value: f64) -> String {
    if value < TOLERANCE {
        return TINY_QUANTITY.to_string();
    }
    if value >= u64::MAX as f64 {
        return trim_decimal(value);
    }

    let mut whole = value.trunc() as u64;
    let rest = value - value.trunc();

    if rest < TOLERANCE {
        return whole.to_string();
    }
    if 1.0 - rest < TOLERANCE {
        whole += 1;
        return whole.to_string();
    }

    match approximate(rest) {
        Some((numerator, denominator)) => {
            let fraction = glyph(numerator, denominator)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}/{}", numerator, denominator));
            match (whole, fraction.contains('/')) {
                (0, _) => fraction,
                (_, false) => format!("{}{}", whole, fraction),
                (_, true) => format!("{} {}", whole, fraction),
            }
        }
        None => trim_decimal(value),
    }
}

/// Smallest-denominator fraction within tolerance of `rest` (0 < rest < 1)
fn approximate(rest: f64) -> Option<(u32, u32)> {
    (2..=MAX_DENOMINATOR).find_map(|denominator| {
        let numerator = (rest * denominator as f64).round() as u32;
        let close = numerator > 0
            && numerator < denominator
            && (numerator as f64 / denominator as f64 - rest).abs() < TOLERANCE;
        close.then_some((numerator, denominator))
    })
}

fn glyph(numerator: u32, denominator: u32) -> Option<&'static str> {
    let glyph = match (numerator, denominator) {
        (1, 2) => "½",
        (1, 3) => "⅓",
        (2, 3) => "⅔",
        (1, 4) => "¼",
        (3, 4) => "¾",
        (1, 5) => "⅕",
        (2, 5) => "⅖",
        (3, 5) => "⅗",
        (4, 5) => "⅘",
        (1, 6) => "⅙",
        (5, 6) => "⅚",
        (1, 8) => "⅛",
        (3, 8) => "⅜",
        (5, 8) => "⅝",
        (7, 8) => "⅞",
        _ => return None,
    };
    Some(glyph)
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_quantity_is_blank() {
        assert_eq!(format_quantity(None), "");
        assert_eq!(format_quantity(Some(0.0)), "");
        assert_eq!(format_quantity(Some(f64::NAN)), "");
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_quantity(Some(1.0)), "1");
        assert_eq!(format_quantity(Some(12.0)), "12");
        assert_eq!(format_quantity(Some(2.999)), "3");
    }

    #[test]
    fn test_common_fractions_use_glyphs() {
        assert_eq!(format_quantity(Some(0.5)), "½");
        assert_eq!(format_quantity(Some(0.25)), "¼");
        assert_eq!(format_quantity(Some(0.75)), "¾");
        assert_eq!(format_quantity(Some(0.333)), "⅓");
        assert_eq!(format_quantity(Some(2.0 / 3.0)), "⅔");
        assert_eq!(format_quantity(Some(0.2)), "⅕");
        assert_eq!(format_quantity(Some(0.125)), "⅛");
    }

    #[test]
    fn test_mixed_numbers() {
        assert_eq!(format_quantity(Some(1.5)), "1½");
        assert_eq!(format_quantity(Some(2.25)), "2¼");
        assert_eq!(format_quantity(Some(1.1)), "1 1/10");
    }

    #[test]
    fn test_fractions_without_glyph() {
        assert_eq!(format_quantity(Some(0.7)), "7/10");
        assert_eq!(format_quantity(Some(0.3)), "3/10");
    }

    #[test]
    fn test_tiny_amounts_are_not_zero() {
        // 1/8 tsp for 16 servings scaled down to one
        assert_eq!(format_quantity(Some(0.125 / 16.0)), "<0.01");
        assert_eq!(format_quantity(Some(0.004)), "<0.01");
        assert_eq!(format_quantity(Some(0.0099)), "<0.01");
        assert_eq!(format_quantity(Some(0.01)), "0.01");
    }

    #[test]
    fn test_huge_amounts_do_not_saturate() {
        assert_eq!(format_quantity(Some(1e20)), "100000000000000000000");
        assert_ne!(format_quantity(Some(1e25)), u64::MAX.to_string());
    }

    #[test]
    fn test_scaled_values_stay_readable() {
        // 1/3 scaled up by 3/2
        assert_eq!(format_quantity(Some(1.0 / 3.0 * 1.5)), "½");
        // 1/2 scaled down from 4 to 3 servings
        assert_eq!(format_quantity(Some(0.5 * 3.0 / 4.0)), "⅜");
    }
}
