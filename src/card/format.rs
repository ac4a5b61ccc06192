//! Number and label formatting for card text.

use crate::draw::color::{NEGATIVE, POSITIVE};
use crate::draw::Color;

/// Inserts `,` every three digits: `28943150` -> `28,943,150`.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Currency with thousands separators and two decimals: `$43,285.12`.
///
/// Rounds the exact binary value half-to-even, so `0.125` gives `$0.12`.
/// The sign follows the dollar sign: `$-12.50`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let Some((whole, cents)) = digits.split_once('.') else {
        // inf / NaN
        return format!("${fixed}");
    };
    format!("${sign}{}.{cents}", group_digits(whole))
}

/// Currency with thousands separators and no decimals: `$847,392,847`.
pub fn format_usd_whole(value: u64) -> String {
    format!("${}", group_thousands(value))
}

/// Shortest round-trip form that still shows a fractional digit: `48.0`, `-0.6`.
///
/// Exponents below -4 or from 16 up switch to exponent notation with a signed,
/// two-digit exponent: `1e+16`, `2.5e-07`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exp)) = scientific.split_once('e') {
        let exp: i32 = exp.parse().unwrap_or(0);
        if value != 0.0 && !(-4..16).contains(&exp) {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
        }
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Decimal followed by `%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value))
}

/// Direction of a price change; zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(change_pct: f64) -> Direction {
        if change_pct >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '▲',
            Direction::Down => '▼',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Direction::Up => POSITIVE,
            Direction::Down => NEGATIVE,
        }
    }
}

/// Indicator text drawn after the price, e.g. `▲ 2.3%`.
pub fn change_label(change_pct: f64) -> String {
    format!(
        "{} {}",
        Direction::of(change_pct).glyph(),
        format_percent(change_pct)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(28943150), "28,943,150");
        assert_eq!(group_thousands(847392847), "847,392,847");
    }

    #[test]
    fn usd_uses_two_decimals_and_separators() {
        assert_eq!(format_usd(43285.12), "$43,285.12");
        assert_eq!(format_usd(3125.40), "$3,125.40");
        assert_eq!(format_usd(0.68), "$0.68");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(-12.5), "$-12.50");
    }

    #[test]
    fn usd_rounds_the_stored_binary_value() {
        assert_eq!(format_usd(0.015), "$0.01");
        assert_eq!(format_usd(0.125), "$0.12");
        assert_eq!(format_usd(1234.565), "$1,234.57");
        assert_eq!(format_usd(-0.001), "$-0.00");
    }

    #[test]
    fn usd_does_not_saturate_large_values() {
        assert_eq!(format_usd(1e16), "$10,000,000,000,000,000.00");
        assert_eq!(format_usd(1.2345678901234568e17), "$123,456,789,012,345,680.00");
    }

    #[test]
    fn whole_usd_drops_decimals() {
        assert_eq!(format_usd_whole(28943150), "$28,943,150");
    }

    #[test]
    fn decimals_always_show_a_fraction() {
        assert_eq!(format_decimal(48.0), "48.0");
        assert_eq!(format_decimal(8.5), "8.5");
        assert_eq!(format_decimal(-0.6), "-0.6");
        assert_eq!(format_percent(52.1), "52.1%");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(1.2345678901234568e17), "1.2345678901234568e+17");
        assert_eq!(format_decimal(1.5e-5), "1.5e-05");
        assert_eq!(format_decimal(2.5e-7), "2.5e-07");
        assert_eq!(format_decimal(1e-4), "0.0001");
        assert_eq!(format_decimal(9999999999999998.0), "9999999999999998.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_percent(f64::NAN), "nan%");
    }

    #[test]
    fn direction_treats_zero_as_up() {
        assert_eq!(Direction::of(2.3), Direction::Up);
        assert_eq!(Direction::of(0.0), Direction::Up);
        assert_eq!(Direction::of(-0.6), Direction::Down);
        assert_eq!(Direction::Up.color(), POSITIVE);
        assert_eq!(Direction::Down.color(), NEGATIVE);
        assert_eq!(Direction::of(0.0).glyph(), '▲');
    }

    #[test]
    fn change_label_combines_glyph_and_percent() {
        assert_eq!(change_label(2.3), "▲ 2.3%");
        assert_eq!(change_label(-0.6), "▼ -0.6%");
    }
}
