use ::std::fmt::Display;

use super::{fraction::Fraction, question::Operator};

pub const LABEL_BOX: &'static str = "□";
pub const LABEL_UNKNOWN: &'static str = "?";
pub const LABEL_QUOTIENT: &'static str = "商";
pub const LABEL_REMAINDER: &'static str = "あまり";
pub const LABEL_LIST_SEPARATOR: &'static str = "、";
pub const LABEL_PROBLEMS_SHEET: &'static str = "（問題）";
pub const LABEL_ANSWERS_SHEET: &'static str = "（模範解答）";
pub const PAGE_BREAK: char = '\u{0C}';
pub const MAX_DECIMAL_PLACES: u32 = 18;

pub fn format_fraction_raw(numerator: i128, denominator: i128) -> String {
    match (numerator, denominator) {
        (0, _) => "0".to_string(),
        (_, 1) => numerator.to_string(),
        _ => format!("{numerator}/{denominator}"),
    }
}

/// Shortest positional form with at least one fractional digit, `3.0` rather
/// than `3`. Only terminating decimals are expected here.
pub fn format_decimal_raw(value: &Fraction) -> String {
    let places = (1..=MAX_DECIMAL_PLACES)
        .find(|places| (*value * Fraction::from_integer(10_i128.pow(*places))).is_integer())
        .unwrap_or(MAX_DECIMAL_PLACES);
    let rounded = value.round_to_places(places);
    let units = rounded.numerator() * (10_i128.pow(places) / rounded.denominator());
    let sign = if units < 0 { "-" } else { "" };
    let units = units.abs();
    let scale = 10_i128.pow(places);
    format!("{sign}{}.{:0width$}", units / scale, units % scale, width = places as usize)
}

/// Joins terms with single-spaced operator glyphs, `12 + 3 - 4`.
pub fn format_expression<T: Display>(terms: &[T], operators: &[Operator]) -> String {
    let mut result = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            if let Some(op) = operators.get(i - 1) {
                result.push(' ');
                result.push_str(op.glyph());
                result.push(' ');
            }
        }
        result.push_str(&term.to_string());
    }
    result
}

pub fn format_remainder_answer(quotient: i64, remainder: i64) -> String {
    format!("{LABEL_QUOTIENT} {quotient}{LABEL_LIST_SEPARATOR}{LABEL_REMAINDER} {remainder}")
}

pub fn format_ratio(a: i64, b: i64) -> String {
    format!("{a}:{b}")
}

pub fn format_numbered_line<T: Display>(index: usize, text: T) -> String {
    format!("{index}. {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_keep_one_fractional_digit() {
        assert_eq!(format_decimal_raw(&Fraction::from_integer(3)), "3.0");
        assert_eq!(format_decimal_raw(&Fraction::from_scaled(125, 1)), "12.5");
        assert_eq!(format_decimal_raw(&Fraction::from_scaled(125, 3)), "0.125");
        assert_eq!(format_decimal_raw(&Fraction::from_scaled(-705, 2)), "-7.05");
        assert_eq!(format_decimal_raw(&Fraction::from_scaled(-5, 2)), "-0.05");
    }

    #[test]
    fn expression_uses_spaced_glyphs() {
        let text = format_expression(&[12, 3, 4], &[Operator::Add, Operator::Subtract]);
        assert_eq!(text, "12 + 3 - 4");
        let text = format_expression(&["1/2", "3"], &[Operator::Divide]);
        assert_eq!(text, "1/2 ÷ 3");
    }

    #[test]
    fn remainder_answer_text() {
        assert_eq!(format_remainder_answer(7, 3), "商 7、あまり 3");
    }
}
