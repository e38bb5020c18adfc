use num_format::{Locale, ToFormattedString as _};

/// Rounds half away from zero to `decimal_places` before formatting, so ties
/// such as 0.125 render as "0.13".
pub(crate) fn fixed(value: f64, decimal_places: usize) -> String {
    let scale = 10f64.powi(decimal_places as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.decimal_places$}", rounded)
}

/// Format a monetary amount with two decimal places and thousands separators
/// (en locale, i.e. 1,000.00), prefixed with '$'.
pub(crate) fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    format!(
        "{}${}.{:02}",
        if amount < 0.0 && cents != 0 { "-" } else { "" },
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100,
    )
}

/// `"<p>% of $<total>"`, as attached to obligations from a multi-debtor split.
pub(crate) fn split_info(percentage: f64, total: f64) -> String {
    format!("{}% of ${}", fixed(percentage, 1), fixed(total, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(fixed(100.0 / 3.0, 1), "33.3");
        assert_eq!(fixed(10.0, 2), "10.00");
        assert_eq!(fixed(12.345, 2), "12.35");
    }

    #[test]
    fn format_amount_uses_thousands_separators() {
        assert_eq!(format_amount(1234567.891), "$1,234,567.89");
        assert_eq!(format_amount(0.5), "$0.50");
        assert_eq!(format_amount(-3.0), "-$3.00");
    }

    #[test]
    fn split_info_shape() {
        assert_eq!(split_info(100.0 / 3.0, 100.0), "33.3% of $100.00");
        assert_eq!(split_info(70.0, 50.0), "70.0% of $50.00");
    }
}
