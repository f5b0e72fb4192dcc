//! Number and timestamp formatting for conversion results.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;

/// Formats `value` with exactly `places` decimals and `,` thousands grouping.
pub fn format_decimal(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.*}", places as usize, rounded.abs());

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Converted amounts are shown with 2 decimals.
pub fn format_amount(value: Decimal) -> String {
    format_decimal(value, 2)
}

/// Exchange rates are shown with 6 decimals.
pub fn format_rate(value: Decimal) -> String {
    format_decimal(value, 6)
}

pub fn format_timestamp_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_decimal_places() {
        assert_eq!(format_amount(dec("92.5")), "92.50");
        assert_eq!(format_rate(dec("0.925")), "0.925000");
        assert_eq!(format_amount(dec("7")), "7.00");
        assert_eq!(format_rate(dec("1")), "1.000000");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_amount(dec("1.005")), "1.01");
        assert_eq!(format_amount(dec("1.004")), "1.00");
        assert_eq!(format_rate(dec("0.12345678")), "0.123457");
        assert_eq!(format_amount(dec("999.999")), "1,000.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_amount(dec("1234567.891")), "1,234,567.89");
        assert_eq!(format_amount(dec("123456")), "123,456.00");
        assert_eq!(format_amount(dec("12345")), "12,345.00");
        assert_eq!(format_amount(dec("-1234.5")), "-1,234.50");
        assert_eq!(format_decimal(dec("1234"), 0), "1,234");
    }

    #[test]
    fn test_timestamp_formatting() {
        let ts = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp_in(&ts, &Utc), "1/1/2024, 12:00:00 AM");

        let ts = DateTime::parse_from_rfc3339("2024-07-15T13:05:09Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp_in(&ts, &Utc), "7/15/2024, 1:05:09 PM");

        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(format_timestamp_in(&ts, &ist), "7/15/2024, 6:35:09 PM");
    }
}
