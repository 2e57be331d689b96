use jiff::civil::Date;
use rust_decimal::Decimal;

/// Format an amount in euros, French style: `1 450,00 €`.
pub fn format_euros(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{cents}\u{a0}€")
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_format_euros() {
        assert_eq!(format_euros(dec!(0)), "0,00\u{a0}€");
        assert_eq!(format_euros(dec!(89.9)), "89,90\u{a0}€");
        assert_eq!(format_euros(dec!(1450)), "1\u{202f}450,00\u{a0}€");
        assert_eq!(
            format_euros(dec!(1234567.891)),
            "1\u{202f}234\u{202f}567,89\u{a0}€"
        );
        assert_eq!(format_euros(dec!(-12.5)), "-12,50\u{a0}€");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(jiff::civil::date(2026, 11, 2)), "02/11/2026");
    }
}
