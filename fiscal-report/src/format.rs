//! Number formatting for rendered documents.
//!
//! Two forms exist on purpose: [`currency`] is for human-facing output
//! ("S/." prefix, thousands separators), [`plain`] is for CSV cells,
//! which must stay machine-parseable.

use rust_decimal::Decimal;

/// Formats an amount for display: `S/. 1,234.56`.
pub fn currency(value: Decimal) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let rendered = plain(value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), "00"),
    };

    let grouped = group_thousands(int_part);
    if negative {
        format!("-S/. {grouped}.{frac_part}")
    } else {
        format!("S/. {grouped}.{frac_part}")
    }
}

/// Formats an amount as a bare number with two decimal places: `1234.56`.
pub fn plain(value: Decimal) -> String {
    format!("{value:.2}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
