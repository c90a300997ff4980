//! Currency display. Amounts are integer rupiah on the wire; the UI shows
//! them with dot thousands separators and the literal `Rp` prefix.

/// `1234567` -> `1.234.567`.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped.chars().rev().collect()
}

/// `1234567` -> `Rp 1.234.567`; negatives carry the sign up front.
pub fn format_rupiah(amount: i64) -> String {
    if amount < 0 {
        format!("-Rp {}", group_thousands(amount))
    } else {
        format!("Rp {}", group_thousands(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn formats_with_prefix_and_sign() {
        assert_eq!(format_rupiah(15_000), "Rp 15.000");
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(-2_500), "-Rp 2.500");
    }
}
