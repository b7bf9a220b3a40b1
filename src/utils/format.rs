// file: src/utils/format.rs
// description: Number formatting shared by the text reports and console preview

/// One decimal with a degree suffix, `N/A` when the statistic is undefined
pub fn format_celsius(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}°C", v),
        None => "N/A".to_string(),
    }
}

/// Integer with comma thousands separators (12345 -> "12,345")
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Bracketed, comma separated list: `[1990, 1991]`
pub fn format_years(years: &[i32]) -> String {
    let joined = years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(Some(21.46)), "21.5°C");
        assert_eq!(format_celsius(Some(-0.04)), "-0.0°C");
        assert_eq!(format_celsius(None), "N/A");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(&[1990, 1991]), "[1990, 1991]");
        assert_eq!(format_years(&[]), "[]");
    }
}
