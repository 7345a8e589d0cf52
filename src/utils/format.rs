//! Number formatting for display surfaces.

/// Short human form: `42`, `1.2k`, `3.4M`, `1.1B`.
///
/// Values under 1000 are returned unchanged, so formatting is idempotent on
/// already-short values. A trailing `.0` is dropped (`2000 -> "2k"`).
pub fn format_compact(value: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "k")];

    for (scale, suffix) in UNITS {
        if value >= scale {
            let tenths = value / (scale / 10);
            let (whole, frac) = (tenths / 10, tenths % 10);
            return if frac == 0 {
                format!("{whole}{suffix}")
            } else {
                format!("{whole}.{frac}{suffix}")
            };
        }
    }
    value.to_string()
}

/// Thousands separators: `1234567 -> "1,234,567"`.
pub fn format_with_commas(value: u64) -> String {
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
