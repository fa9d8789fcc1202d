// crates/covidmap-core/src/format.rs

//! Text helpers: number formatting, HTML escaping and name folding.

/// Formats an integer with `,` as the thousands separator.
///
/// # Examples
///
/// ```rust
/// use covidmap_core::format::format_thousands;
///
/// assert_eq!(format_thousands(4_000_000), "4,000,000");
/// assert_eq!(format_thousands(500), "500");
/// ```
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Extension trait so call sites can write `stats.cases.thousands()`.
pub trait FormatThousands {
    fn thousands(&self) -> String;
}

impl FormatThousands for u64 {
    #[inline]
    fn thousands(&self) -> String {
        format_thousands(*self)
    }
}

/// Short human form used for headline figures: `9.5M`, `270K`, `812`.
///
/// One decimal is kept below 100 of the unit and dropped when it is zero.
/// A value that rounds up to 1000 of a unit is shown in the next one
/// (`999_999` is `1M`, not `1000K`).
pub fn format_compact(n: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000, "K"), (1_000_000, "M"), (1_000_000_000, "B")];
    let Some(mut idx) = UNITS.iter().rposition(|&(scale, _)| n >= scale) else {
        return n.to_string();
    };
    loop {
        let (scale, suffix) = UNITS[idx];
        let value = n as f64 / scale as f64;
        let text = if value >= 100.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        };
        if text == "1000" && idx + 1 < UNITS.len() {
            idx += 1;
            continue;
        }
        let text = text.strip_suffix(".0").unwrap_or(&text);
        return format!("{text}{suffix}");
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Folds a name for lookups: transliterate to ASCII, lowercase, trim.
///
/// `"Côte d'Ivoire"` and `"cote d'ivoire"` fold to the same key.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_from_the_right() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(12_345), "12,345");
        assert_eq!(format_thousands(4_000_000), "4,000,000");
        assert_eq!(format_thousands(u64::MAX), "18,446,744,073,709,551,615");
        assert_eq!(2_500u64.thousands(), "2,500");
    }

    #[test]
    fn compact_matches_headline_style() {
        assert_eq!(format_compact(9_500_000), "9.5M");
        assert_eq!(format_compact(8_900_000), "8.9M");
        assert_eq!(format_compact(270_000), "270K");
        assert_eq!(format_compact(2_000_000), "2M");
        assert_eq!(format_compact(812), "812");
        assert_eq!(format_compact(1_000), "1K");
    }

    #[test]
    fn compact_rounds_up_into_the_next_unit() {
        assert_eq!(format_compact(999_999), "1M");
        assert_eq!(format_compact(999_980_000), "1B");
        assert_eq!(format_compact(999_400), "999K");
    }

    #[test]
    fn escape_covers_markup() {
        assert_eq!(
            escape_html(r#"<b>"A&B's"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Sierra Leone"), "Sierra Leone");
    }

    #[test]
    fn fold_key_ignores_case_and_accents() {
        assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(fold_key("  SOUTH Africa "), "south africa");
    }
}
