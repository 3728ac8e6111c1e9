//! Pluralization for log lines.

/// `"s"` unless `n` is exactly one.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by the noun, pluralized: `3 frames`, `1 document`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "frame"), "0 frames");
        assert_eq!(plural_count(1, "document"), "1 document");
        assert_eq!(plural_count(12, "frame reference"), "12 frame references");
    }
}
