/// Read a user id from a path segment.
///
/// Takes the leading integer, after optional whitespace and an optional `+`,
/// and ignores anything that follows it (`"12abc"` is 12). A `0x`/`0X` prefix
/// switches to hexadecimal (`"0x2"` is 2). Input without such a prefix,
/// negative input, and values beyond `u64` all yield 0, which no record ever
/// has, so they end in a not-found response instead of a parse error.
pub fn parse_id(segment: &str) -> u64 {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => leading_digits(hex, 16),
        None => leading_digits(unsigned, 10),
    }
}

fn leading_digits(text: &str, radix: u32) -> u64 {
    let end = text
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(text.len());
    u64::from_str_radix(&text[..end], radix).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_id("1"), 1);
        assert_eq!(parse_id("42"), 42);
        assert_eq!(parse_id("007"), 7);
    }

    #[test]
    fn test_leading_integer_prefix() {
        assert_eq!(parse_id("12abc"), 12);
        assert_eq!(parse_id("3.9"), 3);
        assert_eq!(parse_id("  5"), 5);
        assert_eq!(parse_id("+8"), 8);
        assert_eq!(parse_id("1e3"), 1);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_id("0x2"), 2);
        assert_eq!(parse_id("0XfF"), 255);
        assert_eq!(parse_id(" +0x1z"), 1);
        assert_eq!(parse_id("0x"), 0);
        assert_eq!(parse_id("0xg"), 0);
    }

    #[test]
    fn test_unparseable_defaults_to_zero() {
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id("-3"), 0);
        assert_eq!(parse_id("+"), 0);
        assert_eq!(parse_id("99999999999999999999999"), 0);
    }
}
