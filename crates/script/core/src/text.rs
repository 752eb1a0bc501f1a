//! Small string and number helpers shared by the selector, expression and
//! parameter parsers. Everything here works on borrowed slices.

use arrayvec::ArrayVec;

/// Parses a radius prefix such as `"5.0"` or `" 2.5e1"`.
///
/// Leading whitespace is skipped; anything after the numeral (including
/// trailing whitespace) makes the whole prefix invalid.
pub fn parse_radius(prefix: &str) -> Option<f32> {
    prefix.trim_start().parse().ok()
}

/// Splits `text` into at most three comma-separated components.
///
/// The third component keeps any remaining commas, so `"1,2,3,4"` yields
/// `["1", "2", "3,4"]`.
pub fn split_components(text: &str) -> ArrayVec<&str, 3> {
    text.splitn(3, ',').collect()
}

/// Interprets a designer-supplied flag.
///
/// Accepts `true/false`, `yes/no`, `on/off` (any case), or a number where any
/// nonzero value is true.
pub fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim();
    const TRUTHY: [&str; 3] = ["true", "yes", "on"];
    const FALSY: [&str; 3] = ["false", "no", "off"];

    if TRUTHY.iter().any(|word| text.eq_ignore_ascii_case(word)) {
        return Some(true);
    }
    if FALSY.iter().any(|word| text.eq_ignore_ascii_case(word)) {
        return Some(false);
    }
    text.parse::<f32>().ok().map(|value| value != 0.0)
}

/// Strips a single pair of matching single or double quotes.
pub fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    match bytes {
        [first @ (b'\'' | b'"'), .., last] if first == last => {
            &text[1..text.len() - 1]
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_prefix_must_be_a_whole_number() {
        assert_eq!(parse_radius("5.0"), Some(5.0));
        assert_eq!(parse_radius("  12"), Some(12.0));
        assert_eq!(parse_radius("1e1"), Some(10.0));
        assert_eq!(parse_radius("5.0 "), None);
        assert_eq!(parse_radius("5x"), None);
        assert_eq!(parse_radius(""), None);
    }

    #[test]
    fn components_split_at_most_three_ways() {
        assert_eq!(split_components("1,2,3").as_slice(), ["1", "2", "3"]);
        assert_eq!(split_components("1,,3").as_slice(), ["1", "", "3"]);
        assert_eq!(split_components("4").as_slice(), ["4"]);
        assert_eq!(split_components("1,2,3,4").as_slice(), ["1", "2", "3,4"]);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" yes "), Some(true));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("2"), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn unquote_only_strips_matching_pairs() {
        assert_eq!(unquote("'abc'"), "abc");
        assert_eq!(unquote("\"a;b\""), "a;b");
        assert_eq!(unquote("'abc\""), "'abc\"");
        assert_eq!(unquote("'"), "'");
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("plain"), "plain");
    }
}
