//! HTML Escaping
//!
//! Caller-supplied data fields (labels, titles, names, urls) are escaped on
//! interpolation. Fields documented as pre-rendered fragments (`content`,
//! footers, pane bodies) bypass these and are embedded verbatim.

/// Escape a string for interpolation into element text content
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for interpolation into a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_escapes_markup() {
        assert_eq!(
            escape_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"a"b'c"#), "a&quot;b&#39;c");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("Webhooks"), "Webhooks");
        assert_eq!(escape_attr("https://example.com/hook"), "https://example.com/hook");
    }

    #[test]
    fn test_ampersand_first() {
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }
}
