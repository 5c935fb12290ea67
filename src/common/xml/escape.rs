use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape XML special characters.
///
/// Used for every piece of user-supplied text that lands in a part:
/// slide text, speaker notes, picture descriptions and property values.
/// Characters XML 1.0 cannot carry at all (C0 controls other than tab,
/// line feed and carriage return, `U+FFFE`, `U+FFFF`) are dropped.
///
/// # Examples
///
/// ```
/// use demodeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("R&D <beta>"), "R&amp;D &lt;beta&gt;");
/// assert_eq!(escape_xml("\"it's\""), "&quot;it&apos;s&quot;");
/// assert_eq!(escape_xml("Acme\u{0B}Scanner"), "AcmeScanner");
/// ```
pub fn escape_xml(s: &str) -> String {
    const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];
    if s.chars().all(is_xml_char) {
        return XML_ESCAPER.replace_all(s, &REPLACEMENTS);
    }
    let cleaned: String = s.chars().filter(|&c| is_xml_char(c)).collect();
    XML_ESCAPER.replace_all(&cleaned, &REPLACEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_xml("30 minutes of your time"), "30 minutes of your time");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_control_characters_dropped() {
        assert_eq!(escape_xml("Acme\u{0B}Scanner"), "AcmeScanner");
        assert_eq!(escape_xml("\u{0}a\u{8}b\u{C}c\u{1F}<d>\u{FFFE}"), "abc&lt;d&gt;");
    }

    #[test]
    fn test_tab_and_newlines_kept() {
        assert_eq!(escape_xml("a\tb\nc\r\n"), "a\tb\nc\r\n");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(escape_xml("✓ 95% → done"), "✓ 95% → done");
    }
}
