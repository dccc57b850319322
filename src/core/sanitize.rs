// src/core/sanitize.rs

/// Characters stripped from the front of a description: space, hyphen,
/// en dash, em dash, colon.
const DESC_LEAD: &[char] = &[' ', '-', '\u{2013}', '\u{2014}', ':'];

/// Decode HTML character references: every HTML5 named entity plus
/// numeric ones. Unknown or malformed references are left as written.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    html_escape::decode_html_entities(s).into_owned()
}

/// Unicode line boundaries: LF, CR, VT, FF, FS, GS, RS, NEL, LS, PS.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Tidy the text that follows a code into its description.
pub fn clean_description(s: &str) -> String {
    s.trim().trim_start_matches(DESC_LEAD).to_string()
}
