//! Danger-marker helpers.
//!
//! Rules highlight the exact substring that caused a failure by wrapping it in
//! a pair of sentinel characters. The sentinels come from the Unicode private
//! use area, so they cannot collide with sheet text; the presentation layer
//! styles the enclosed span without re-deriving which substring failed.

use regex::Regex;

/// Opens a highlighted span.
pub const MARK_START: char = '\u{e000}';
/// Closes a highlighted span.
pub const MARK_END: char = '\u{e001}';

/// Middle dot used to make spaces visible in whitespace annotations.
pub const VISIBLE_SPACE: char = '\u{b7}'; // ·

/// Wrap `text` in danger markers.
pub fn mark(text: &str) -> String {
    format!("{MARK_START}{text}{MARK_END}")
}

/// Replace only the `nth` (0-based) match of `re` in `subject`.
///
/// Returns `subject` unchanged when the pattern has fewer than `nth + 1`
/// matches. The replacement is spliced in by byte offset, so it may differ in
/// length from the match.
pub fn replace_nth(re: &Regex, replacement: &str, subject: &str, nth: usize) -> String {
    match re.find_iter(subject).nth(nth) {
        Some(m) => {
            let mut out = String::with_capacity(subject.len() + replacement.len());
            out.push_str(&subject[..m.start()]);
            out.push_str(replacement);
            out.push_str(&subject[m.end()..]);
            out
        }
        None => subject.to_string(),
    }
}

/// Wrap every match of `re` in danger markers.
pub fn mark_all(re: &Regex, subject: &str) -> String {
    re.replace_all(subject, |caps: &regex::Captures| mark(&caps[0]))
        .into_owned()
}

/// Render every space as a visible middle dot.
pub fn visible_spaces(text: &str) -> String {
    text.replace(' ', &VISIBLE_SPACE.to_string())
}
