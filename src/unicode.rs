//! Codepoint escape formatting for diagnostics and test comparison.

use std::fmt;

/// Wrapper that formats a string as one `\uXXXX` escape per codepoint.
///
/// ```
/// use khatt::unicode::DisplayUnicode;
///
/// assert_eq!(DisplayUnicode("\u{0644}\u{0627}").to_string(), "\\u0644\\u0627");
/// ```
#[derive(Clone, Copy)]
pub struct DisplayUnicode<'a>(pub &'a str);

impl fmt::Display for DisplayUnicode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            write!(f, "\\u{:04X}", ch as u32)?;
        }
        Ok(())
    }
}

/// Renders `text` as `\uXXXX` escapes. Empty input yields the empty string.
pub fn unicode_escape(text: &str) -> String {
    DisplayUnicode(text).to_string()
}
